//! Skill recommendation engine.
//!
//! Two pipelines share nothing but the persisted artifacts:
//!
//! - **Build** (offline): [`defaults`] or a grouping file is inverted into a
//!   skill vocabulary and category map, a TF-IDF vectorizer is fitted, and the
//!   result is written through an [`persistence::ArtifactStore`].
//! - **Query** (online): the artifacts are loaded once into a
//!   [`runtime::Recommender`], which ranks skills by cosine similarity and
//!   filters them by the categories of the skills already held.

pub mod api;
pub mod defaults;
pub mod domain;
pub mod persistence;
pub mod runtime;
pub mod security;
pub mod telemetry;
