//! Skill Swap Recommender
//!
//! Recommends related skills for a user given the skills they already have,
//! using TF-IDF similarity over skill names plus a coarse category filter.
//!
//! # Architecture
//!
//! - **Build**: offline fit of the vectorizer from a static category grouping,
//!   persisted as JSON artifacts
//! - **Engine**: read-only, in-memory ranking and category filtering
//! - **Server**: Axum-based HTTP API over a shared engine
//!
//! # Modules
//!
//! - [`recommender`]: domain types, vectorizer, engine, persistence, HTTP handlers
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`server`]: router construction and startup
//! - [`commands`]: offline build and one-shot query entry points

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_fields_in_debug)]

pub mod commands;
pub mod config;
pub mod recommender;
pub mod server;

use crate::config::AppConfig;
use crate::recommender::runtime::Recommender;
use crate::recommender::security::rate_limit::AppRateLimiter;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only recommendation engine.
    pub recommender: Arc<Recommender>,
    /// Global rate limiter, absent when rate limiting is disabled.
    pub rate_limiter: Option<Arc<AppRateLimiter>>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("skills", &self.recommender.skills().len())
            .field("rate_limited", &self.rate_limiter.is_some())
            .field("config", &self.config)
            .finish()
    }
}
