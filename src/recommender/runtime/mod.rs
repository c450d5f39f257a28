pub mod build;
pub mod engine;
pub mod matching;
pub mod model;
pub mod vectorizer;

pub use build::{BuildError, BuiltArtifacts, build_artifacts};
pub use engine::Recommender;
pub use matching::CosineMatcher;
pub use model::{MODEL_FORMAT_VERSION, ModelArtifacts, ModelError};
pub use vectorizer::TfidfVectorizer;
