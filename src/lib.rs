//! Preference-matching and recommendation-ranking engine for an anime tracker.
//!
//! The engine turns a user's stated preferences, watch history, and per-category
//! ratings into match percentages, ranked recommendation lists, and per-day
//! activity aggregates. Rendering, persistence, and transport live elsewhere;
//! the catalog API and the candidate-text generator are reached through the
//! provider traits in [`services::providers`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{EngineError, EngineResult};

/// Installs a global tracing subscriber driven by `RUST_LOG`
///
/// Convenience for binaries embedding the engine; libraries and tests should
/// leave subscriber setup to their host.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
