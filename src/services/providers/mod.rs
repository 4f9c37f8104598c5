/// External collaborator abstractions
///
/// The engine reaches the anime catalog and the free-text candidate generator
/// only through these traits, so every orchestration path can be tested with
/// in-memory fakes. Concrete clients live in [`jikan`] and [`deepseek`].
use crate::{error::EngineResult, models::CatalogItem};

pub mod deepseek;
pub mod jikan;

pub use deepseek::DeepSeekClient;
pub use jikan::JikanCatalog;

/// Read-only catalog of anime, keyed by numeric id
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog by title
    ///
    /// The first element of the result is the best match. An empty result is
    /// a normal outcome, not an error.
    async fn search_by_title(&self, query: &str) -> EngineResult<Vec<CatalogItem>>;

    /// Fetch a single item by its catalog id
    async fn get_by_id(&self, id: u32) -> EngineResult<CatalogItem>;
}

/// Free-text recommendation-candidate generator
///
/// Given a natural-language preference summary, returns a text blob that is
/// expected, but not guaranteed, to hold newline-separated `Title: reason`
/// lines. The parser downstream tolerates any shape, including an empty blob.
#[async_trait::async_trait]
pub trait CandidateTextProvider: Send + Sync {
    async fn generate_candidates(&self, preference_summary: &str) -> EngineResult<String>;
}
