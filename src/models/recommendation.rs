use serde::{Deserialize, Serialize};

/// A ranked recommendation resolved against the catalog
///
/// Produced fresh per request, never persisted by the engine. `reason` is the
/// free-text justification from the candidate generator and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationCandidate {
    pub catalog_id: u32,
    pub title: String,
    pub score: Option<f64>,
    pub match_percentage: u8,
    pub reason: String,
}

/// A candidate harvested from similar peers' ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeerCandidate {
    pub item_id: u32,
    /// Best similarity score among the peers proposing this item
    pub match_percentage: u8,
    /// How many distinct peers proposed it
    pub peer_count: u32,
}
