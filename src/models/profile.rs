use serde::{Deserialize, Serialize};

/// A favorite item declared during onboarding, with the user's 1-10 rating
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteAnime {
    pub id: u32,
    pub title: String,
    pub rating: u8,
}

/// The durable set of a user's declared tastes
///
/// Immutable for the duration of a scoring call. Empty collections mean the
/// user never stated that preference; scoring skips the matching factor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceProfile {
    pub favorite_genres: Vec<String>,
    pub favorite_anime: Vec<FavoriteAnime>,
    pub preferred_animation_style: Vec<String>,
    pub preferred_themes: Vec<String>,
    pub preferred_story_length: Option<String>,
    pub preferred_release_era: Option<String>,
}

/// Viewing status of a watch record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Completed,
    Watching,
    Dropped,
    PlanToWatch,
}

/// One entry of a user's watch history
///
/// `rating` is the user's overall 1-10 rating; `genres` are copied from the
/// catalog item at resolution time so scoring needs no further lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchRecord {
    pub item_id: u32,
    pub title: String,
    pub rating: u8,
    pub status: WatchStatus,
    pub genres: Vec<String>,
}

/// Unresolved onboarding input: a title the user remembers watching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchHistoryEntry {
    pub title: String,
    pub rating: u8,
    pub status: WatchStatus,
}
