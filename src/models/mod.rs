pub mod activity;
pub mod catalog;
pub mod profile;
pub mod rating;
pub mod recommendation;

pub use activity::{ActivityDataPoint, ActivityEvent, ActivityKind, TimeRange};
pub use catalog::{CatalogItem, JikanAnime};
pub use profile::{
    FavoriteAnime, PreferenceProfile, WatchHistoryEntry, WatchRecord, WatchStatus,
};
pub use rating::{ItemRating, RatingVector, CATEGORY_COUNT, MAX_CATEGORY_VALUE, RATING_CATEGORIES};
pub use recommendation::{PeerCandidate, RecommendationCandidate};
