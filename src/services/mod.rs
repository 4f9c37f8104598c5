pub mod activity;
pub mod match_scorer;
pub mod peer_similarity;
pub mod providers;
pub mod recommender;

pub use activity::aggregate;
pub use match_scorer::match_percentage;
pub use peer_similarity::similarity;
pub use recommender::{generate_from_peers, CandidateRecommender, DEFAULT_PEER_LIMIT};
