use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use taste_engine::error::{EngineError, EngineResult};
use taste_engine::models::{CatalogItem, PreferenceProfile, WatchHistoryEntry, WatchStatus};
use taste_engine::services::providers::{CandidateTextProvider, CatalogProvider};
use taste_engine::services::CandidateRecommender;

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogProvider for Catalog {
        async fn search_by_title(&self, query: &str) -> EngineResult<Vec<CatalogItem>>;
        async fn get_by_id(&self, id: u32) -> EngineResult<CatalogItem>;
    }
}

mock! {
    pub Generator {}

    #[async_trait]
    impl CandidateTextProvider for Generator {
        async fn generate_candidates(&self, preference_summary: &str) -> EngineResult<String>;
    }
}

fn item(id: u32, title: &str, genres: &[&str], score: Option<f64>) -> CatalogItem {
    CatalogItem {
        id,
        title: title.to_string(),
        score,
        genres: genres.iter().map(|s| s.to_string()).collect(),
        themes: vec![],
        studios: vec![],
    }
}

fn action_fan() -> PreferenceProfile {
    PreferenceProfile {
        favorite_genres: vec!["Action".to_string()],
        ..Default::default()
    }
}

fn build_recommender(
    catalog: MockCatalog,
    generator: MockGenerator,
) -> CandidateRecommender {
    CandidateRecommender::new(Arc::new(catalog), Arc::new(generator), 4)
}

#[tokio::test]
async fn text_path_resolves_scores_and_ranks() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate_candidates()
        .returning(|_| Ok("One Piece: great adventure\nAttack on Titan: action-packed".to_string()));

    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_by_title()
        .with(eq("One Piece"))
        .returning(|_| Ok(vec![item(21, "One Piece", &["Action", "Adventure"], Some(8.7))]));
    catalog
        .expect_search_by_title()
        .with(eq("Attack on Titan"))
        .returning(|_| Ok(vec![item(16498, "Attack on Titan", &["Action"], Some(8.5))]));

    let recommender = build_recommender(catalog, generator);
    let candidates = recommender
        .generate_from_text(&action_fan(), &[])
        .await
        .unwrap();

    // Attack on Titan matches the action-only profile fully, One Piece half.
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].title, "Attack on Titan");
    assert_eq!(candidates[0].match_percentage, 100);
    assert_eq!(candidates[0].reason, "action-packed");
    assert_eq!(candidates[1].title, "One Piece");
    assert_eq!(candidates[1].match_percentage, 50);
    assert_eq!(candidates[1].reason, "great adventure");
}

#[tokio::test]
async fn text_path_empty_response_is_not_an_error() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate_candidates()
        .returning(|_| Ok(String::new()));
    let catalog = MockCatalog::new();

    let recommender = build_recommender(catalog, generator);
    let candidates = recommender
        .generate_from_text(&action_fan(), &[])
        .await
        .unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn text_path_generator_failure_aborts_batch() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate_candidates()
        .returning(|_| Err(EngineError::ExternalApi("timeout".to_string())));
    let catalog = MockCatalog::new();

    let recommender = build_recommender(catalog, generator);
    let result = recommender.generate_from_text(&action_fan(), &[]).await;
    assert!(matches!(result, Err(EngineError::ExternalApi(_))));
}

#[tokio::test]
async fn text_path_drops_unresolved_titles_silently() {
    let mut generator = MockGenerator::new();
    generator.expect_generate_candidates().returning(|_| {
        Ok("Attack on Titan: action-packed\nMade Up Show: does not exist\nBroken Lookup: boom"
            .to_string())
    });

    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_by_title()
        .with(eq("Attack on Titan"))
        .returning(|_| Ok(vec![item(16498, "Attack on Titan", &["Action"], Some(8.5))]));
    catalog
        .expect_search_by_title()
        .with(eq("Made Up Show"))
        .returning(|_| Ok(vec![]));
    catalog
        .expect_search_by_title()
        .with(eq("Broken Lookup"))
        .returning(|_| Err(EngineError::ExternalApi("upstream down".to_string())));

    let recommender = build_recommender(catalog, generator);
    let candidates = recommender
        .generate_from_text(&action_fan(), &[])
        .await
        .unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].title, "Attack on Titan");
}

#[tokio::test]
async fn text_path_sends_preference_summary() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate_candidates()
        .withf(|summary| summary.contains("Favorite Genres: Action"))
        .returning(|_| Ok(String::new()));
    let catalog = MockCatalog::new();

    let recommender = build_recommender(catalog, generator);
    recommender
        .generate_from_text(&action_fan(), &[])
        .await
        .unwrap();
}

#[tokio::test]
async fn watch_history_resolution_keeps_hits_and_drops_misses() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_by_title()
        .with(eq("One Piece"))
        .returning(|_| Ok(vec![item(21, "One Piece", &["Action", "Adventure"], Some(8.7))]));
    catalog
        .expect_search_by_title()
        .with(eq("Totally Unknown"))
        .returning(|_| Ok(vec![]));
    let generator = MockGenerator::new();

    let entries = vec![
        WatchHistoryEntry {
            title: "One Piece".to_string(),
            rating: 9,
            status: WatchStatus::Watching,
        },
        WatchHistoryEntry {
            title: "Totally Unknown".to_string(),
            rating: 5,
            status: WatchStatus::Dropped,
        },
    ];

    let recommender = build_recommender(catalog, generator);
    let records = recommender.resolve_watch_history(&entries).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].item_id, 21);
    assert_eq!(records[0].title, "One Piece");
    assert_eq!(records[0].rating, 9);
    assert_eq!(records[0].status, WatchStatus::Watching);
    assert_eq!(records[0].genres, vec!["Action", "Adventure"]);
}

#[tokio::test]
async fn rescoring_skips_items_the_catalog_no_longer_knows() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_by_id()
        .with(eq(16498))
        .returning(|_| Ok(item(16498, "Attack on Titan", &["Action"], Some(8.5))));
    catalog
        .expect_get_by_id()
        .with(eq(404404))
        .returning(|_| Err(EngineError::NotFound("gone".to_string())));
    let generator = MockGenerator::new();

    let history = vec![
        taste_engine::models::WatchRecord {
            item_id: 16498,
            title: "Attack on Titan".to_string(),
            rating: 9,
            status: WatchStatus::Completed,
            genres: vec!["Action".to_string()],
        },
        taste_engine::models::WatchRecord {
            item_id: 404404,
            title: "Delisted".to_string(),
            rating: 6,
            status: WatchStatus::Completed,
            genres: vec![],
        },
    ];

    let recommender = build_recommender(catalog, generator);
    let scores = recommender.rescore_history(&action_fan(), &history).await;

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].0, 16498);
    // Genre factor 30/30, rating factor: 9 within 2 of 8.5, 6 is not -> 20/40.
    assert_eq!(scores[0].1, 71);
}
