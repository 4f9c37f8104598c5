use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::Semaphore;
use uuid::Uuid;

use crate::{
    error::EngineResult,
    models::{
        CatalogItem, ItemRating, PeerCandidate, PreferenceProfile, RecommendationCandidate,
        WatchHistoryEntry, WatchRecord,
    },
    services::{
        match_scorer,
        peer_similarity,
        providers::{CandidateTextProvider, CatalogProvider},
    },
};

/// Default number of peer-path candidates returned
pub const DEFAULT_PEER_LIMIT: usize = 5;

/// One parsed line of the candidate-text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    pub title: String,
    pub reason: String,
}

/// Parses the free-text candidate blob into title/reason pairs
///
/// The generator promises nothing about its output, so the grammar is
/// deliberately loose: lines split on the first colon, both halves trimmed,
/// blank lines skipped, a line without a colon becomes a title with an empty
/// reason. An empty blob parses to zero candidates.
pub fn parse_candidate_lines(blob: &str) -> Vec<CandidateLine> {
    blob.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let (title, reason) = match line.split_once(':') {
                Some((title, reason)) => (title.trim(), reason.trim()),
                None => (line, ""),
            };
            if title.is_empty() {
                return None;
            }
            Some(CandidateLine {
                title: title.to_string(),
                reason: reason.to_string(),
            })
        })
        .collect()
}

/// Harvests recommendation candidates from similar peers' ratings
///
/// Every peer is scored against the current user; each item a peer rated that
/// the current user has not becomes a candidate carrying the best similarity
/// seen for it and the number of distinct peers proposing it. Candidates rank
/// by (match percentage desc, peer count desc), stable under ties, truncated
/// to `limit`. Peers are visited in sorted-id order so the ranking is
/// deterministic regardless of map iteration order.
pub fn generate_from_peers(
    current: &[ItemRating],
    peers: &HashMap<Uuid, Vec<ItemRating>>,
    limit: usize,
) -> Vec<PeerCandidate> {
    let rated: HashSet<u32> = current.iter().map(|r| r.item_id).collect();

    let mut peer_ids: Vec<&Uuid> = peers.keys().collect();
    peer_ids.sort();

    let mut first_seen: Vec<u32> = Vec::new();
    let mut by_item: HashMap<u32, PeerCandidate> = HashMap::new();

    for peer_id in peer_ids {
        let peer_ratings = &peers[peer_id];
        let match_percentage = peer_similarity::similarity(current, peer_ratings);

        let mut proposed_by_this_peer = HashSet::new();
        for rating in peer_ratings {
            if rated.contains(&rating.item_id) || !proposed_by_this_peer.insert(rating.item_id) {
                continue;
            }
            match by_item.entry(rating.item_id) {
                Entry::Occupied(mut entry) => {
                    let candidate = entry.get_mut();
                    candidate.match_percentage = candidate.match_percentage.max(match_percentage);
                    candidate.peer_count += 1;
                }
                Entry::Vacant(entry) => {
                    first_seen.push(rating.item_id);
                    entry.insert(PeerCandidate {
                        item_id: rating.item_id,
                        match_percentage,
                        peer_count: 1,
                    });
                }
            }
        }
    }

    let mut candidates: Vec<PeerCandidate> = first_seen
        .into_iter()
        .filter_map(|item_id| by_item.remove(&item_id))
        .collect();
    candidates.sort_by(|a, b| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then(b.peer_count.cmp(&a.peer_count))
    });
    candidates.truncate(limit);
    candidates
}

/// Orchestrates recommendation generation against the external collaborators
pub struct CandidateRecommender {
    catalog: Arc<dyn CatalogProvider>,
    candidate_text: Arc<dyn CandidateTextProvider>,
    lookup_concurrency: usize,
}

impl CandidateRecommender {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        candidate_text: Arc<dyn CandidateTextProvider>,
        lookup_concurrency: usize,
    ) -> Self {
        Self {
            catalog,
            candidate_text,
            lookup_concurrency: lookup_concurrency.max(1),
        }
    }

    /// Generates ranked recommendations from free-text candidate generation
    ///
    /// A failure of the candidate-text call aborts the whole batch: with no
    /// blob there are no candidates. A failed or empty per-title lookup only
    /// drops that one candidate. Resolution fans out concurrently up to the
    /// configured cap; results keep their generation order before the final
    /// stable sort descending by match percentage.
    pub async fn generate_from_text(
        &self,
        profile: &PreferenceProfile,
        history: &[WatchRecord],
    ) -> EngineResult<Vec<RecommendationCandidate>> {
        let summary = preference_summary(profile, history);
        let blob = self.candidate_text.generate_candidates(&summary).await?;
        let lines = parse_candidate_lines(&blob);

        tracing::info!(candidates = lines.len(), "Parsed candidate lines");

        let resolved = self.resolve_titles(lines).await;

        let mut candidates: Vec<RecommendationCandidate> = resolved
            .into_iter()
            .map(|(line, item)| {
                let match_percentage = match_scorer::match_percentage(profile, history, &item);
                RecommendationCandidate {
                    catalog_id: item.id,
                    title: item.title,
                    score: item.score,
                    match_percentage,
                    reason: line.reason,
                }
            })
            .collect();

        candidates.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        tracing::info!(
            recommendations = candidates.len(),
            "Text-path recommendations ranked"
        );

        Ok(candidates)
    }

    /// Resolves onboarding entries into watch records
    ///
    /// Each entry is searched by title and takes the first catalog hit, which
    /// supplies the item id and genres; entries with no hit are dropped. Used
    /// when a new user lists what they have already watched.
    pub async fn resolve_watch_history(
        &self,
        entries: &[WatchHistoryEntry],
    ) -> EngineResult<Vec<WatchRecord>> {
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.catalog.search_by_title(&entry.title).await {
                Ok(results) => {
                    if let Some(item) = results.into_iter().next() {
                        records.push(WatchRecord {
                            item_id: item.id,
                            title: item.title,
                            rating: entry.rating,
                            status: entry.status,
                            genres: item.genres,
                        });
                    } else {
                        tracing::warn!(title = %entry.title, "No catalog match for watched title");
                    }
                }
                Err(e) => {
                    tracing::warn!(title = %entry.title, error = %e, "Watch history lookup failed");
                }
            }
        }
        Ok(records)
    }

    /// Recomputes match percentages for an existing watch history
    ///
    /// Looks each watched item up by id and rescores it against the current
    /// profile; items the catalog no longer knows are skipped.
    pub async fn rescore_history(
        &self,
        profile: &PreferenceProfile,
        history: &[WatchRecord],
    ) -> Vec<(u32, u8)> {
        let mut scores = Vec::with_capacity(history.len());
        for record in history {
            match self.catalog.get_by_id(record.item_id).await {
                Ok(item) => {
                    scores.push((
                        record.item_id,
                        match_scorer::match_percentage(profile, history, &item),
                    ));
                }
                Err(e) => {
                    tracing::warn!(item_id = record.item_id, error = %e, "Rescore lookup failed");
                }
            }
        }
        scores
    }

    /// Looks up every candidate title concurrently, keeping submission order
    async fn resolve_titles(&self, lines: Vec<CandidateLine>) -> Vec<(CandidateLine, CatalogItem)> {
        let semaphore = Arc::new(Semaphore::new(self.lookup_concurrency));
        let mut tasks = Vec::with_capacity(lines.len());

        for line in lines {
            let catalog = Arc::clone(&self.catalog);
            let semaphore = Arc::clone(&semaphore);
            tasks.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquisition cannot fail.
                let _permit = semaphore.acquire_owned().await.ok()?;
                let lookup = catalog.search_by_title(&line.title).await;
                match lookup {
                    Ok(results) => results.into_iter().next().map(|item| (line, item)),
                    Err(e) => {
                        tracing::warn!(title = %line.title, error = %e, "Candidate lookup failed");
                        None
                    }
                }
            }));
        }

        let mut resolved = Vec::new();
        for task in tasks {
            match task.await {
                Ok(Some(pair)) => resolved.push(pair),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Candidate lookup task panicked");
                }
            }
        }
        resolved
    }
}

/// Builds the natural-language preference summary sent to the generator
fn preference_summary(profile: &PreferenceProfile, history: &[WatchRecord]) -> String {
    let favorites: Vec<String> = profile
        .favorite_anime
        .iter()
        .map(|anime| format!("{} ({}/10)", anime.title, anime.rating))
        .collect();
    let watched: Vec<String> = history
        .iter()
        .map(|record| format!("{} ({}/10)", record.title, record.rating))
        .collect();

    format!(
        "Favorite Genres: {}\n\
         Favorite Anime: {}\n\
         Watched Anime: {}\n\
         Preferred Animation Style: {}\n\
         Preferred Story Length: {}\n\
         Preferred Release Era: {}\n\
         Preferred Themes: {}",
        profile.favorite_genres.join(", "),
        favorites.join(", "),
        watched.join(", "),
        profile.preferred_animation_style.join(", "),
        profile.preferred_story_length.as_deref().unwrap_or(""),
        profile.preferred_release_era.as_deref().unwrap_or(""),
        profile.preferred_themes.join(", "),
    )
}
