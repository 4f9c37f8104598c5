use serde::{Deserialize, Serialize};

/// A catalog entry as the engine sees it
///
/// Owned by the external catalog service and read-only here. The first studio
/// in `studios` doubles as the item's animation "style" for scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    /// Community score on a 0-10 scale; absent for unreleased or obscure items
    pub score: Option<f64>,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub studios: Vec<String>,
}

impl CatalogItem {
    /// The studio treated as the item's animation style, if any
    pub fn primary_studio(&self) -> Option<&str> {
        self.studios.first().map(String::as_str)
    }
}

// ============================================================================
// Jikan API Types
// ============================================================================

/// Raw anime payload from the Jikan API
#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnime {
    pub mal_id: u32,
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub genres: Vec<JikanNamed>,
    #[serde(default)]
    pub themes: Vec<JikanNamed>,
    #[serde(default)]
    pub studios: Vec<JikanNamed>,
}

/// Jikan wraps genre/theme/studio names in `{ "name": ... }` objects
#[derive(Debug, Clone, Deserialize)]
pub struct JikanNamed {
    pub name: String,
}

impl From<JikanAnime> for CatalogItem {
    fn from(anime: JikanAnime) -> Self {
        let names = |entries: Vec<JikanNamed>| entries.into_iter().map(|e| e.name).collect();

        CatalogItem {
            id: anime.mal_id,
            title: anime.title,
            score: anime.score,
            genres: names(anime.genres),
            themes: names(anime.themes),
            studios: names(anime.studios),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jikan_anime_deserialization() {
        let json = r#"{
            "mal_id": 21,
            "title": "One Piece",
            "score": 8.7,
            "genres": [{"name": "Action"}, {"name": "Adventure"}],
            "themes": [{"name": "Pirates"}],
            "studios": [{"name": "Toei Animation"}]
        }"#;

        let anime: JikanAnime = serde_json::from_str(json).unwrap();
        let item = CatalogItem::from(anime);
        assert_eq!(item.id, 21);
        assert_eq!(item.title, "One Piece");
        assert_eq!(item.score, Some(8.7));
        assert_eq!(item.genres, vec!["Action", "Adventure"]);
        assert_eq!(item.themes, vec!["Pirates"]);
        assert_eq!(item.primary_studio(), Some("Toei Animation"));
    }

    #[test]
    fn test_jikan_anime_missing_optional_fields() {
        let json = r#"{"mal_id": 99999, "title": "Unknown"}"#;

        let anime: JikanAnime = serde_json::from_str(json).unwrap();
        let item = CatalogItem::from(anime);
        assert_eq!(item.score, None);
        assert!(item.genres.is_empty());
        assert_eq!(item.primary_studio(), None);
    }
}
