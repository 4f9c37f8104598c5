use std::collections::HashSet;

use crate::models::{CatalogItem, PreferenceProfile, WatchRecord};

const GENRE_WEIGHT: f64 = 30.0;
const RATING_WEIGHT: f64 = 40.0;
const THEME_WEIGHT: f64 = 20.0;
const STYLE_WEIGHT: f64 = 10.0;

/// A user rating counts as "close" to a catalog score within this distance
const RATING_TOLERANCE: f64 = 2.0;

/// Scores one catalog item against a user's preferences and history
///
/// Up to four weighted factors contribute. A factor joins both the numerator
/// and the denominator only when its gating input is non-empty; absent data
/// drops the weight entirely rather than scoring it as zero. With no usable
/// factor at all the result is 0. Pure and total: never fails, never does I/O.
pub fn match_percentage(
    profile: &PreferenceProfile,
    history: &[WatchRecord],
    item: &CatalogItem,
) -> u8 {
    let factors = [
        (GENRE_WEIGHT, genre_factor(profile, item)),
        (RATING_WEIGHT, rating_factor(history, item)),
        (THEME_WEIGHT, theme_factor(profile, item)),
        (STYLE_WEIGHT, style_factor(profile, item)),
    ];

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (weight, contribution) in factors {
        if let Some(fraction) = contribution {
            numerator += fraction * weight;
            denominator += weight;
        }
    }

    if denominator == 0.0 {
        return 0;
    }

    (numerator / denominator * 100.0).round().clamp(0.0, 100.0) as u8
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// Fraction of the item's genres the user lists as favorites
fn genre_factor(profile: &PreferenceProfile, item: &CatalogItem) -> Option<f64> {
    if item.genres.is_empty() {
        return None;
    }
    let favorites = lowercase_set(&profile.favorite_genres);
    let matches = item
        .genres
        .iter()
        .filter(|genre| favorites.contains(&genre.to_lowercase()))
        .count();
    Some(matches as f64 / item.genres.len() as f64)
}

/// Fraction of watched items the user rated close to this item's catalog score
///
/// An item without a catalog score matches no record, but the factor still
/// counts once the user has any history. The user's 1-10 rating is compared
/// directly against the 0-10 catalog score, as the product has always done.
fn rating_factor(history: &[WatchRecord], item: &CatalogItem) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let close = history
        .iter()
        .filter(|record| {
            item.score
                .is_some_and(|score| (record.rating as f64 - score).abs() <= RATING_TOLERANCE)
        })
        .count();
    Some(close as f64 / history.len() as f64)
}

/// Fraction of the item's themes the user prefers
fn theme_factor(profile: &PreferenceProfile, item: &CatalogItem) -> Option<f64> {
    if profile.preferred_themes.is_empty() || item.themes.is_empty() {
        return None;
    }
    let preferred = lowercase_set(&profile.preferred_themes);
    let matches = item
        .themes
        .iter()
        .filter(|theme| preferred.contains(&theme.to_lowercase()))
        .count();
    Some(matches as f64 / item.themes.len() as f64)
}

/// All-or-nothing match of the item's primary studio against preferred styles
fn style_factor(profile: &PreferenceProfile, item: &CatalogItem) -> Option<f64> {
    if profile.preferred_animation_style.is_empty() {
        return None;
    }
    let style = item
        .primary_studio()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let hit = profile
        .preferred_animation_style
        .iter()
        .any(|preferred| preferred.to_lowercase() == style);
    Some(if hit { 1.0 } else { 0.0 })
}
