use std::collections::{HashMap, HashSet};

use crate::models::{ItemRating, MAX_CATEGORY_VALUE};

/// Scores how similarly two users rate the items they have in common
///
/// Intersects the two collections by item id (first rating per item wins if a
/// user rated the same item twice), then compares category by category:
/// `1 - |a - b| / 5` per category, flat-averaged over every category of every
/// common item, times 100. Symmetric in its arguments; an empty intersection
/// scores 0, so the average never divides by zero.
pub fn similarity(a: &[ItemRating], b: &[ItemRating]) -> u8 {
    let mut b_by_item: HashMap<u32, &ItemRating> = HashMap::new();
    for rating in b {
        b_by_item.entry(rating.item_id).or_insert(rating);
    }

    let mut total = 0.0;
    let mut categories = 0u32;
    let mut seen = HashSet::new();
    for rating_a in a {
        if !seen.insert(rating_a.item_id) {
            continue;
        }
        let Some(rating_b) = b_by_item.get(&rating_a.item_id) else {
            continue;
        };
        for (value_a, value_b) in rating_a
            .vector
            .values()
            .iter()
            .zip(rating_b.vector.values())
        {
            total += 1.0 - (value_a - value_b).abs() / MAX_CATEGORY_VALUE;
            categories += 1;
        }
    }

    if categories == 0 {
        return 0;
    }

    (total / categories as f64 * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8
}
