use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

use crate::models::{ActivityDataPoint, ActivityEvent, ActivityKind, TimeRange};

/// Buckets activity events into per-day counts within a lookback window
///
/// `now` is the explicit reference instant; the function never consults the
/// wall clock. Events older than the cutoff are dropped, the rest are grouped
/// by UTC calendar date. Dates with no events are omitted, not zero-filled;
/// output is ascending by date.
pub fn aggregate(
    events: &[ActivityEvent],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<ActivityDataPoint> {
    let cutoff = cutoff_for(range, now);

    let mut by_date: BTreeMap<NaiveDate, [u32; 4]> = BTreeMap::new();
    for event in events.iter().filter(|e| e.timestamp >= cutoff) {
        let counts = by_date.entry(event.timestamp.date_naive()).or_default();
        match event.kind {
            ActivityKind::Watch => counts[0] += 1,
            ActivityKind::Rate => counts[1] += 1,
            ActivityKind::Review => counts[2] += 1,
            // Both directions count: the metric is social-graph churn.
            ActivityKind::Follow | ActivityKind::Unfollow => counts[3] += 1,
        }
    }

    by_date
        .into_iter()
        .map(|(date, counts)| ActivityDataPoint {
            date: date.format("%Y-%m-%d").to_string(),
            watch_count: counts[0],
            rating_count: counts[1],
            review_count: counts[2],
            follow_count: counts[3],
        })
        .collect()
}

/// Day and week windows are fixed spans; month and year are calendar-relative
fn cutoff_for(range: TimeRange, now: DateTime<Utc>) -> DateTime<Utc> {
    match range {
        TimeRange::Day => now - Duration::days(1),
        TimeRange::Week => now - Duration::days(7),
        TimeRange::Month => now
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        TimeRange::Year => now
            .checked_sub_months(Months::new(12))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    }
}
