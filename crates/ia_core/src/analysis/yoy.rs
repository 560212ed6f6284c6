//! Year-over-year comparisons keyed by body part.
//!
//! Both period slices are arbitrary pre-filtered subsets; a body part
//! appearing in only one period still produces a row, with 0 for the
//! absent period.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::InjuryEvent;

/// One body-part row of a two-period comparison. `current_period` and
/// `previous_period` hold counts or day totals depending on the
/// producing function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoyRow {
    pub body_part: String,
    pub current_period: u32,
    pub previous_period: u32,
}

/// Injury counts per body part for two periods.
pub fn yoy_by_body_part(current: &[InjuryEvent], previous: &[InjuryEvent]) -> Vec<YoyRow> {
    compare(current, previous, |_| 1)
}

/// Days missed per body part for two periods. Every event contributes
/// its full days-out, below-threshold recoveries included.
pub fn yoy_days_by_body_part(current: &[InjuryEvent], previous: &[InjuryEvent]) -> Vec<YoyRow> {
    compare(current, previous, |event| event.days_out)
}

fn compare(
    current: &[InjuryEvent],
    previous: &[InjuryEvent],
    value: impl Fn(&InjuryEvent) -> u32,
) -> Vec<YoyRow> {
    let mut current_totals: FxHashMap<&str, u32> = FxHashMap::default();
    let mut previous_totals: FxHashMap<&str, u32> = FxHashMap::default();
    for event in current {
        *current_totals.entry(event.body_part.as_str()).or_default() += value(event);
    }
    for event in previous {
        *previous_totals.entry(event.body_part.as_str()).or_default() += value(event);
    }

    // Key union across both periods.
    let mut body_parts: Vec<&str> =
        current_totals.keys().chain(previous_totals.keys()).copied().collect();
    body_parts.sort_unstable();
    body_parts.dedup();

    let mut rows: Vec<YoyRow> = body_parts
        .into_iter()
        .map(|part| YoyRow {
            body_part: part.to_string(),
            current_period: current_totals.get(part).copied().unwrap_or(0),
            previous_period: previous_totals.get(part).copied().unwrap_or(0),
        })
        .collect();

    // Combined total descending, alphabetical on ties.
    rows.sort_by(|a, b| {
        let ta = a.current_period + a.previous_period;
        let tb = b.current_period + b.previous_period;
        tb.cmp(&ta).then_with(|| a.body_part.cmp(&b.body_part))
    });
    rows
}
