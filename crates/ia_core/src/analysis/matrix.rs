//! Activity-by-body-part classification matrix.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::InjuryEvent;

/// Label of the margin row and column.
pub const TOTAL_LABEL: &str = "Total";

/// One row of the classification matrix. `counts` is parallel to the
/// parent matrix's `body_parts` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub team_activity: String,
    pub counts: Vec<u32>,
    /// Row margin: sum of `counts`.
    pub total: u32,
}

/// Cross-tabulation of injury counts by team activity (rows) and body
/// part (columns), with row and column margins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationMatrix {
    /// Column labels, sorted alphabetically.
    pub body_parts: Vec<String>,
    /// Activity rows sorted alphabetically, then the margin row last.
    pub rows: Vec<MatrixRow>,
}

impl ClassificationMatrix {
    /// Count at one (activity, body part) cell, margins included.
    pub fn cell(&self, team_activity: &str, body_part: &str) -> Option<u32> {
        let col = self.body_parts.iter().position(|p| p == body_part)?;
        let row = self.rows.iter().find(|r| r.team_activity == team_activity)?;
        Some(row.counts[col])
    }

    /// Grand total: the bottom-right margin cell.
    pub fn grand_total(&self) -> u32 {
        self.rows.last().map(|row| row.total).unwrap_or(0)
    }
}

/// Cross-tabulate a slice of events. Only activity/body-part pairs
/// present in the slice get rows and columns; an empty slice yields an
/// empty matrix with a zero margin row.
pub fn classification_matrix(events: &[InjuryEvent]) -> ClassificationMatrix {
    let mut cells: FxHashMap<(&str, &str), u32> = FxHashMap::default();
    for event in events {
        *cells.entry((event.team_activity.as_str(), event.body_part.as_str())).or_default() += 1;
    }

    let mut body_parts: Vec<&str> = events.iter().map(|e| e.body_part.as_str()).collect();
    body_parts.sort_unstable();
    body_parts.dedup();

    let mut activities: Vec<&str> = events.iter().map(|e| e.team_activity.as_str()).collect();
    activities.sort_unstable();
    activities.dedup();

    let mut rows: Vec<MatrixRow> = activities
        .iter()
        .map(|activity| {
            let counts: Vec<u32> = body_parts
                .iter()
                .map(|part| cells.get(&(*activity, *part)).copied().unwrap_or(0))
                .collect();
            let total = counts.iter().sum();
            MatrixRow { team_activity: activity.to_string(), counts, total }
        })
        .collect();

    // Margin row: per-column sums; its total is the event count.
    let column_totals: Vec<u32> = (0..body_parts.len())
        .map(|col| rows.iter().map(|row| row.counts[col]).sum())
        .collect();
    rows.push(MatrixRow {
        team_activity: TOTAL_LABEL.to_string(),
        total: column_totals.iter().sum(),
        counts: column_totals,
    });

    ClassificationMatrix {
        body_parts: body_parts.into_iter().map(str::to_string).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{EventGenerator, GeneratorConfig};
    use chrono::NaiveDate;

    fn event(activity: &str, body_part: &str) -> InjuryEvent {
        let config = GeneratorConfig {
            seed: 13,
            seasons: vec![2024],
            players_per_team_per_season: 1,
            injury_rate: 1.0,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let mut e = EventGenerator::new(config).generate().remove(0);
        e.team_activity = activity.to_string();
        e.body_part = body_part.to_string();
        e
    }

    #[test]
    fn cells_and_margins_are_consistent() {
        let events = vec![
            event("Game", "Knee"),
            event("Game", "Knee"),
            event("Game", "Ankle"),
            event("Practice", "Knee"),
        ];
        let matrix = classification_matrix(&events);

        assert_eq!(matrix.body_parts, vec!["Ankle", "Knee"]);
        assert_eq!(matrix.cell("Game", "Knee"), Some(2));
        assert_eq!(matrix.cell("Practice", "Ankle"), Some(0));
        assert_eq!(matrix.cell(TOTAL_LABEL, "Knee"), Some(3));

        let game = matrix.rows.iter().find(|r| r.team_activity == "Game").unwrap();
        assert_eq!(game.total, 3);
        assert_eq!(matrix.grand_total(), events.len() as u32);
    }

    #[test]
    fn margin_row_is_last_and_activities_are_sorted() {
        let events = vec![event("Training", "Hip"), event("Game", "Hip")];
        let matrix = classification_matrix(&events);
        let order: Vec<&str> = matrix.rows.iter().map(|r| r.team_activity.as_str()).collect();
        assert_eq!(order, vec!["Game", "Training", TOTAL_LABEL]);
    }

    #[test]
    fn grand_total_matches_corpus_size() {
        let config = GeneratorConfig {
            seed: 17,
            seasons: vec![2023, 2024],
            players_per_team_per_season: 28,
            injury_rate: 0.35,
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let events = EventGenerator::new(config).generate();
        let matrix = classification_matrix(&events);
        assert_eq!(matrix.grand_total(), events.len() as u32);

        // Column margins also sum to the corpus size.
        let margin = matrix.rows.last().unwrap();
        assert_eq!(margin.counts.iter().sum::<u32>(), events.len() as u32);
    }

    #[test]
    fn empty_slice_yields_empty_matrix() {
        let matrix = classification_matrix(&[]);
        assert!(matrix.body_parts.is_empty());
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.grand_total(), 0);
    }
}
