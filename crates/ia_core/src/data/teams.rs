//! League organization catalog.
//!
//! Pure lookup table: 32 organizations with stable numeric ids. Event
//! generation copies the display fields into each record so downstream
//! consumers never need to join back against this table.

/// One league organization ("team").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    /// Stable numeric id (1-based, catalog order).
    pub id: u32,
    /// Full display name (e.g., "Kansas City Chiefs").
    pub name: &'static str,
    /// Short abbreviation (e.g., "KC").
    pub abbreviation: &'static str,
}

/// All 32 league organizations, in catalog order.
pub const TEAMS: &[Team] = &[
    Team { id: 1, name: "Arizona Cardinals", abbreviation: "ARI" },
    Team { id: 2, name: "Atlanta Falcons", abbreviation: "ATL" },
    Team { id: 3, name: "Baltimore Ravens", abbreviation: "BAL" },
    Team { id: 4, name: "Buffalo Bills", abbreviation: "BUF" },
    Team { id: 5, name: "Carolina Panthers", abbreviation: "CAR" },
    Team { id: 6, name: "Chicago Bears", abbreviation: "CHI" },
    Team { id: 7, name: "Cincinnati Bengals", abbreviation: "CIN" },
    Team { id: 8, name: "Cleveland Browns", abbreviation: "CLE" },
    Team { id: 9, name: "Dallas Cowboys", abbreviation: "DAL" },
    Team { id: 10, name: "Denver Broncos", abbreviation: "DEN" },
    Team { id: 11, name: "Detroit Lions", abbreviation: "DET" },
    Team { id: 12, name: "Green Bay Packers", abbreviation: "GB" },
    Team { id: 13, name: "Houston Texans", abbreviation: "HOU" },
    Team { id: 14, name: "Indianapolis Colts", abbreviation: "IND" },
    Team { id: 15, name: "Jacksonville Jaguars", abbreviation: "JAX" },
    Team { id: 16, name: "Kansas City Chiefs", abbreviation: "KC" },
    Team { id: 17, name: "Las Vegas Raiders", abbreviation: "LV" },
    Team { id: 18, name: "Los Angeles Chargers", abbreviation: "LAC" },
    Team { id: 19, name: "Los Angeles Rams", abbreviation: "LAR" },
    Team { id: 20, name: "Miami Dolphins", abbreviation: "MIA" },
    Team { id: 21, name: "Minnesota Vikings", abbreviation: "MIN" },
    Team { id: 22, name: "New England Patriots", abbreviation: "NE" },
    Team { id: 23, name: "New Orleans Saints", abbreviation: "NO" },
    Team { id: 24, name: "New York Giants", abbreviation: "NYG" },
    Team { id: 25, name: "New York Jets", abbreviation: "NYJ" },
    Team { id: 26, name: "Philadelphia Eagles", abbreviation: "PHI" },
    Team { id: 27, name: "Pittsburgh Steelers", abbreviation: "PIT" },
    Team { id: 28, name: "San Francisco 49ers", abbreviation: "SF" },
    Team { id: 29, name: "Seattle Seahawks", abbreviation: "SEA" },
    Team { id: 30, name: "Tampa Bay Buccaneers", abbreviation: "TB" },
    Team { id: 31, name: "Tennessee Titans", abbreviation: "TEN" },
    Team { id: 32, name: "Washington Commanders", abbreviation: "WAS" },
];

/// Look up an organization by id. Unknown ids return `None` (never panic).
pub fn team_by_id(id: u32) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.id == id)
}

/// Look up an organization by abbreviation (case-sensitive).
pub fn team_by_abbr(abbr: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.abbreviation == abbr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_32_teams_with_unique_ids() {
        assert_eq!(TEAMS.len(), 32);
        let mut ids: Vec<u32> = TEAMS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn lookup_by_id_and_abbr() {
        let kc = team_by_id(16).unwrap();
        assert_eq!(kc.abbreviation, "KC");
        assert_eq!(team_by_abbr("KC").unwrap().id, 16);
        assert!(team_by_id(99).is_none());
        assert!(team_by_abbr("XXX").is_none());
    }
}
