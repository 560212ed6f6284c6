//! Roster position catalog and position-group mapping.
//!
//! `POSITIONS` doubles as the canonical display ordering used by the
//! aggregation layer when sorting per-position rollups.

/// Roster positions in canonical display order.
pub const POSITIONS: &[&str] =
    &["QB", "RB", "FB", "WR", "TE", "OL", "DL", "LB", "CB", "S", "K", "P"];

/// Map a position to its position group.
///
/// Unknown positions fall into "Unknown" rather than failing; the
/// generator only draws from `POSITIONS`, so this arm is a guard for
/// externally supplied filters.
pub fn position_group(position: &str) -> &'static str {
    match position {
        "QB" => "Quarterback",
        "RB" | "FB" => "Backfield",
        "WR" | "TE" => "Receiver",
        "OL" => "Offensive Line",
        "DL" => "Defensive Line",
        "LB" => "Linebacker",
        "CB" | "S" => "Secondary",
        "K" | "P" => "Special Teams",
        _ => "Unknown",
    }
}

/// Index of a position within the canonical ordering, if present.
pub fn position_rank(position: &str) -> Option<usize> {
    POSITIONS.iter().position(|p| *p == position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_a_group() {
        for pos in POSITIONS {
            assert_ne!(position_group(pos), "Unknown", "{pos} is unmapped");
        }
    }

    #[test]
    fn rank_follows_catalog_order() {
        assert_eq!(position_rank("QB"), Some(0));
        assert_eq!(position_rank("P"), Some(POSITIONS.len() - 1));
        assert_eq!(position_rank("XX"), None);
    }
}
