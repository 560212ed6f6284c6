//! Static reference data: organization catalog, roster positions and
//! the fixed sampling pools. Pure lookup tables, no logic.

pub mod pools;
pub mod positions;
pub mod teams;

pub use positions::{position_group, position_rank, POSITIONS};
pub use teams::{team_by_abbr, team_by_id, Team, TEAMS};
