//! Derived views over the event corpus.
//!
//! Every function here is a pure aggregation over `&[InjuryEvent]` (or
//! `&[ActivityLogEntry]`); nothing is cached or persisted. Callers that
//! want a pre-filtered subset apply the dataset's filter accessors
//! first and pass the result in.

pub mod matrix;
pub mod missed_time;
pub mod player;
pub mod yoy;

pub use matrix::{classification_matrix, ClassificationMatrix, MatrixRow};
pub use missed_time::{
    benchmark_data, league_avg, missed_time_by_position, missed_time_stats, standing, stats_for,
    team_n_year_avg, BenchmarkData, MissedTimeStats, PositionMissedTime, Standing,
};
pub use player::{
    injuries_by_player_by_season, injury_counts_by_category, missed_days_over_time,
    missed_games_over_time, missed_practices_over_time, player_activity_log,
    player_injury_records, player_major_stats, CategoryCount, PlayerMajorStats, SeasonCount,
    TimeSeriesPoint,
};
pub use yoy::{yoy_by_body_part, yoy_days_by_body_part, YoyRow};
