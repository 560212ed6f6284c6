//! Demographic synthesis: one biographical profile per unique player
//! name appearing in the corpus.

use chrono::{Datelike, NaiveDate};
use fxhash::FxHashMap;
use rand::Rng;
use tracing::debug;

use crate::data::pools;
use crate::models::{InjuryEvent, PlayerDemographics};

/// Synthesize demographics for every distinct player name in `events`.
///
/// The first corpus appearance of a name fixes its team/position;
/// later duplicates collapse into the same entry. Iteration follows
/// corpus order, so a seeded RNG yields a reproducible map.
pub fn synthesize<R: Rng>(
    events: &[InjuryEvent],
    reference_date: NaiveDate,
    rng: &mut R,
) -> FxHashMap<String, PlayerDemographics> {
    let mut demographics: FxHashMap<String, PlayerDemographics> = FxHashMap::default();

    for event in events {
        if demographics.contains_key(&event.player_name) {
            continue;
        }
        let profile = synthesize_one(
            &event.player_name,
            &event.team_abbr,
            &event.position,
            reference_date,
            rng,
        );
        demographics.insert(event.player_name.clone(), profile);
    }

    debug!(players = demographics.len(), "demographics synthesized");
    demographics
}

fn synthesize_one<R: Rng>(
    player_name: &str,
    team_abbr: &str,
    position: &str,
    reference_date: NaiveDate,
    rng: &mut R,
) -> PlayerDemographics {
    let age = rng.gen_range(22..36);
    let birth_year = reference_date.year() - age as i32;
    let birth_month = rng.gen_range(1..=12);
    let birth_day = rng.gen_range(1..=28);
    let date_of_birth = NaiveDate::from_ymd_opt(birth_year, birth_month, birth_day)
        .expect("day <= 28 is valid in every month");

    // 5'8" to 6'10", formatted feet-inches.
    let height_inches = rng.gen_range(68..83);
    let height = format!("{}-{}", height_inches / 12, height_inches % 12);

    let (weight_min, weight_max) = weight_range(position);
    let weight = rng.gen_range(weight_min..weight_max);

    // Double-uniform product skews tenure toward low values.
    let years_in_league = (((rng.gen::<f64>() * rng.gen::<f64>() * 20.0) as u32) + 1).min(15);

    let college = pools::COLLEGES[rng.gen_range(0..pools::COLLEGES.len())].to_string();

    PlayerDemographics {
        player_name: player_name.to_string(),
        date_of_birth,
        age,
        height,
        weight,
        college,
        years_in_league,
        team_abbr: team_abbr.to_string(),
        position: position.to_string(),
    }
}

/// Plausible weight range in pounds for a roster position.
fn weight_range(position: &str) -> (u32, u32) {
    match position {
        "QB" => (210, 245),
        "RB" | "FB" | "CB" | "S" => (180, 220),
        "WR" | "TE" => (190, 250),
        "LB" => (230, 260),
        "DL" | "OL" => (280, 330),
        _ => (180, 220),
    }
}
