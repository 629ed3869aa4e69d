//! Championship - seasons followed by one tournament per weight class
//!
//! Level 1 - Orchestration

use rand::Rng;
use serde::Serialize;

use ringside_core::{GymId, WeightClass, WEIGHT_CLASS_COUNT};

use crate::config::LeagueConfig;
use crate::error::LeagueError;
use crate::league::{GymStanding, League};
use crate::tournament::{Tournament, TournamentResult};

/// Outcome of one weight class
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DivisionOutcome {
    Crowned(TournamentResult),
    Skipped { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DivisionReport {
    pub weight_class: WeightClass,
    pub entrants: usize,
    pub outcome: DivisionOutcome,
}

/// Everything the run produces for reporting
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChampionshipReport {
    pub seasons: u32,
    pub best_gym: Option<GymId>,
    pub best_gym_score: Option<f64>,
    pub standings: Vec<GymStanding>,
    pub divisions: Vec<DivisionReport>,
}

impl ChampionshipReport {
    /// Results of the weight classes that crowned a champion
    pub fn champions(&self) -> impl Iterator<Item = &TournamentResult> {
        self.divisions.iter().filter_map(|d| match &d.outcome {
            DivisionOutcome::Crowned(result) => Some(result),
            DivisionOutcome::Skipped { .. } => None,
        })
    }
}

/// Generate a league and play a full championship (Level 1 orchestration)
///
/// The same random source drives roster generation and every bout.
pub fn run_championship<R: Rng + ?Sized>(
    config: &LeagueConfig,
    rng: &mut R,
) -> Result<ChampionshipReport, LeagueError> {
    let mut league = League::generate(&config.roster, rng)?;
    Ok(play_championship(&mut league, config, rng))
}

/// Play seasons and tournaments on an existing league
///
/// A weight class without enough entrants is reported as skipped; the
/// other classes still run.
pub fn play_championship<R: Rng + ?Sized>(
    league: &mut League,
    config: &LeagueConfig,
    rng: &mut R,
) -> ChampionshipReport {
    tracing::info!("Starting championship: {} seasons, {:?} bracket", config.seasons, config.bracket);

    for _ in 0..config.seasons {
        league.simulate_season(rng);
    }

    let best_gym = league.best_gym();
    let best_gym_score = league.best_gym_score();
    match (best_gym, best_gym_score) {
        (Some(gym), Some(score)) => tracing::info!("Best gym: {} ({:.3})", gym, score),
        _ => tracing::info!("No gym has fought yet"),
    }

    let mut divisions = Vec::with_capacity(WEIGHT_CLASS_COUNT);
    for weight_class in WeightClass::all() {
        let mut tournament = Tournament::new(league, weight_class);
        let entrants = tournament.participants().len();
        let outcome = match tournament.simulate(config.bracket, rng) {
            Ok(result) => DivisionOutcome::Crowned(result),
            Err(e) => {
                tracing::warn!("Skipping weight class {}: {}", weight_class, e);
                DivisionOutcome::Skipped { reason: e.to_string() }
            }
        };
        divisions.push(DivisionReport {
            weight_class,
            entrants,
            outcome,
        });
    }

    ChampionshipReport {
        seasons: league.seasons_played(),
        best_gym,
        best_gym_score,
        standings: league.standings(),
        divisions,
    }
}
