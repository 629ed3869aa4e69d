//! Ringside League - Seasons, seeding and championship brackets
//!
//! This crate provides league infrastructure:
//! - Round-robin seasons between gyms
//! - The gym-vs-gym advantage ledger
//! - Tournament seeding and the fixed 14-match bracket
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_championship (orchestration)
//! - Level 2: simulate_season, Tournament::simulate (phases)
//! - Level 3: gyms_match, boxers_match, seed_entrants (steps)
//! - Level 4: ledger, configuration

mod bracket;
mod championship;
mod config;
mod error;
mod ledger;
mod league;
mod seeding;
mod tournament;

pub use bracket::{run_bracket, topology, BracketMode, Slot, BRACKET_MATCHES, BRACKET_SIZE};
pub use championship::{play_championship, run_championship, ChampionshipReport, DivisionOutcome, DivisionReport};
pub use config::LeagueConfig;
pub use error::{LeagueError, TournamentError};
pub use ledger::AdvantageLedger;
pub use league::{GymStanding, League, GYM_COUNT};
pub use seeding::{seed_entrants, seeding_order, Entrant};
pub use tournament::{Tournament, TournamentResult};
