//! Per-weight-class championship tournament
//!
//! Level 2 - Phases
//!
//! A tournament works on snapshots of the league's boxers taken when it is
//! built. Nothing it does is written back to the league, so bracket bouts
//! never count towards season records.

use serde::Serialize;

use ringside_core::{Bout, Boxer, BoxerId, PerformanceSampler, WeightClass};

use crate::bracket::{run_bracket, BracketMode, BRACKET_MATCHES, BRACKET_SIZE};
use crate::error::TournamentError;
use crate::league::League;
use crate::seeding::{seed_entrants, Entrant};

/// Reported outcome of a tournament
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentResult {
    pub weight_class: WeightClass,
    pub champion: BoxerId,
    /// Whether the final ended by knockout
    pub knockout: bool,
}

#[derive(Clone, Debug)]
pub struct Tournament {
    weight_class: WeightClass,
    participants: Vec<Entrant>,
    matches: Vec<Bout>,
}

impl Tournament {
    /// Collect one entrant per gym holding `weight_class` and seed them
    ///
    /// Gyms without a boxer in the class are skipped.
    pub fn new(league: &League, weight_class: WeightClass) -> Self {
        let mut participants: Vec<Entrant> = league
            .gyms()
            .iter()
            .enumerate()
            .filter_map(|(gym_index, gym)| {
                gym.boxer(weight_class).map(|boxer| Entrant {
                    gym_index,
                    boxer: boxer.clone(),
                })
            })
            .collect();
        seed_entrants(&mut participants, league.ledger());

        Self {
            weight_class,
            participants,
            matches: Vec::new(),
        }
    }

    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }

    /// Entrants in seed order
    pub fn participants(&self) -> &[Entrant] {
        &self.participants
    }

    /// Bracket bouts, empty until `simulate` succeeds
    pub fn matches(&self) -> &[Bout] {
        &self.matches
    }

    /// Run the bracket
    ///
    /// Fails without fighting anything when fewer than eight entrants exist.
    pub fn simulate<S: PerformanceSampler + ?Sized>(
        &mut self,
        mode: BracketMode,
        sampler: &mut S,
    ) -> Result<TournamentResult, TournamentError> {
        let seeds = self.seeds()?;
        self.matches = run_bracket(&seeds, mode, sampler);

        let result = self.summarize(&self.matches[BRACKET_MATCHES - 1]);
        tracing::info!(
            "Weight class {}: champion {}{}",
            self.weight_class,
            result.champion,
            if result.knockout { " by knockout" } else { "" }
        );
        Ok(result)
    }

    /// Result of the last simulation, if any
    pub fn result(&self) -> Option<TournamentResult> {
        self.matches.last().map(|final_bout| self.summarize(final_bout))
    }

    fn seeds(&self) -> Result<[Boxer; BRACKET_SIZE], TournamentError> {
        if self.participants.len() < BRACKET_SIZE {
            return Err(TournamentError::InsufficientParticipants {
                weight_class: self.weight_class,
                found: self.participants.len(),
                required: BRACKET_SIZE,
            });
        }
        Ok(std::array::from_fn(|i| self.participants[i].boxer.clone()))
    }

    fn summarize(&self, final_bout: &Bout) -> TournamentResult {
        TournamentResult {
            weight_class: self.weight_class,
            champion: final_bout.winner.id,
            knockout: final_bout.knockout,
        }
    }
}
