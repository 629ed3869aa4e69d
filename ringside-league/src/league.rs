//! League - gyms, round-robin seasons and standings
//!
//! Level 2 - Phases and Level 3 - Steps

use rand::Rng;
use serde::Serialize;

use ringside_core::{generate_roster, resolve, Corner, Gym, GymId, PerformanceSampler, RosterConfig, WeightClass};

use crate::error::LeagueError;
use crate::ledger::AdvantageLedger;

/// Number of gyms in a league
pub const GYM_COUNT: usize = 8;

/// Aggregate record of one gym
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GymStanding {
    pub gym: GymId,
    pub wins: u32,
    pub losses: u32,
    pub knockouts: u32,
    /// Win ratio, absent until the gym has fought
    pub score: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct League {
    gyms: Vec<Gym>,
    ledger: AdvantageLedger,
    best_gym_score: Option<f64>,
    seasons_played: u32,
}

impl League {
    pub fn new(gyms: Vec<Gym>) -> Result<Self, LeagueError> {
        if gyms.len() != GYM_COUNT {
            return Err(LeagueError::GymCount {
                expected: GYM_COUNT,
                found: gyms.len(),
            });
        }
        Ok(Self {
            ledger: AdvantageLedger::new(gyms.len()),
            gyms,
            best_gym_score: None,
            seasons_played: 0,
        })
    }

    /// Build a league of freshly generated gyms (ids 100 to 800)
    pub fn generate<R: Rng + ?Sized>(config: &RosterConfig, rng: &mut R) -> Result<Self, LeagueError> {
        let gyms = (0..GYM_COUNT)
            .map(|i| {
                let id = GymId::from_index(i);
                let roster = generate_roster(id, config, rng)?;
                Gym::new(id, roster)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(gyms)
    }

    pub fn gyms(&self) -> &[Gym] {
        &self.gyms
    }

    pub fn ledger(&self) -> &AdvantageLedger {
        &self.ledger
    }

    pub fn seasons_played(&self) -> u32 {
        self.seasons_played
    }

    /// Score recorded by the last `best_gym` call
    pub fn best_gym_score(&self) -> Option<f64> {
        self.best_gym_score
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Play every gym against every other gym once
    ///
    /// Records and the ledger carry over from earlier seasons.
    pub fn simulate_season<S: PerformanceSampler + ?Sized>(&mut self, sampler: &mut S) {
        let mut bouts = 0;
        for a in 0..self.gyms.len() {
            for b in (a + 1)..self.gyms.len() {
                bouts += self.gyms_match(a, b, sampler);
            }
        }
        self.seasons_played += 1;

        tracing::info!("Season {} complete: {} bouts", self.seasons_played, bouts);
    }

    // ========================================================================
    // Level 3 - Steps
    // ========================================================================

    /// Fight gym `a` against gym `b` in every weight class both of them hold
    ///
    /// Returns the number of bouts fought.
    pub fn gyms_match<S: PerformanceSampler + ?Sized>(&mut self, a: usize, b: usize, sampler: &mut S) -> usize {
        let mut bouts = 0;
        for weight_class in WeightClass::all() {
            if self.boxers_match(weight_class, a, b, sampler).is_some() {
                bouts += 1;
            }
        }
        bouts
    }

    /// Fight gym `a`'s boxer (red) against gym `b`'s boxer (blue)
    ///
    /// Returns +1 if red won, -1 if blue won, `None` if either gym has no
    /// boxer in the class or `a == b` (nothing changes).
    pub fn boxers_match<S: PerformanceSampler + ?Sized>(
        &mut self,
        weight_class: WeightClass,
        a: usize,
        b: usize,
        sampler: &mut S,
    ) -> Option<i32> {
        if a == b {
            return None;
        }

        let red = self.gyms[a].boxer(weight_class)?;
        let blue = self.gyms[b].boxer(weight_class)?;
        let (red_id, blue_id) = (red.id, blue.id);
        let outcome = resolve(red, blue, sampler);

        let (winner, loser) = match outcome.winner {
            Corner::Red => (a, b),
            Corner::Blue => (b, a),
        };
        if let Some(boxer) = self.gyms[winner].boxer_mut(weight_class) {
            boxer.record_win(outcome.knockout);
        }
        if let Some(boxer) = self.gyms[loser].boxer_mut(weight_class) {
            boxer.record_loss();
        }
        self.ledger.record(weight_class, winner, loser);

        tracing::debug!(
            "{}: {} vs {} -> {:?} by {:.1}{}",
            weight_class,
            red_id,
            blue_id,
            outcome.winner,
            outcome.margin(),
            if outcome.knockout { " (KO)" } else { "" }
        );

        Some(outcome.signum())
    }

    // ========================================================================
    // Level 4 - Queries
    // ========================================================================

    /// Gym with the highest win ratio
    ///
    /// Gyms without bouts are not considered. Ties go to the gym listed
    /// first. Also stores the winning ratio for `best_gym_score`.
    pub fn best_gym(&mut self) -> Option<GymId> {
        let mut best: Option<(GymId, f64)> = None;
        for gym in &self.gyms {
            if let Some(score) = gym.total_score() {
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((gym.id(), score));
                }
            }
        }
        self.best_gym_score = best.map(|(_, score)| score);
        best.map(|(id, _)| id)
    }

    /// Per-gym records in league order
    pub fn standings(&self) -> Vec<GymStanding> {
        self.gyms
            .iter()
            .map(|gym| GymStanding {
                gym: gym.id(),
                wins: gym.wins(),
                losses: gym.losses(),
                knockouts: gym.knockouts(),
                score: gym.total_score(),
            })
            .collect()
    }

    pub fn total_wins(&self) -> u32 {
        self.gyms.iter().map(Gym::wins).sum()
    }

    pub fn total_losses(&self) -> u32 {
        self.gyms.iter().map(Gym::losses).sum()
    }
}
