//! Bout resolution - the only source of uncertainty in the league
//!
//! Each boxer's performance is drawn from a normal distribution centred on
//! their ability. The spread widens for close matchups (floor of 15) so that
//! upsets stay possible, and a winning margin above 30 counts as a knockout.
//!
//! Resolution never touches records; callers apply the outcome.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::boxer::Boxer;

/// Minimum performance spread
pub const SIGMA_FLOOR: f64 = 15.0;
/// Winning margin above which a bout ends by knockout
pub const KNOCKOUT_MARGIN: f64 = 30.0;

/// Performance spread for a matchup
pub fn sigma(ability_a: u32, ability_b: u32) -> f64 {
    (ability_a.abs_diff(ability_b) as f64 / 3.0).max(SIGMA_FLOOR)
}

/// Source of boxer performances
pub trait PerformanceSampler {
    /// Draw a performance for a boxer of the given ability
    fn perform(&mut self, mean: f64, sigma: f64) -> f64;
}

impl<R: Rng + ?Sized> PerformanceSampler for R {
    fn perform(&mut self, mean: f64, sigma: f64) -> f64 {
        let z: f64 = StandardNormal.sample(self);
        mean + sigma * z
    }
}

/// Replays a fixed cycle of performances, ignoring ability
///
/// Red is always drawn before blue, so a script of `[red, blue, red, blue, ...]`
/// decides consecutive bouts in order.
#[derive(Clone, Debug)]
pub struct ScriptedSampler {
    script: Vec<f64>,
    cursor: usize,
}

impl ScriptedSampler {
    /// # Panics
    ///
    /// If `script` is empty.
    pub fn new(script: Vec<f64>) -> Self {
        assert!(!script.is_empty(), "scripted sampler needs at least one performance");
        Self { script, cursor: 0 }
    }

    /// Performances consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl PerformanceSampler for ScriptedSampler {
    fn perform(&mut self, _mean: f64, _sigma: f64) -> f64 {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}

/// Side of the ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    Red,
    Blue,
}

/// Outcome of a single resolved bout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoutOutcome {
    pub winner: Corner,
    pub winner_score: f64,
    pub loser_score: f64,
    pub knockout: bool,
}

impl BoutOutcome {
    /// +1 if red won, -1 if blue won
    pub fn signum(&self) -> i32 {
        match self.winner {
            Corner::Red => 1,
            Corner::Blue => -1,
        }
    }

    pub fn margin(&self) -> f64 {
        self.winner_score - self.loser_score
    }
}

/// Resolve a bout between two boxers
///
/// Red's performance is drawn first. Red only wins on a strictly higher
/// performance; exact ties (probability zero with a real sampler) go to blue.
pub fn resolve<S: PerformanceSampler + ?Sized>(red: &Boxer, blue: &Boxer, sampler: &mut S) -> BoutOutcome {
    let spread = sigma(red.ability, blue.ability);
    let red_score = sampler.perform(red.ability as f64, spread);
    let blue_score = sampler.perform(blue.ability as f64, spread);

    let (winner, winner_score, loser_score) = if red_score > blue_score {
        (Corner::Red, red_score, blue_score)
    } else {
        (Corner::Blue, blue_score, red_score)
    };

    BoutOutcome {
        winner,
        winner_score,
        loser_score,
        knockout: winner_score - loser_score > KNOCKOUT_MARGIN,
    }
}

/// A resolved bout holding value snapshots of both boxers
///
/// Snapshots are detached from any live record: contesting a bout never
/// changes the boxers it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Bout {
    pub red: Boxer,
    pub blue: Boxer,
    pub winner: Boxer,
    pub loser: Boxer,
    pub knockout: bool,
}

impl Bout {
    pub fn contest<S: PerformanceSampler + ?Sized>(red: &Boxer, blue: &Boxer, sampler: &mut S) -> Self {
        let outcome = resolve(red, blue, sampler);
        let (winner, loser) = match outcome.winner {
            Corner::Red => (red.clone(), blue.clone()),
            Corner::Blue => (blue.clone(), red.clone()),
        };

        Self {
            red: red.clone(),
            blue: blue.clone(),
            winner,
            loser,
            knockout: outcome.knockout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxer::BoxerId;
    use crate::weight_class::WeightClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn boxer(id: u32, ability: u32) -> Boxer {
        Boxer::new(BoxerId(id), ability, WeightClass::new(5).unwrap(), 118)
    }

    #[test]
    fn test_sigma_floor_and_scaling() {
        assert_eq!(sigma(100, 100), SIGMA_FLOOR);
        assert_eq!(sigma(100, 130), SIGMA_FLOOR);
        assert!((sigma(150, 50) - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(sigma(50, 150), sigma(150, 50));
    }

    #[test]
    fn test_scripted_red_win_by_decision() {
        let mut sampler = ScriptedSampler::new(vec![110.0, 100.0]);
        let outcome = resolve(&boxer(101, 100), &boxer(201, 100), &mut sampler);

        assert_eq!(outcome.winner, Corner::Red);
        assert_eq!(outcome.signum(), 1);
        assert!(!outcome.knockout);
        assert_eq!(sampler.draws(), 2);
    }

    #[test]
    fn test_scripted_blue_win_by_knockout() {
        let mut sampler = ScriptedSampler::new(vec![60.0, 95.0]);
        let outcome = resolve(&boxer(101, 100), &boxer(201, 100), &mut sampler);

        assert_eq!(outcome.winner, Corner::Blue);
        assert_eq!(outcome.signum(), -1);
        assert!(outcome.knockout);
        assert_eq!(outcome.margin(), 35.0);
    }

    #[test]
    fn test_knockout_margin_is_strict() {
        let mut sampler = ScriptedSampler::new(vec![130.0, 100.0]);
        let outcome = resolve(&boxer(101, 100), &boxer(201, 100), &mut sampler);
        assert_eq!(outcome.winner, Corner::Red);
        assert!(!outcome.knockout, "a margin of exactly 30 is a decision");
    }

    #[test]
    #[should_panic(expected = "at least one performance")]
    fn test_empty_script_rejected() {
        ScriptedSampler::new(Vec::new());
    }

    #[test]
    fn test_tie_goes_to_blue() {
        let mut sampler = ScriptedSampler::new(vec![100.0, 100.0]);
        let outcome = resolve(&boxer(101, 100), &boxer(201, 100), &mut sampler);
        assert_eq!(outcome.winner, Corner::Blue);
    }

    #[test]
    fn test_knockout_implies_margin_over_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = boxer(101, 120);
        let b = boxer(201, 90);

        for _ in 0..2000 {
            let outcome = resolve(&a, &b, &mut rng);
            assert!(outcome.margin() >= 0.0);
            assert_eq!(outcome.knockout, outcome.margin() > KNOCKOUT_MARGIN);
        }
    }

    #[test]
    fn test_strong_favourite_wins_most_bouts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let favourite = boxer(101, 150);
        let underdog = boxer(201, 50);

        let trials = 5000;
        let favourite_wins = (0..trials)
            .filter(|_| resolve(&favourite, &underdog, &mut rng).winner == Corner::Red)
            .count();

        // P(win) = Phi(100 / (sigma * sqrt(2))) with sigma = 33.3, about 0.98
        let rate = favourite_wins as f64 / trials as f64;
        assert!(rate > 0.95, "favourite won only {:.3} of bouts", rate);
    }

    #[test]
    fn test_even_matchup_is_roughly_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let a = boxer(101, 100);
        let b = boxer(201, 100);

        let trials = 4000;
        let red_wins = (0..trials)
            .filter(|_| resolve(&a, &b, &mut rng).winner == Corner::Red)
            .count();

        let rate = red_wins as f64 / trials as f64;
        assert!((0.45..0.55).contains(&rate), "red win rate {:.3}", rate);
    }

    #[test]
    fn test_bout_snapshots_are_detached() {
        let red = boxer(101, 100);
        let blue = boxer(201, 100);
        let mut sampler = ScriptedSampler::new(vec![90.0, 140.0]);

        let mut bout = Bout::contest(&red, &blue, &mut sampler);
        bout.winner.record_win(bout.knockout);

        assert_eq!(bout.winner.id, BoxerId(201));
        assert_eq!(bout.loser.id, BoxerId(101));
        assert!(bout.knockout);
        assert_eq!(blue.record.wins, 0);
    }
}
