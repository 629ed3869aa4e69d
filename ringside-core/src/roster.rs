//! Roster generation - random boxers for a gym
//!
//! Each slot draws a weight uniformly until it lands in a class the gym
//! does not hold yet. Abilities are normally distributed and clamped at zero.

use std::collections::HashSet;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::boxer::{Boxer, BoxerId, GymId};
use crate::error::CoreError;
use crate::weight_class::{WeightClass, MAX_WEIGHT_LBS, MIN_WEIGHT_LBS, WEIGHT_CLASS_COUNT};

/// Roster generation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct RosterConfig {
    /// Boxers per gym; fewer than 16 leaves weight classes empty
    pub size: usize,
    /// Mean ability
    pub ability_mean: f64,
    /// Ability standard deviation
    pub ability_std_dev: f64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            size: WEIGHT_CLASS_COUNT,
            ability_mean: 100.0,
            ability_std_dev: 15.0,
        }
    }
}

impl RosterConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

/// Generate a roster for `gym`
pub fn generate_roster<R: Rng + ?Sized>(
    gym: GymId,
    config: &RosterConfig,
    rng: &mut R,
) -> Result<Vec<Boxer>, CoreError> {
    if config.size > WEIGHT_CLASS_COUNT {
        return Err(CoreError::RosterTooLarge(config.size));
    }
    let ability = Normal::new(config.ability_mean, config.ability_std_dev)
        .map_err(|e| CoreError::InvalidAbilityDistribution(e.to_string()))?;

    let mut taken = HashSet::with_capacity(config.size);
    let mut roster = Vec::with_capacity(config.size);

    for slot in 0..config.size {
        let (weight_class, weight_lbs) = draw_open_class(&taken, rng);
        taken.insert(weight_class);

        let score = ability.sample(rng).round().max(0.0) as u32;
        roster.push(Boxer::new(BoxerId::new(gym, slot), score, weight_class, weight_lbs));
    }

    tracing::debug!("Generated {} boxers for gym {}", roster.len(), gym);
    Ok(roster)
}

/// Draw weights until one falls in a class not in `taken`
fn draw_open_class<R: Rng + ?Sized>(taken: &HashSet<WeightClass>, rng: &mut R) -> (WeightClass, u32) {
    loop {
        let weight = rng.gen_range(MIN_WEIGHT_LBS..=MAX_WEIGHT_LBS);
        if let Some(class) = WeightClass::for_weight(weight) {
            if !taken.contains(&class) {
                return (class, weight);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_full_roster_covers_every_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let roster = generate_roster(GymId(300), &RosterConfig::default(), &mut rng).unwrap();

        assert_eq!(roster.len(), 16);
        let classes: HashSet<WeightClass> = roster.iter().map(|b| b.weight_class).collect();
        assert_eq!(classes.len(), 16);
    }

    #[test]
    fn test_ids_weights_and_abilities() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let roster = generate_roster(GymId(500), &RosterConfig::default(), &mut rng).unwrap();

        for (slot, boxer) in roster.iter().enumerate() {
            assert_eq!(boxer.id, BoxerId(500 + slot as u32 + 1));
            assert_eq!(WeightClass::for_weight(boxer.weight_lbs), Some(boxer.weight_class));
            assert_eq!(boxer.record.bouts(), 0);
        }

        let mean = roster.iter().map(|b| b.ability as f64).sum::<f64>() / roster.len() as f64;
        assert!((60.0..140.0).contains(&mean), "mean ability {}", mean);
    }

    #[test]
    fn test_partial_roster_leaves_classes_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = RosterConfig::default().with_size(5);
        let roster = generate_roster(GymId(100), &config, &mut rng).unwrap();

        assert_eq!(roster.len(), 5);
        let classes: HashSet<WeightClass> = roster.iter().map(|b| b.weight_class).collect();
        assert_eq!(classes.len(), 5);
    }

    #[test]
    fn test_ability_never_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let config = RosterConfig {
            ability_mean: 0.0,
            ability_std_dev: 50.0,
            ..RosterConfig::default()
        };
        let roster = generate_roster(GymId(100), &config, &mut rng).unwrap();
        assert!(roster.iter().any(|b| b.ability == 0));
    }

    #[test]
    fn test_rejects_bad_configs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let too_big = RosterConfig::default().with_size(17);
        assert_eq!(
            generate_roster(GymId(100), &too_big, &mut rng),
            Err(CoreError::RosterTooLarge(17))
        );

        let bad_spread = RosterConfig {
            ability_std_dev: f64::NAN,
            ..RosterConfig::default()
        };
        assert!(matches!(
            generate_roster(GymId(100), &bad_spread, &mut rng),
            Err(CoreError::InvalidAbilityDistribution(_))
        ));
    }
}
