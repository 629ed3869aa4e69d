//! Error types for the core domain

use crate::boxer::GymId;
use crate::weight_class::WeightClass;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid weight class: {0} (expected 1..=16)")]
    InvalidWeightClass(u8),

    #[error("Gym {gym} fields more than one boxer in weight class {weight_class}")]
    DuplicateWeightClass { gym: GymId, weight_class: WeightClass },

    #[error("Roster size {0} exceeds the 16 available weight classes")]
    RosterTooLarge(usize),

    #[error("Invalid ability distribution: {0}")]
    InvalidAbilityDistribution(String),
}
