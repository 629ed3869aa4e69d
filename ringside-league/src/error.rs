//! Error types for league play

use ringside_core::{CoreError, WeightClass};

#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("A league needs exactly {expected} gyms, got {found}")]
    GymCount { expected: usize, found: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TournamentError {
    #[error("Insufficient participants in weight class {weight_class}: {found} of {required}")]
    InsufficientParticipants {
        weight_class: WeightClass,
        found: usize,
        required: usize,
    },
}
