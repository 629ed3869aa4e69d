//! Ringside Core - Boxers, gyms and bout resolution
//!
//! This crate provides the building blocks of the league:
//! - Weight classes (closed set of 16 divisions)
//! - Boxers and their win/loss/knockout records
//! - Gyms owning one boxer per weight class
//! - Probabilistic bout resolution with injectable performance sampling
//! - Random roster generation

pub mod bout;
pub mod boxer;
pub mod error;
pub mod gym;
pub mod roster;
pub mod weight_class;

// Re-exports for convenient access
pub use bout::{resolve, sigma, Bout, BoutOutcome, Corner, PerformanceSampler, ScriptedSampler, KNOCKOUT_MARGIN, SIGMA_FLOOR};
pub use boxer::{Boxer, BoxerId, GymId, Record};
pub use error::CoreError;
pub use gym::Gym;
pub use roster::{generate_roster, RosterConfig};
pub use weight_class::{WeightClass, WEIGHT_CLASS_COUNT};
