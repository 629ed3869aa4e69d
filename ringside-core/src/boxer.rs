//! Boxer - identity, latent ability and fight record

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::weight_class::WeightClass;

/// Gym identifier (100, 200, ..., 800)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GymId(pub u32);

impl GymId {
    /// Identifier of the gym at `index` in league order
    pub fn from_index(index: usize) -> Self {
        GymId((index as u32 + 1) * 100)
    }
}

impl fmt::Display for GymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boxer identifier, unique across the league
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxerId(pub u32);

impl BoxerId {
    /// Identifier for the boxer in roster `slot` of `gym`
    pub fn new(gym: GymId, slot: usize) -> Self {
        BoxerId(gym.0 + slot as u32 + 1)
    }
}

impl fmt::Display for BoxerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Win/loss/knockout tally
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub knockouts: u32,
}

impl Record {
    pub fn bouts(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boxer {
    pub id: BoxerId,
    /// Latent skill, only read by bout resolution
    pub ability: u32,
    pub weight_class: WeightClass,
    pub weight_lbs: u32,
    pub record: Record,
}

impl Boxer {
    /// Create a boxer with a clean record
    pub fn new(id: BoxerId, ability: u32, weight_class: WeightClass, weight_lbs: u32) -> Self {
        Self {
            id,
            ability,
            weight_class,
            weight_lbs,
            record: Record::default(),
        }
    }

    pub fn record_win(&mut self, knockout: bool) {
        self.record.wins += 1;
        if knockout {
            self.record.knockouts += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.record.losses += 1;
    }
}
