//! Weight classes - the 16 divisions of the league

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of divisions
pub const WEIGHT_CLASS_COUNT: usize = 16;

/// Division boundaries in lbs. Class `j` covers `(LIMITS[j - 1], LIMITS[j]]`.
const LIMITS: [u32; WEIGHT_CLASS_COUNT + 1] = [
    105, 108, 112, 115, 118, 122, 126, 130, 135, 140, 147, 154, 160, 168, 175, 200, 201,
];

/// Lightest weight a boxer can have and still land in a class
pub const MIN_WEIGHT_LBS: u32 = LIMITS[0] + 1;
/// Heaviest weight a boxer can have
pub const MAX_WEIGHT_LBS: u32 = LIMITS[WEIGHT_CLASS_COUNT];

/// A weight class in `1..=16`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeightClass(u8);

impl WeightClass {
    pub const LIGHTEST: WeightClass = WeightClass(1);
    pub const HEAVYWEIGHT: WeightClass = WeightClass(WEIGHT_CLASS_COUNT as u8);

    pub fn new(class: u8) -> Result<Self, CoreError> {
        if (1..=WEIGHT_CLASS_COUNT as u8).contains(&class) {
            Ok(WeightClass(class))
        } else {
            Err(CoreError::InvalidWeightClass(class))
        }
    }

    /// All classes, lightest first
    pub fn all() -> impl Iterator<Item = WeightClass> {
        (1..=WEIGHT_CLASS_COUNT as u8).map(WeightClass)
    }

    /// Class containing the given weight, if any
    pub fn for_weight(lbs: u32) -> Option<WeightClass> {
        (1..=WEIGHT_CLASS_COUNT)
            .find(|&j| lbs > LIMITS[j - 1] && lbs <= LIMITS[j])
            .map(|j| WeightClass(j as u8))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index for table lookups
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Upper weight limit of the class in lbs
    pub fn limit_lbs(self) -> u32 {
        LIMITS[self.0 as usize]
    }

    pub fn is_heavyweight(self) -> bool {
        self == Self::HEAVYWEIGHT
    }
}

impl TryFrom<u8> for WeightClass {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WeightClass::new(value)
    }
}

impl From<WeightClass> for u8 {
    fn from(class: WeightClass) -> u8 {
        class.0
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs", self.limit_lbs())
    }
}
