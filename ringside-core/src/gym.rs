//! Gym - a fixed roster with at most one boxer per weight class

use serde::{Deserialize, Serialize};

use crate::boxer::{Boxer, GymId};
use crate::error::CoreError;
use crate::weight_class::WeightClass;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GymParts")]
pub struct Gym {
    id: GymId,
    roster: Vec<Boxer>,
}

/// Unchecked wire form; deserialized gyms go through `Gym::new`
#[derive(Deserialize)]
struct GymParts {
    id: GymId,
    roster: Vec<Boxer>,
}

impl TryFrom<GymParts> for Gym {
    type Error = CoreError;

    fn try_from(parts: GymParts) -> Result<Self, Self::Error> {
        Gym::new(parts.id, parts.roster)
    }
}

impl Gym {
    /// Create a gym, rejecting rosters that double up a weight class
    pub fn new(id: GymId, roster: Vec<Boxer>) -> Result<Self, CoreError> {
        for (i, boxer) in roster.iter().enumerate() {
            if roster[..i].iter().any(|b| b.weight_class == boxer.weight_class) {
                return Err(CoreError::DuplicateWeightClass {
                    gym: id,
                    weight_class: boxer.weight_class,
                });
            }
        }
        Ok(Self { id, roster })
    }

    pub fn id(&self) -> GymId {
        self.id
    }

    pub fn roster(&self) -> &[Boxer] {
        &self.roster
    }

    /// Roster slot of the boxer in `weight_class`, if the gym fields one
    pub fn slot_for(&self, weight_class: WeightClass) -> Option<usize> {
        self.roster.iter().position(|b| b.weight_class == weight_class)
    }

    pub fn boxer(&self, weight_class: WeightClass) -> Option<&Boxer> {
        self.slot_for(weight_class).map(|slot| &self.roster[slot])
    }

    pub fn boxer_mut(&mut self, weight_class: WeightClass) -> Option<&mut Boxer> {
        self.roster.iter_mut().find(|b| b.weight_class == weight_class)
    }

    pub fn wins(&self) -> u32 {
        self.roster.iter().map(|b| b.record.wins).sum()
    }

    pub fn losses(&self) -> u32 {
        self.roster.iter().map(|b| b.record.losses).sum()
    }

    pub fn knockouts(&self) -> u32 {
        self.roster.iter().map(|b| b.record.knockouts).sum()
    }

    /// Win ratio across the roster, `None` until a bout has been recorded
    pub fn total_score(&self) -> Option<f64> {
        let wins = self.wins();
        let bouts = wins + self.losses();
        if bouts == 0 {
            None
        } else {
            Some(wins as f64 / bouts as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxer::BoxerId;

    fn boxer(gym: GymId, slot: usize, class: u8) -> Boxer {
        let weight_class = WeightClass::new(class).unwrap();
        Boxer::new(BoxerId::new(gym, slot), 100, weight_class, weight_class.limit_lbs())
    }

    fn small_gym() -> Gym {
        let id = GymId(100);
        Gym::new(id, vec![boxer(id, 0, 3), boxer(id, 1, 9), boxer(id, 2, 16)]).unwrap()
    }

    #[test]
    fn test_lookup_by_weight_class() {
        let gym = small_gym();
        assert_eq!(gym.slot_for(WeightClass::new(9).unwrap()), Some(1));
        assert_eq!(gym.boxer(WeightClass::HEAVYWEIGHT).map(|b| b.id), Some(BoxerId(103)));
        assert_eq!(gym.slot_for(WeightClass::new(4).unwrap()), None);
        assert!(gym.boxer(WeightClass::LIGHTEST).is_none());
    }

    #[test]
    fn test_duplicate_weight_class_rejected() {
        let id = GymId(200);
        let err = Gym::new(id, vec![boxer(id, 0, 5), boxer(id, 1, 5)]).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateWeightClass {
                gym: id,
                weight_class: WeightClass::new(5).unwrap(),
            }
        );
    }

    #[test]
    fn test_deserialize_keeps_valid_roster() {
        let json = serde_json::to_string(&small_gym()).unwrap();
        let gym: Gym = serde_json::from_str(&json).unwrap();
        assert_eq!(gym.id(), GymId(100));
        assert_eq!(gym.roster(), small_gym().roster());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_weight_class() {
        let mut value = serde_json::to_value(small_gym()).unwrap();
        let roster = value["roster"].as_array_mut().unwrap();
        let mut twin = roster[0].clone();
        twin["id"] = serde_json::json!(104);
        roster.push(twin);

        let err = serde_json::from_value::<Gym>(value).unwrap_err();
        assert!(err.to_string().contains("weight class"));
    }

    #[test]
    fn test_total_score_undefined_without_bouts() {
        let gym = small_gym();
        assert_eq!(gym.total_score(), None);
    }

    #[test]
    fn test_total_score_is_exact_ratio() {
        let mut gym = small_gym();
        let light = WeightClass::new(3).unwrap();
        let heavy = WeightClass::HEAVYWEIGHT;

        gym.boxer_mut(light).unwrap().record_win(true);
        gym.boxer_mut(light).unwrap().record_win(false);
        gym.boxer_mut(heavy).unwrap().record_win(false);
        gym.boxer_mut(heavy).unwrap().record_loss();

        assert_eq!(gym.wins(), 3);
        assert_eq!(gym.losses(), 1);
        assert_eq!(gym.knockouts(), 1);
        assert_eq!(gym.total_score(), Some(0.75));
    }
}
