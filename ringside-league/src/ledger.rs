//! Advantage ledger - net head-to-head results between gyms, per weight class
//!
//! Level 4 - Utilities

use ringside_core::{WeightClass, WEIGHT_CLASS_COUNT};

/// Net bout differential for every ordered gym pair in every weight class
///
/// Every update writes both `(a, b)` and `(b, a)` so the table stays
/// antisymmetric. Entries accumulate for the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvantageLedger {
    gyms: usize,
    cells: Vec<i32>,
}

impl AdvantageLedger {
    pub fn new(gyms: usize) -> Self {
        Self {
            gyms,
            cells: vec![0; WEIGHT_CLASS_COUNT * gyms * gyms],
        }
    }

    /// # Panics
    ///
    /// If either gym index is not below `gyms`.
    fn offset(&self, weight_class: WeightClass, a: usize, b: usize) -> usize {
        assert!(
            a < self.gyms && b < self.gyms,
            "gym index out of range: ({}, {}) with {} gyms",
            a,
            b,
            self.gyms
        );
        (weight_class.index() * self.gyms + a) * self.gyms + b
    }

    /// Net result of gym `a` against gym `b` in `weight_class`
    pub fn get(&self, weight_class: WeightClass, a: usize, b: usize) -> i32 {
        self.cells[self.offset(weight_class, a, b)]
    }

    /// Record a win for `winner` over `loser`
    pub fn record(&mut self, weight_class: WeightClass, winner: usize, loser: usize) {
        let up = self.offset(weight_class, winner, loser);
        let down = self.offset(weight_class, loser, winner);
        self.cells[up] += 1;
        self.cells[down] -= 1;
    }

    pub fn gyms(&self) -> usize {
        self.gyms
    }

    pub fn is_antisymmetric(&self) -> bool {
        WeightClass::all().all(|w| {
            (0..self.gyms).all(|a| (0..self.gyms).all(|b| self.get(w, a, b) == -self.get(w, b, a)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(n: u8) -> WeightClass {
        WeightClass::new(n).unwrap()
    }

    #[test]
    fn test_new_ledger_is_zeroed() {
        let ledger = AdvantageLedger::new(8);
        assert!(WeightClass::all().all(|w| ledger.get(w, 0, 7) == 0));
        assert!(ledger.is_antisymmetric());
    }

    #[test]
    fn test_record_updates_both_directions() {
        let mut ledger = AdvantageLedger::new(8);
        ledger.record(class(4), 2, 5);
        ledger.record(class(4), 2, 5);
        ledger.record(class(4), 5, 2);

        assert_eq!(ledger.get(class(4), 2, 5), 1);
        assert_eq!(ledger.get(class(4), 5, 2), -1);
        assert!(ledger.is_antisymmetric());
    }

    #[test]
    fn test_weight_classes_are_independent() {
        let mut ledger = AdvantageLedger::new(8);
        ledger.record(class(1), 0, 1);

        assert_eq!(ledger.get(class(1), 0, 1), 1);
        assert_eq!(ledger.get(class(2), 0, 1), 0);
        assert_eq!(ledger.get(WeightClass::HEAVYWEIGHT, 0, 1), 0);
    }

    #[test]
    #[should_panic(expected = "gym index out of range")]
    fn test_get_rejects_gym_past_the_end() {
        let mut ledger = AdvantageLedger::new(8);
        ledger.record(class(1), 1, 0);
        ledger.get(class(1), 0, 8);
    }

    #[test]
    #[should_panic(expected = "gym index out of range")]
    fn test_record_rejects_gym_past_the_end() {
        let mut ledger = AdvantageLedger::new(8);
        ledger.record(class(16), 8, 0);
    }
}
