//! Tournament seeding
//!
//! Level 3 - Steps
//!
//! Entrants are ordered by wins ascending. Between two entrants with equal
//! wins, the one whose gym trails the other's gym on the advantage ledger
//! goes first. Head-to-head results can be cyclic (A over B over C over A),
//! so this is not a total order; it is applied with a stable insertion pass
//! that only moves an entrant ahead of a strictly greater predecessor. The
//! result is deterministic and keeps gym order for ties.

use std::cmp::Ordering;

use ringside_core::Boxer;

use crate::ledger::AdvantageLedger;

/// A tournament participant: a snapshot of a boxer and the index of their gym
#[derive(Clone, Debug, PartialEq)]
pub struct Entrant {
    pub gym_index: usize,
    pub boxer: Boxer,
}

/// Compare two entrants for seeding
pub fn seeding_order(a: &Entrant, b: &Entrant, ledger: &AdvantageLedger) -> Ordering {
    a.boxer
        .record
        .wins
        .cmp(&b.boxer.record.wins)
        .then_with(|| ledger.get(a.boxer.weight_class, a.gym_index, b.gym_index).cmp(&0))
}

/// Put entrants into seed order (index 0 is the first seed slot)
pub fn seed_entrants(entrants: &mut [Entrant], ledger: &AdvantageLedger) {
    for i in 1..entrants.len() {
        let mut j = i;
        while j > 0 && seeding_order(&entrants[j], &entrants[j - 1], ledger) == Ordering::Less {
            entrants.swap(j, j - 1);
            j -= 1;
        }
    }
}
