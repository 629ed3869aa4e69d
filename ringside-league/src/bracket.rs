//! Fixed 14-match championship bracket
//!
//! Level 3 - Steps
//!
//! The bracket shape is a const table of slot pairs. Each slot is either a
//! seed or the winner/loser of an earlier match, and matches are fought in
//! table order.
//!
//! In the standard bracket the reported final (M13) is `W(M5) vs W(M6)`,
//! which does not descend from the upper-bracket path through M4, and M11
//! and M12 feed nothing. The shape is kept as is for compatibility and is
//! likely a defect: the champion is not necessarily the strongest finisher.
//! `BracketMode::UpperFinal` is the alternate whose final is
//! `W(M4) vs W(M5)`; every other match is the same.

use ringside_core::{Bout, Boxer, PerformanceSampler};

/// Entrants per bracket
pub const BRACKET_SIZE: usize = 8;
/// Matches per bracket
pub const BRACKET_MATCHES: usize = 14;

/// Where a fighter for a bracket match comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Seed position after sorting
    Seed(usize),
    /// Winner of an earlier match
    Winner(usize),
    /// Loser of an earlier match
    Loser(usize),
}

/// Bracket shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BracketMode {
    /// Compatible bracket, final is W(M5) vs W(M6)
    #[default]
    Standard,
    /// Final between the upper-bracket semi-final winners, W(M4) vs W(M5)
    UpperFinal,
}

use Slot::{Loser as L, Seed as P, Winner as W};

const STANDARD: [(Slot, Slot); BRACKET_MATCHES] = [
    (P(0), P(7)),
    (P(4), P(3)),
    (P(2), P(5)),
    (P(1), P(6)),
    (W(0), W(1)),
    (W(2), W(3)),
    (L(0), L(1)),
    (L(2), L(3)),
    (L(4), W(7)),
    (L(5), W(6)),
    (L(6), L(7)),
    (L(8), L(9)),
    (W(9), W(10)),
    (W(5), W(6)),
];

const UPPER_FINAL: [(Slot, Slot); BRACKET_MATCHES] = {
    let mut table = STANDARD;
    table[BRACKET_MATCHES - 1] = (W(4), W(5));
    table
};

/// Match table for a bracket mode
pub fn topology(mode: BracketMode) -> &'static [(Slot, Slot); BRACKET_MATCHES] {
    match mode {
        BracketMode::Standard => &STANDARD,
        BracketMode::UpperFinal => &UPPER_FINAL,
    }
}

/// Fight every bracket match in order; the last bout is the final
///
/// Bouts hold snapshots, so nothing outside the bracket is updated.
pub fn run_bracket<S: PerformanceSampler + ?Sized>(
    seeds: &[Boxer; BRACKET_SIZE],
    mode: BracketMode,
    sampler: &mut S,
) -> Vec<Bout> {
    let mut bouts: Vec<Bout> = Vec::with_capacity(BRACKET_MATCHES);

    for (number, &(red_slot, blue_slot)) in topology(mode).iter().enumerate() {
        let red = fighter(red_slot, seeds, &bouts);
        let blue = fighter(blue_slot, seeds, &bouts);
        let bout = Bout::contest(red, blue, sampler);

        tracing::debug!(
            "M{}: {} vs {} -> {}{}",
            number,
            bout.red.id,
            bout.blue.id,
            bout.winner.id,
            if bout.knockout { " (KO)" } else { "" }
        );
        bouts.push(bout);
    }

    bouts
}

fn fighter<'a>(slot: Slot, seeds: &'a [Boxer; BRACKET_SIZE], bouts: &'a [Bout]) -> &'a Boxer {
    match slot {
        Slot::Seed(i) => &seeds[i],
        Slot::Winner(m) => &bouts[m].winner,
        Slot::Loser(m) => &bouts[m].loser,
    }
}
