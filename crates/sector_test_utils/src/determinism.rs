//! Reproducibility checks.
//!
//! A game is a pure function of its catalog, seat count, dice seed and
//! action list. These helpers play the same inputs several times and compare
//! the resulting hashes.
//!
//! Things that would break reproducibility:
//!
//! - **Ambient randomness**: every roll must go through
//!   [`sector_core::dice::Dice`], never a thread-local RNG.
//! - **Unordered collections**: the state keeps ordered `Vec`s and hashes
//!   fleets in id order.
//! - **Wall-clock ids**: fleet ids come from a counter in the state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use sector_core::action::{apply_action, Action};
use sector_core::data::Catalog;
use sector_core::dice::SeededDice;
use sector_core::state::GameState;

/// Hashes collected from repeated runs of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// True when every run ended on the same hash.
    pub is_deterministic: bool,
    /// Final hash of each run, in run order.
    pub hashes: Vec<u64>,
    /// Steps (or actions) played per run.
    pub steps: u64,
}

impl DeterminismResult {
    fn from_hashes(hashes: Vec<u64>, steps: u64) -> Self {
        Self {
            is_deterministic: hashes.windows(2).all(|pair| pair[0] == pair[1]),
            hashes,
            steps,
        }
    }

    /// Distinct final hashes, sorted. One entry means the runs agreed.
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut distinct = self.hashes.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }

    /// Panic with the collected hashes unless every run agreed.
    ///
    /// # Panics
    ///
    /// Panics if the runs diverged.
    pub fn assert_deterministic(&self) {
        assert!(
            self.is_deterministic,
            "{} runs of {} steps diverged into {} distinct hashes: {:?}",
            self.hashes.len(),
            self.steps,
            self.unique_hashes().len(),
            self.hashes
        );
    }
}

/// Build a value with `setup`, advance it `steps` times with `step`, hash it
/// with `hash`; repeat `runs` times.
///
/// ```ignore
/// let result = verify_determinism(
///     4,
///     30,
///     || (battle(), SeededDice::new(9)),
///     |(b, dice)| *b = advance_one_exchange(b, dice).0,
///     |(b, _)| compute_hash(b),
/// );
/// result.assert_deterministic();
/// ```
pub fn verify_determinism<S, Setup, Step, HashFn>(
    runs: usize,
    steps: u64,
    setup: Setup,
    step: Step,
    hash: HashFn,
) -> DeterminismResult
where
    Setup: Fn() -> S,
    Step: Fn(&mut S),
    HashFn: Fn(&S) -> u64,
{
    let hashes = (0..runs)
        .map(|_| {
            let mut value = setup();
            (0..steps).for_each(|_| step(&mut value));
            hash(&value)
        })
        .collect();
    DeterminismResult::from_hashes(hashes, steps)
}

/// Play `actions` from a fresh game `runs` times and compare state hashes.
///
/// Rejected actions are skipped, the same way on every run. An invalid
/// `player_count` yields an empty, non-deterministic result.
pub fn verify_action_determinism(
    catalog: &Catalog,
    player_count: usize,
    seed: u64,
    actions: &[Action],
    runs: usize,
) -> DeterminismResult {
    let steps = actions.len() as u64;
    let mut hashes = Vec::with_capacity(runs);
    for _ in 0..runs {
        let Ok(mut state) = GameState::new_game(catalog, player_count) else {
            return DeterminismResult {
                is_deterministic: false,
                hashes: Vec::new(),
                steps,
            };
        };
        let mut dice = SeededDice::new(seed);
        for action in actions {
            if let Ok((next, _)) = apply_action(&state, catalog, &mut dice, action) {
                state = next;
            }
        }
        hashes.push(state.state_hash());
    }
    DeterminismResult::from_hashes(hashes, steps)
}

/// Hash any `Hash` value with the std hasher.
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut state = DefaultHasher::new();
    value.hash(&mut state);
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{hex, home_of, P1};
    use sector_core::fleet::ShipCounts;

    #[test]
    fn test_counter_runs_agree() {
        let result = verify_determinism(4, 25, || 1u64, |n| *n *= 3, compute_hash);
        assert!(result.is_deterministic);
        assert_eq!(result.unique_hashes().len(), 1);
        assert_eq!(result.hashes.len(), 4);
    }

    #[test]
    fn test_detects_divergence() {
        let counter = std::cell::Cell::new(0u64);
        let result = verify_determinism(
            2,
            1,
            || {
                counter.set(counter.get() + 1);
                counter.get()
            },
            |_| {},
            |n| *n,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.unique_hashes().len(), 2);
    }

    #[test]
    fn test_bad_seat_count() {
        let result = verify_action_determinism(&Catalog::standard(), 9, 1, &[], 3);
        assert!(!result.is_deterministic);
        assert!(result.hashes.is_empty());
    }

    #[test]
    fn test_action_sequence_is_deterministic() {
        let catalog = Catalog::standard();
        let actions = vec![
            Action::Explore { hex: home_of(P1) },
            Action::QueueBuild {
                ships: ShipCounts::new(2, 0, 0),
                colony_ships: 0,
                hex: home_of(P1),
            },
            Action::ExecuteMove {
                source: home_of(P1),
                dest: hex("001"),
                ships: ShipCounts::new(2, 0, 0),
            },
            Action::ResolveCombat { hex: hex("001") },
            Action::EndTurn,
            Action::EndTurn,
        ];
        let result = verify_action_determinism(&catalog, 2, 99, &actions, 4);
        result.assert_deterministic();
        assert_eq!(result.steps, 6);
    }
}
