//! In-memory replays.
//!
//! A game is fully determined by its catalog, player count, dice seed and
//! the accepted actions in order. Replaying them rebuilds the exact same
//! state, which [`Replay::verify`] checks by hash.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{apply_action, Action};
use crate::data::Catalog;
use crate::dice::SeededDice;
use crate::error::Result;
use crate::state::GameState;

/// The inputs needed to rebuild a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    /// Dice seed.
    pub seed: u64,
    /// Players seated at the start.
    pub player_count: usize,
    /// Accepted actions in order.
    pub actions: Vec<Action>,
}

impl Replay {
    /// An empty replay.
    #[must_use]
    pub const fn new(seed: u64, player_count: usize) -> Self {
        Self {
            seed,
            player_count,
            actions: Vec::new(),
        }
    }

    /// Record an accepted action.
    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Play every recorded action from a fresh game.
    ///
    /// # Errors
    /// Returns the first error an action produces; a faithful recording
    /// never fails.
    pub fn rebuild(&self, catalog: &Catalog) -> Result<GameState> {
        let mut dice = SeededDice::new(self.seed);
        let mut state = GameState::new_game(catalog, self.player_count)?;
        for action in &self.actions {
            let (next, _) = apply_action(&state, catalog, &mut dice, action)?;
            state = next;
        }
        debug!(actions = self.actions.len(), "Replay rebuilt");
        Ok(state)
    }

    /// Whether replaying yields a state with `expected_hash`.
    ///
    /// # Errors
    /// Returns the error [`Replay::rebuild`] hits.
    pub fn verify(&self, catalog: &Catalog, expected_hash: u64) -> Result<bool> {
        Ok(self.rebuild(catalog)?.state_hash() == expected_hash)
    }
}
