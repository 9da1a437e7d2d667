//! The owning game store.
//!
//! [`GameStore`] holds the catalog, the current snapshot, the dice and the
//! replay. Actions are submitted one at a time; a successful action swaps
//! in the new snapshot, a failed one leaves everything as it was.

use tracing::debug;

use crate::action::{apply_action, Action};
use crate::data::Catalog;
use crate::dice::SeededDice;
use crate::error::Result;
use crate::event::GameEvent;
use crate::fleet::{plan_move, MovePlan, ShipCounts};
use crate::map::HexId;
use crate::replay::Replay;
use crate::state::GameState;

/// Single authoritative game session.
#[derive(Debug, Clone)]
pub struct GameStore {
    catalog: Catalog,
    state: GameState,
    dice: SeededDice,
    replay: Replay,
}

impl GameStore {
    /// Start a session.
    ///
    /// # Errors
    /// Returns [`crate::error::GameError::InvalidPlayerCount`] unless `1 <= player_count <= 4`.
    pub fn new(catalog: Catalog, player_count: usize, seed: u64) -> Result<Self> {
        let state = GameState::new_game(&catalog, player_count)?;
        Ok(Self {
            catalog,
            state,
            dice: SeededDice::new(seed),
            replay: Replay::new(seed, player_count),
        })
    }

    /// Current snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Static data for this session.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Everything accepted so far.
    #[must_use]
    pub const fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Apply `action` for the active player.
    ///
    /// On success the snapshot is replaced and the action recorded.
    ///
    /// # Errors
    /// Returns whatever the action's rule rejects; the session is unchanged.
    pub fn submit(&mut self, action: Action) -> Result<Vec<GameEvent>> {
        let mut dice = self.dice.clone();
        let (next, events) = apply_action(&self.state, &self.catalog, &mut dice, &action)?;
        self.state = next;
        self.dice = dice;
        if !action.is_query() {
            debug!(action = action.name(), round = self.state.round, "Recorded");
            self.replay.record(action);
        }
        Ok(events)
    }

    /// Movement range and destinations for the active player's ships at `source`.
    ///
    /// # Errors
    /// See [`plan_move`].
    pub fn plan_move(&self, ships: &ShipCounts, source: &HexId) -> Result<MovePlan> {
        plan_move(
            &self.state,
            &self.catalog,
            self.state.active_id(),
            source,
            ships,
        )
    }
}
