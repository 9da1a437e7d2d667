//! Error types for the game simulation.
//!
//! Every failure an action can produce is a recoverable [`GameError`]. Action
//! handlers validate before they mutate, so an `Err` always means the state
//! the caller holds is still the state it had before the call.

use thiserror::Error;

use crate::blueprint::ShipType;
use crate::data::PartId;
use crate::economy::{InventoryItem, ResourceType};
use crate::map::HexId;
use crate::tech::TechId;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all game simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Insufficient resources.
    #[error("Insufficient {resource}: need {required}, have {available}")]
    InsufficientFunds {
        /// Resource type.
        resource: ResourceType,
        /// Amount required.
        required: u32,
        /// Amount available.
        available: u32,
    },

    /// No influence discs left to spend.
    #[error("Insufficient influence discs")]
    InsufficientInfluence,

    /// An inventory pool (colony ships, population, starbases) is empty.
    #[error("No {item} available")]
    InsufficientInventory {
        /// The exhausted inventory pool.
        item: InventoryItem,
    },

    /// The action needs a selection (a controlled sector, ships) that was not given.
    #[error("Nothing selected: {0}")]
    NoSelection(String),

    /// The selected target is not valid for this action.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Tech prerequisite unmet or already unlocked.
    #[error("Tech not available for research: {0}")]
    NotAvailable(TechId),

    /// The part needs a tech the player has not unlocked.
    #[error("Part '{part}' requires tech '{tech}'")]
    PartLocked {
        /// Part that was requested.
        part: PartId,
        /// Tech that gates it.
        tech: TechId,
    },

    /// Blueprint slot index out of range.
    #[error("{ship_type} has {slots} slots, slot {slot} does not exist")]
    InvalidSlot {
        /// Blueprint being edited.
        ship_type: ShipType,
        /// Requested slot index.
        slot: usize,
        /// Number of slots on the blueprint.
        slots: usize,
    },

    /// A hex or inventory is already at capacity.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Hex id not present on the map.
    #[error("Unknown hex: {0}")]
    UnknownHex(HexId),

    /// Tech id not present in the catalog.
    #[error("Unknown tech: {0}")]
    UnknownTech(TechId),

    /// Part id not present in the catalog.
    #[error("Unknown part: {0}")]
    UnknownPart(PartId),

    /// Player count outside the supported 1-4 range.
    #[error("Unsupported player count {0} (expected 1-4)")]
    InvalidPlayerCount(usize),

    /// Data file parsing error.
    #[error("Failed to parse data '{source_name}': {message}")]
    DataParseError {
        /// Name of the data source that failed to parse.
        source_name: String,
        /// Error message.
        message: String,
    },

    /// Invalid game state.
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl GameError {
    /// Shorthand for a resource shortfall.
    #[must_use]
    pub const fn funds(resource: ResourceType, required: u32, available: u32) -> Self {
        Self::InsufficientFunds {
            resource,
            required,
            available,
        }
    }

    /// Whether this error comes from an id outside the static catalogs or map.
    ///
    /// These are caller bugs rather than game-rule refusals.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownHex(_)
                | Self::UnknownTech(_)
                | Self::UnknownPart(_)
                | Self::InvalidPlayerCount(_)
        )
    }
}
