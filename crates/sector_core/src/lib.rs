//! # Sector Core
//!
//! Authoritative simulation core for a turn-based hex-sector strategy game.
//!
//! This crate contains **only** game rules:
//! - No rendering
//! - No IO (catalogs are parsed from text handed in by the caller)
//! - No ambient randomness (every roll goes through [`dice::Dice`])
//!
//! This separation enables:
//! - Headless tools and tests
//! - Seeded, reproducible battles
//! - Replays verified by state hash
//!
//! ## Crate Structure
//!
//! - [`hex`] - Axial coordinate math and reachable sets
//! - [`economy`] - Resource balances, influence and inventory
//! - [`sector`] - Explore, claim, recall, starbase and colonize actions
//! - [`tech`] - Per-player technology tree
//! - [`blueprint`] - Ship designs and stat computation
//! - [`fleet`] - Fleet movement and production
//! - [`combat`] - Step-driven combat resolution
//! - [`turn`] - Phases, rounds and income
//! - [`state`] - The game aggregate
//! - [`action`] - The closed action set and dispatcher
//! - [`store`] - The owning session store
//! - [`data`] - Static catalogs and tunable rules

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod action;
pub mod blueprint;
pub mod combat;
pub mod data;
pub mod dice;
pub mod economy;
pub mod error;
pub mod event;
pub mod fleet;
pub mod hex;
pub mod map;
pub mod replay;
pub mod sector;
pub mod state;
pub mod store;
pub mod tech;
pub mod turn;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::{apply_action, Action};
    pub use crate::blueprint::{Blueprints, ShipBlueprint, ShipStats, ShipType, Specials, UpgradeStat};
    pub use crate::combat::{
        advance_one_exchange, run_to_completion, Battle, CombatLogEntry, CombatOutcome, Combatant,
        LogSource, Side,
    };
    pub use crate::data::{Catalog, PartId, RuleSet};
    pub use crate::dice::{Dice, ScriptedDice, SeededDice};
    pub use crate::economy::{Influence, Inventory, InventoryItem, ResourceType, Resources};
    pub use crate::error::{GameError, Result};
    pub use crate::event::GameEvent;
    pub use crate::fleet::{Fleet, FleetId, FleetOwner, MovePlan, ShipCounts};
    pub use crate::hex::{distance, is_neighbor, reachable_set, HexCoord};
    pub use crate::map::{Hex, HexId, Structure, Terrain};
    pub use crate::replay::Replay;
    pub use crate::state::{GameState, Player, PlayerId};
    pub use crate::store::GameStore;
    pub use crate::tech::{TechCategory, TechId, TechTree};
    pub use crate::turn::GamePhase;
}
