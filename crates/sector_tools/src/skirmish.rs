//! Seeded skirmishes.
//!
//! Sets up a one-player game, parks a stock fleet on a hostile sector and
//! resolves the fight through the normal action path, so the result is
//! exactly what a player would see with the same seed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sector_core::action::{apply_action, Action};
use sector_core::combat::{CombatLogEntry, CombatOutcome};
use sector_core::data::Catalog;
use sector_core::dice::SeededDice;
use sector_core::error::GameError;
use sector_core::event::GameEvent;
use sector_core::fleet::{add_ships, FleetOwner, ShipCounts};
use sector_core::map::HexId;
use sector_core::state::GameState;

use crate::{Result, ToolError};

/// The galactic core, guarded by the G.C.D.S.
const CORE_HEX: &str = "001";

/// An inner sector that gets an ancient guardian for the fight.
const GUARDED_HEX: &str = "i6";

/// What to fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkirmishConfig {
    /// Dice seed.
    pub seed: u64,
    /// Attacking fleet, on stock hulls.
    pub ships: ShipCounts,
    /// Fight the core guardian instead of an ordinary ancient.
    pub against_gcds: bool,
}

/// How a skirmish went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkirmishReport {
    /// Seed used.
    pub seed: u64,
    /// Sector fought over.
    pub hex: HexId,
    /// Result for the attacker.
    pub outcome: CombatOutcome,
    /// Reputation drawn on victory.
    pub reputation: Option<u32>,
    /// Full combat log.
    pub log: Vec<CombatLogEntry>,
}

impl SkirmishReport {
    /// Render as pretty RON.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Render`] if serialization fails.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ToolError::Render(e.to_string()))
    }
}

/// Run one skirmish.
///
/// # Errors
///
/// Returns an error if the fleet is empty or the game rejects the fight.
pub fn run_skirmish(catalog: &Catalog, config: &SkirmishConfig) -> Result<SkirmishReport> {
    if config.ships.is_empty() {
        return Err(GameError::NoSelection("Skirmish needs at least one ship".to_string()).into());
    }
    let mut state = GameState::new_game(catalog, 1)?;
    let hex = HexId::new(if config.against_gcds { CORE_HEX } else { GUARDED_HEX });
    if !config.against_gcds {
        state.require_hex_mut(&hex)?.has_enemy = true;
    }
    let attacker = state.active_id();
    add_ships(&mut state, FleetOwner::Player(attacker), &hex, &config.ships)?;
    debug!(seed = config.seed, %hex, ships = %config.ships, "Skirmish set up");

    let mut dice = SeededDice::new(config.seed);
    let (_, events) = apply_action(
        &state,
        catalog,
        &mut dice,
        &Action::ResolveCombat { hex: hex.clone() },
    )?;

    let mut log = Vec::new();
    let mut result = None;
    for event in events {
        match event {
            GameEvent::CombatLog(entry) => log.push(entry),
            GameEvent::CombatEnded {
                outcome, reputation, ..
            } => result = Some((outcome, reputation)),
            _ => {}
        }
    }
    let (outcome, reputation) = result.unwrap_or((CombatOutcome::Defeat, None));
    info!(seed = config.seed, %hex, ?outcome, entries = log.len(), "Skirmish finished");

    Ok(SkirmishReport {
        seed: config.seed,
        hex,
        outcome,
        reputation,
        log,
    })
}
