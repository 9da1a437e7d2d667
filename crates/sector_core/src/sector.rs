//! Sector actions: explore, claim, recall, build a starbase, colonize.
//!
//! Each function checks every precondition before touching the state, so an
//! `Err` leaves the state as it was.

use tracing::debug;

use crate::data::Catalog;
use crate::economy::{InventoryItem, ResourceType};
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::fleet::FleetOwner;
use crate::map::{HexId, Structure};
use crate::state::{GameState, PlayerId};

/// Launch scanners from a controlled sector, revealing its unknown neighbours.
///
/// The Money is spent even when there is nothing left to reveal.
///
/// # Errors
/// - [`GameError::NoSelection`] if `player` does not control `hex`
/// - [`GameError::InsufficientFunds`] if Money is short
pub fn explore(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
) -> Result<Vec<GameEvent>> {
    let origin = state.require_hex(hex)?;
    if !origin.is_owned_by(player) {
        return Err(GameError::NoSelection(
            "Select a controlled sector to launch scanner drones".to_string(),
        ));
    }
    let coord = origin.coord;
    let cost = catalog.rules.explore_cost;
    state
        .require_player_mut(player)?
        .resources
        .try_debit(ResourceType::Money, cost)?;

    let mut revealed = Vec::new();
    for target in state
        .map
        .iter_mut()
        .filter(|h| !h.revealed && h.coord.is_neighbor(coord))
    {
        target.revealed = true;
        revealed.push(target.id.clone());
    }
    debug!(player = player.0, %hex, cost, revealed = revealed.len(), "Explored");

    if revealed.is_empty() {
        return Ok(vec![GameEvent::NothingToReveal { from: hex.clone() }]);
    }
    Ok(vec![GameEvent::SectorsRevealed {
        from: hex.clone(),
        revealed,
    }])
}

/// Place an influence disc on an unowned, peaceful sector.
///
/// # Errors
/// - [`GameError::InvalidTarget`] if the sector is owned or holds hostiles
/// - [`GameError::InsufficientInfluence`] if no discs are left
pub fn claim_sector(state: &mut GameState, player: PlayerId, hex: &HexId) -> Result<Vec<GameEvent>> {
    let target = state.require_hex(hex)?;
    if target.owner.is_some() {
        return Err(GameError::InvalidTarget(format!("{} is already controlled", target.name)));
    }
    if target.has_hostiles() || state.fleet_at(FleetOwner::Hostile, hex).is_some() {
        return Err(GameError::InvalidTarget(format!("{} is held by hostiles", target.name)));
    }

    let actor = state.require_player_mut(player)?;
    actor.influence.spend()?;
    actor.victory_points += 1;
    state.require_hex_mut(hex)?.owner = Some(player);
    debug!(player = player.0, %hex, "Sector claimed");
    Ok(vec![GameEvent::SectorClaimed {
        player,
        hex: hex.clone(),
    }])
}

/// Withdraw from a controlled sector.
///
/// Population goes back to inventory, the disc comes back (up to the
/// maximum) and a standing starbase is returned up to the starbase cap.
///
/// # Errors
/// - [`GameError::InvalidTarget`] if `player` does not control `hex`
pub fn recall_influence(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
) -> Result<Vec<GameEvent>> {
    let target = state.require_hex(hex)?;
    if !target.is_owned_by(player) {
        return Err(GameError::InvalidTarget(format!("You do not control {}", target.name)));
    }

    let target = state.require_hex_mut(hex)?;
    let population = target.population;
    let had_starbase = target.structure == Some(Structure::Starbase);
    target.owner = None;
    target.structure = None;
    target.population = 0;

    let cap = catalog.rules.max_starbases;
    let actor = state.require_player_mut(player)?;
    actor.inventory.add(InventoryItem::Population, population);
    actor.influence.restore();
    if had_starbase {
        actor.inventory.starbases = (actor.inventory.starbases + 1).min(cap);
    }
    actor.victory_points = actor.victory_points.saturating_sub(1);
    debug!(player = player.0, %hex, population, had_starbase, "Influence recalled");

    Ok(vec![GameEvent::InfluenceRecalled {
        player,
        hex: hex.clone(),
        population_returned: population,
        starbase_returned: had_starbase,
    }])
}

/// Build a starbase on a controlled sector.
///
/// # Errors
/// - [`GameError::InvalidTarget`] if `player` does not control `hex`
/// - [`GameError::CapacityExceeded`] if a structure already stands there
/// - [`GameError::InsufficientInventory`] if no starbases are in stock
/// - [`GameError::InsufficientFunds`] if Materials are short
pub fn build_starbase(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
) -> Result<Vec<GameEvent>> {
    let target = state.require_hex(hex)?;
    if !target.is_owned_by(player) {
        return Err(GameError::InvalidTarget(format!("You do not control {}", target.name)));
    }
    if target.structure.is_some() {
        return Err(GameError::CapacityExceeded(format!(
            "{} already has a structure",
            target.name
        )));
    }

    let cost = catalog.rules.starbase_cost;
    let actor = state.require_player_mut(player)?;
    actor.inventory.ensure(InventoryItem::Starbases)?;
    actor.resources.try_debit(ResourceType::Materials, cost)?;
    actor.inventory.take(InventoryItem::Starbases)?;
    state.require_hex_mut(hex)?.structure = Some(Structure::Starbase);
    debug!(player = player.0, %hex, cost, "Starbase constructed");

    Ok(vec![GameEvent::StarbaseBuilt { hex: hex.clone() }])
}

/// Settle one population cube on a controlled sector using a colony ship.
///
/// # Errors
/// - [`GameError::InvalidTarget`] if `player` does not control `hex`
/// - [`GameError::InsufficientInventory`] if no colony ship or population is in stock
/// - [`GameError::CapacityExceeded`] if every resource slot is already populated
pub fn colonize(state: &mut GameState, player: PlayerId, hex: &HexId) -> Result<Vec<GameEvent>> {
    let target = state.require_hex(hex)?;
    if !target.is_owned_by(player) {
        return Err(GameError::InvalidTarget(format!("You do not control {}", target.name)));
    }
    let full = !target.has_free_slot();
    let name = target.name.clone();

    let actor = state.require_player_mut(player)?;
    actor.inventory.ensure(InventoryItem::ColonyShips)?;
    actor.inventory.ensure(InventoryItem::Population)?;
    if full {
        return Err(GameError::CapacityExceeded(format!("{name} is at maximum population")));
    }
    actor.inventory.take(InventoryItem::ColonyShips)?;
    actor.inventory.take(InventoryItem::Population)?;

    let target = state.require_hex_mut(hex)?;
    target.population += 1;
    let population = target.population;
    debug!(player = player.0, %hex, population, "Colonized");

    Ok(vec![GameEvent::Colonized {
        hex: hex.clone(),
        population,
    }])
}
