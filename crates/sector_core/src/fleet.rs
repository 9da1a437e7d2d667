//! Fleets: creation, merging, splitting and movement.
//!
//! At most one fleet exists per (owner, hex). Ships arriving at a hex where
//! the owner already has a fleet merge into it; a fleet whose last ship leaves
//! is removed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blueprint::ShipType;
use crate::data::Catalog;
use crate::economy::{InventoryItem, ResourceType};
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::hex::reachable_set;
use crate::map::HexId;
use crate::state::{GameState, PlayerId};

/// Unique fleet identifier, allocated from a counter in [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FleetId(pub u32);

impl std::fmt::Display for FleetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f-{}", self.0)
    }
}

/// Who a fleet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FleetOwner {
    /// A player's fleet.
    Player(PlayerId),
    /// Static hostile ships placed by the scenario.
    Hostile,
}

/// Ship count per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipCounts {
    /// Interceptors.
    pub interceptor: u32,
    /// Cruisers.
    pub cruiser: u32,
    /// Dreadnoughts.
    pub dreadnought: u32,
}

impl ShipCounts {
    /// No ships.
    pub const NONE: Self = Self::new(0, 0, 0);

    /// Create a count set.
    #[must_use]
    pub const fn new(interceptor: u32, cruiser: u32, dreadnought: u32) -> Self {
        Self {
            interceptor,
            cruiser,
            dreadnought,
        }
    }

    /// Count of one type.
    #[must_use]
    pub const fn get(&self, ship_type: ShipType) -> u32 {
        match ship_type {
            ShipType::Interceptor => self.interceptor,
            ShipType::Cruiser => self.cruiser,
            ShipType::Dreadnought => self.dreadnought,
        }
    }

    fn slot_mut(&mut self, ship_type: ShipType) -> &mut u32 {
        match ship_type {
            ShipType::Interceptor => &mut self.interceptor,
            ShipType::Cruiser => &mut self.cruiser,
            ShipType::Dreadnought => &mut self.dreadnought,
        }
    }

    /// Total ships across all types, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.interceptor
            .saturating_add(self.cruiser)
            .saturating_add(self.dreadnought)
    }

    /// Whether every count is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.interceptor == 0 && self.cruiser == 0 && self.dreadnought == 0
    }

    /// Whether `self` has at least `other` of every type.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.interceptor >= other.interceptor
            && self.cruiser >= other.cruiser
            && self.dreadnought >= other.dreadnought
    }

    /// `self` plus `other`, or [`GameError::CapacityExceeded`] if any type
    /// would overflow.
    pub fn merged(&self, other: &Self) -> Result<Self> {
        let mut sum = *self;
        for ship_type in ShipType::ALL {
            let slot = sum.slot_mut(ship_type);
            *slot = slot.checked_add(other.get(ship_type)).ok_or_else(|| {
                GameError::CapacityExceeded(format!("Fleet of {self} cannot take {other} more"))
            })?;
        }
        Ok(sum)
    }

    /// Add every count in `other`. Fails without change on overflow.
    pub fn add(&mut self, other: &Self) -> Result<()> {
        *self = self.merged(other)?;
        Ok(())
    }

    /// Remove every count in `other`. Fails without change if any type is short.
    pub fn subtract(&mut self, other: &Self) -> Result<()> {
        if !self.contains(other) {
            return Err(GameError::InvalidTarget(format!(
                "Fleet holds {self}, cannot detach {other}"
            )));
        }
        for ship_type in ShipType::ALL {
            *self.slot_mut(ship_type) -= other.get(ship_type);
        }
        Ok(())
    }

    /// Types with a non-zero count, paired with the count.
    pub fn iter(&self) -> impl Iterator<Item = (ShipType, u32)> + '_ {
        ShipType::ALL
            .into_iter()
            .map(|t| (t, self.get(t)))
            .filter(|(_, n)| *n > 0)
    }
}

impl std::fmt::Display for ShipCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("no ships");
        }
        let parts: Vec<String> = self.iter().map(|(t, n)| format!("{n} {t}")).collect();
        f.write_str(&parts.join(", "))
    }
}

/// A group of ships at one hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fleet {
    /// Identifier.
    pub id: FleetId,
    /// Owner.
    pub owner: FleetOwner,
    /// Location.
    pub hex: HexId,
    /// Ships per type.
    pub ships: ShipCounts,
}

/// Result of planning a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    /// Movement range of the slowest selected ship.
    pub range: u32,
    /// Every other hex within range, with its movement cost.
    pub reachable: Vec<(HexId, u32)>,
}

impl MovePlan {
    /// Whether `hex` is a legal destination.
    #[must_use]
    pub fn can_reach(&self, hex: &HexId) -> bool {
        self.reachable.iter().any(|(id, _)| id == hex)
    }
}

/// Add `ships` to `owner`'s fleet at `hex`, creating it when needed.
///
/// # Errors
/// [`GameError::CapacityExceeded`] if the merged fleet would overflow a count.
pub fn add_ships(
    state: &mut GameState,
    owner: FleetOwner,
    hex: &HexId,
    ships: &ShipCounts,
) -> Result<FleetId> {
    if let Some(fleet) = state.fleet_at_mut(owner, hex) {
        fleet.ships.add(ships)?;
        return Ok(fleet.id);
    }
    let id = state.allocate_fleet_id();
    state.fleets.push(Fleet {
        id,
        owner,
        hex: hex.clone(),
        ships: *ships,
    });
    Ok(id)
}

/// Fail if `ships` could not join `owner`'s fleet at `hex`.
fn ensure_fits(state: &GameState, owner: FleetOwner, hex: &HexId, ships: &ShipCounts) -> Result<()> {
    match state.fleet_at(owner, hex) {
        Some(fleet) => fleet.ships.merged(ships).map(|_| ()),
        None => Ok(()),
    }
}

/// Relocate `ships` from `owner`'s fleet at `source` to `dest`.
///
/// The source fleet is removed once empty; the destination merges into an
/// existing fleet of the same owner. Performs no range check.
pub fn move_ships(
    state: &mut GameState,
    owner: FleetOwner,
    source: &HexId,
    dest: &HexId,
    ships: &ShipCounts,
) -> Result<FleetId> {
    if ships.is_empty() {
        return Err(GameError::NoSelection("No ships selected".to_string()));
    }
    state.require_hex(dest)?;
    let index = state
        .fleets
        .iter()
        .position(|f| f.owner == owner && &f.hex == source)
        .ok_or_else(|| GameError::InvalidTarget(format!("No fleet stationed at {source}")))?;
    if source != dest {
        ensure_fits(state, owner, dest, ships)?;
    }

    state.fleets[index].ships.subtract(ships)?;
    if state.fleets[index].ships.is_empty() {
        state.fleets.remove(index);
    }
    add_ships(state, owner, dest, ships)
}

/// Work out how far `ships` from `player`'s fleet at `source` can travel.
///
/// # Errors
/// - [`GameError::UnknownHex`] if `source` is not on the map
/// - [`GameError::NoSelection`] if no ships are selected
/// - [`GameError::InvalidTarget`] if the fleet there does not hold the selection
pub fn plan_move(
    state: &GameState,
    catalog: &Catalog,
    player: PlayerId,
    source: &HexId,
    ships: &ShipCounts,
) -> Result<MovePlan> {
    let origin = state.require_hex(source)?.coord;
    if ships.is_empty() {
        return Err(GameError::NoSelection("No ships selected".to_string()));
    }
    let fleet = state
        .fleet_at(FleetOwner::Player(player), source)
        .ok_or_else(|| GameError::InvalidTarget(format!("No fleet stationed at {source} under your command")))?;
    if !fleet.ships.contains(ships) {
        return Err(GameError::InvalidTarget(format!(
            "Fleet at {source} holds {}, not {ships}",
            fleet.ships
        )));
    }

    let blueprints = &state.require_player(player)?.blueprints;
    let range = ships
        .iter()
        .map(|(ship_type, _)| blueprints.get(ship_type).compute_stats(catalog).movement)
        .min()
        .map_or(0, |m| u32::try_from(m).unwrap_or(0));

    let reachable = reachable_set(
        origin,
        range,
        state.map.iter().map(|h| (h.id.clone(), h.coord)),
    );
    Ok(MovePlan { range, reachable })
}

/// Move `ships` if `dest` lies within their range.
pub fn execute_move(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    source: &HexId,
    dest: &HexId,
    ships: &ShipCounts,
) -> Result<Vec<GameEvent>> {
    state.require_hex(dest)?;
    let plan = plan_move(state, catalog, player, source, ships)?;
    if !plan.can_reach(dest) {
        return Err(GameError::InvalidTarget(format!(
            "{dest} is out of range ({})",
            plan.range
        )));
    }

    let fleet = move_ships(state, FleetOwner::Player(player), source, dest, ships)?;
    debug!(player = player.0, %source, %dest, %ships, %fleet, "Fleet moved");

    let target = state.require_hex(dest)?;
    let hostile_fleet = state.fleet_at(FleetOwner::Hostile, dest).is_some();
    let mut events = vec![GameEvent::FleetMoved {
        source: source.clone(),
        dest: dest.clone(),
        hex_name: target.name.clone(),
        ships: *ships,
    }];
    if target.has_hostiles() || hostile_fleet {
        events.push(GameEvent::HostilesDetected { hex: dest.clone() });
    } else if let Some(owner) = target.owner.filter(|o| *o != player) {
        let owner_name = state.require_player(owner)?.name.clone();
        events.push(GameEvent::EnteredTerritory {
            hex: dest.clone(),
            owner,
            owner_name,
        });
    }
    Ok(events)
}

/// Build ships and colony ships at one of `player`'s shipyards.
///
/// Total Materials cost is the blueprint cost of every ship plus the colony
/// ship price for each colony ship. Colony ships go to inventory; warships
/// join the player's fleet at `hex`.
pub fn queue_build(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
    ships: &ShipCounts,
    colony_ships: u32,
) -> Result<Vec<GameEvent>> {
    let site = state.require_hex(hex)?;
    if !site.is_owned_by(player) || !site.is_shipyard() {
        return Err(GameError::InvalidTarget(format!(
            "{} is not a shipyard under your control",
            site.name
        )));
    }
    if ships.is_empty() && colony_ships == 0 {
        return Err(GameError::NoSelection("Nothing ordered".to_string()));
    }

    let actor = state.require_player(player)?;
    let ship_cost: u32 = ships
        .iter()
        .map(|(ship_type, n)| actor.blueprints.get(ship_type).cost.saturating_mul(n))
        .fold(0, u32::saturating_add);
    let cost = ship_cost.saturating_add(catalog.rules.colony_ship_cost.saturating_mul(colony_ships));
    actor.resources.ensure(ResourceType::Materials, cost)?;
    ensure_fits(state, FleetOwner::Player(player), hex, ships)?;

    let actor = state.require_player_mut(player)?;
    actor.resources.try_debit(ResourceType::Materials, cost)?;
    actor.inventory.add(InventoryItem::ColonyShips, colony_ships);
    if !ships.is_empty() {
        add_ships(state, FleetOwner::Player(player), hex, ships)?;
    }
    debug!(player = player.0, %hex, %ships, colony_ships, cost, "Production complete");
    Ok(vec![GameEvent::ProductionComplete {
        hex: hex.clone(),
        ships: *ships,
        colony_ships,
        cost,
    }])
}
