//! Test fixtures and helpers.
//!
//! Pre-built game states and shortcuts for consistent testing. Helpers
//! poke the state directly; they are for setting up scenarios, not for
//! exercising the rules.

use sector_core::data::Catalog;
use sector_core::economy::Resources;
use sector_core::fleet::{add_ships, FleetOwner, ShipCounts};
use sector_core::map::HexId;
use sector_core::state::{GameState, PlayerId};
use sector_core::tech::TechTree;

/// Shorthand for a hex id.
#[must_use]
pub fn hex(id: &str) -> HexId {
    HexId::new(id)
}

/// The first player.
pub const P1: PlayerId = PlayerId(0);

/// The second player.
pub const P2: PlayerId = PlayerId(1);

/// A new standard game.
///
/// # Panics
///
/// Panics if `players` is outside 1-4.
#[must_use]
pub fn new_game(players: usize) -> GameState {
    GameState::new_game(&Catalog::standard(), players).expect("valid player count")
}

/// Set a player's balances.
///
/// # Panics
///
/// Panics if the player does not exist.
pub fn set_resources(state: &mut GameState, player: PlayerId, resources: Resources) {
    state.players[player.index()].resources = resources;
}

/// Give a player a lot of everything.
pub fn make_rich(state: &mut GameState, player: PlayerId) {
    set_resources(state, player, Resources::new(100, 100, 100));
}

/// Unlock every tech for a player without spending anything.
///
/// # Panics
///
/// Panics if the player does not exist.
pub fn unlock_all(state: &mut GameState, catalog: &Catalog, player: PlayerId) {
    let mut tree = TechTree::from_catalog(&catalog.techs);
    let mut science = Resources::new(0, u32::MAX, 0);
    // Catalog order lists every prerequisite before its dependents.
    for tech in &catalog.techs {
        tree.research(&tech.id, &mut science)
            .expect("standard catalog unlocks in order");
    }
    state.players[player.index()].techs = tree;
}

/// Put ships for `player` at `hex`, merging with any fleet already there.
///
/// # Panics
///
/// Panics if the merged fleet would overflow a count.
pub fn station_fleet(state: &mut GameState, player: PlayerId, at: &HexId, ships: ShipCounts) {
    add_ships(state, FleetOwner::Player(player), at, &ships).expect("fleet fits");
}

/// Put a hostile fleet at `hex`.
///
/// # Panics
///
/// Panics if the merged fleet would overflow a count.
pub fn station_hostiles(state: &mut GameState, at: &HexId, ships: ShipCounts) {
    add_ships(state, FleetOwner::Hostile, at, &ships).expect("fleet fits");
}

/// Mark a sector as guarded by an ancient.
///
/// # Panics
///
/// Panics if the hex is not on the map.
pub fn place_guardian(state: &mut GameState, at: &HexId) {
    let target = state.require_hex_mut(at).expect("hex on map");
    target.has_enemy = true;
}

/// Home sector id of a player.
#[must_use]
pub fn home_of(player: PlayerId) -> HexId {
    HexId::new(format!("start{}", player.index() + 1))
}
