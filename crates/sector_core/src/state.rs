//! The authoritative game aggregate.
//!
//! [`GameState`] owns every player, sector and fleet. Action handlers take
//! it by `&mut` on a private clone, so the copy a caller holds only changes
//! when a whole action succeeds.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::blueprint::Blueprints;
use crate::data::Catalog;
use crate::economy::{Influence, Inventory, Resources};
use crate::error::{GameError, Result};
use crate::fleet::{Fleet, FleetId, FleetOwner};
use crate::map::{start_hex, starting_map, Hex, HexId};
use crate::tech::TechTree;
use crate::turn::GamePhase;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 4;

/// Stable player index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player for seat `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(u8::try_from(index).unwrap_or(u8::MAX))
    }

    /// Seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Player colour tag, assigned in seat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    /// Seat 1.
    Blue,
    /// Seat 2.
    Orange,
    /// Seat 3.
    Green,
    /// Seat 4.
    Purple,
}

impl PlayerColor {
    /// Colours in seat order.
    pub const SEATS: [Self; MAX_PLAYERS] = [Self::Blue, Self::Orange, Self::Green, Self::Purple];
}

/// One seated player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Colour tag.
    pub color: PlayerColor,
    /// Current balances.
    pub resources: Resources,
    /// Base income rates.
    pub income: Resources,
    /// Influence discs.
    pub influence: Influence,
    /// Population, colony ships and starbases in stock.
    pub inventory: Inventory,
    /// Reputation tiles earned, in order.
    pub reputation: Vec<u32>,
    /// Victory points.
    pub victory_points: u32,
    /// This player's research.
    pub techs: TechTree,
    /// This player's ship designs.
    pub blueprints: Blueprints,
}

impl Player {
    /// A fresh player for seat `id`, using the catalog's starting values.
    pub fn new(id: PlayerId, catalog: &Catalog) -> Result<Self> {
        let color = *PlayerColor::SEATS
            .get(id.index())
            .ok_or(GameError::InvalidPlayerCount(id.index() + 1))?;
        let rules = &catalog.rules;
        Ok(Self {
            id,
            name: format!("Commander {}", id.index() + 1),
            color,
            resources: rules.starting_resources,
            income: rules.base_income,
            influence: Influence::full(rules.influence_discs),
            inventory: Inventory {
                population: rules.starting_population,
                colony_ships: rules.starting_colony_ships,
                starbases: rules.starting_starbases,
            },
            reputation: Vec::new(),
            victory_points: 0,
            techs: TechTree::from_catalog(&catalog.techs),
            blueprints: Blueprints::from_catalog(catalog)?,
        })
    }
}

/// Everything that changes during a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Round number, starting at 1.
    pub round: u32,
    /// Current phase.
    pub phase: GamePhase,
    /// Seated players in turn order.
    pub players: Vec<Player>,
    /// Index into `players` of whoever is acting.
    pub active_player: usize,
    /// Every fleet on the map.
    pub fleets: Vec<Fleet>,
    /// Every sector.
    pub map: Vec<Hex>,
    /// Next fleet id to hand out.
    pub next_fleet_id: u32,
}

impl GameState {
    /// Set up a new game for `player_count` players.
    ///
    /// # Errors
    /// - [`GameError::InvalidPlayerCount`] unless `1 <= player_count <= 4`
    /// - [`GameError::InvalidState`] if the catalog lacks a hull design
    pub fn new_game(catalog: &Catalog, player_count: usize) -> Result<Self> {
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }

        let players = (0..player_count)
            .map(|i| Player::new(PlayerId::from_index(i), catalog))
            .collect::<Result<Vec<_>>>()?;

        let mut map = starting_map();
        for player in &players {
            let home = start_hex(player.id, &player.name, catalog.rules.home_population)
                .ok_or(GameError::InvalidPlayerCount(player_count))?;
            map.push(home);
        }

        info!(player_count, "New game");
        Ok(Self {
            round: 1,
            phase: GamePhase::Action,
            players,
            active_player: 0,
            fleets: Vec::new(),
            map,
            next_fleet_id: 1,
        })
    }

    /// Look up a sector.
    #[must_use]
    pub fn hex(&self, id: &HexId) -> Option<&Hex> {
        self.map.iter().find(|h| &h.id == id)
    }

    /// Look up a sector, failing on ids that are not on the map.
    pub fn require_hex(&self, id: &HexId) -> Result<&Hex> {
        self.hex(id).ok_or_else(|| GameError::UnknownHex(id.clone()))
    }

    /// Mutable sector lookup, failing on ids that are not on the map.
    pub fn require_hex_mut(&mut self, id: &HexId) -> Result<&mut Hex> {
        self.map
            .iter_mut()
            .find(|h| &h.id == id)
            .ok_or_else(|| GameError::UnknownHex(id.clone()))
    }

    /// Look up a player.
    pub fn require_player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id.index())
            .ok_or_else(|| GameError::InvalidState(format!("No player in seat {}", id.index())))
    }

    /// Mutable player lookup.
    pub fn require_player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.index())
            .ok_or_else(|| GameError::InvalidState(format!("No player in seat {}", id.index())))
    }

    /// Who is acting.
    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        PlayerId::from_index(self.active_player)
    }

    /// The acting player.
    pub fn active_player(&self) -> Result<&Player> {
        self.require_player(self.active_id())
    }

    /// The fleet `owner` has at `hex`, if any.
    #[must_use]
    pub fn fleet_at(&self, owner: FleetOwner, hex: &HexId) -> Option<&Fleet> {
        self.fleets.iter().find(|f| f.owner == owner && &f.hex == hex)
    }

    /// Mutable fleet lookup by owner and location.
    pub fn fleet_at_mut(&mut self, owner: FleetOwner, hex: &HexId) -> Option<&mut Fleet> {
        self.fleets
            .iter_mut()
            .find(|f| f.owner == owner && &f.hex == hex)
    }

    /// Hand out the next fleet id.
    pub fn allocate_fleet_id(&mut self) -> FleetId {
        let id = FleetId(self.next_fleet_id);
        self.next_fleet_id += 1;
        id
    }

    /// Whether the advisory round limit has been played through.
    #[must_use]
    pub const fn is_final_round_complete(&self, round_limit: u32) -> bool {
        self.round > round_limit
    }

    /// Stable hash of the full state, for replay and determinism checks.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        self.round.hash(&mut hasher);
        self.phase.hash(&mut hasher);
        self.active_player.hash(&mut hasher);
        self.next_fleet_id.hash(&mut hasher);
        self.players.hash(&mut hasher);
        self.map.hash(&mut hasher);

        // Fleets in id order so list position does not matter
        let mut fleets: Vec<&Fleet> = self.fleets.iter().collect();
        fleets.sort_by_key(|f| f.id);
        fleets.hash(&mut hasher);

        hasher.finish()
    }

    /// List every broken invariant (empty if consistent).
    #[must_use]
    pub fn check_invariants(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.active_player >= self.players.len() {
            problems.push(format!(
                "Active player {} out of range for {} players",
                self.active_player,
                self.players.len()
            ));
        }

        for (i, hex) in self.map.iter().enumerate() {
            if self.map[..i].iter().any(|h| h.id == hex.id) {
                problems.push(format!("Duplicate hex id {}", hex.id));
            }
            if hex.population > hex.population_capacity() {
                problems.push(format!(
                    "Hex {} has population {} over capacity {}",
                    hex.id,
                    hex.population,
                    hex.population_capacity()
                ));
            }
            if let Some(owner) = hex.owner {
                if owner.index() >= self.players.len() {
                    problems.push(format!("Hex {} owned by unknown player {owner}", hex.id));
                }
            }
        }

        for (i, fleet) in self.fleets.iter().enumerate() {
            if fleet.ships.is_empty() {
                problems.push(format!("Fleet {} is empty", fleet.id));
            }
            if self.hex(&fleet.hex).is_none() {
                problems.push(format!("Fleet {} is at unknown hex {}", fleet.id, fleet.hex));
            }
            if self.fleets[..i]
                .iter()
                .any(|f| f.owner == fleet.owner && f.hex == fleet.hex)
            {
                problems.push(format!("Two fleets share owner and hex {}", fleet.hex));
            }
            if fleet.id.0 >= self.next_fleet_id {
                problems.push(format!("Fleet {} id not yet allocated", fleet.id));
            }
        }

        for player in &self.players {
            if player.influence.current > player.influence.max {
                problems.push(format!("{} has influence over max", player.name));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Structure, Terrain};

    #[test]
    fn test_player_count_bounds() {
        let catalog = Catalog::standard();
        assert_eq!(
            GameState::new_game(&catalog, 0).unwrap_err(),
            GameError::InvalidPlayerCount(0)
        );
        assert_eq!(
            GameState::new_game(&catalog, 5).unwrap_err(),
            GameError::InvalidPlayerCount(5)
        );
        assert!(GameState::new_game(&catalog, 1).is_ok());
    }

    #[test]
    fn test_new_player_defaults() {
        let catalog = Catalog::standard();
        let state = GameState::new_game(&catalog, 2).unwrap();
        let p = &state.players[1];
        assert_eq!(p.name, "Commander 2");
        assert_eq!(p.color, PlayerColor::Orange);
        assert_eq!(p.resources, Resources::new(2, 3, 3));
        assert_eq!(p.income, Resources::new(1, 1, 1));
        assert_eq!(p.influence, Influence::full(16));
        assert_eq!(p.inventory.population, 33);
        assert_eq!(p.inventory.colony_ships, 1);
        assert_eq!(p.inventory.starbases, 4);
        assert_eq!(state.round, 1);
        assert_eq!(state.phase, GamePhase::Action);
    }

    #[test]
    fn test_start_hexes_per_player() {
        let catalog = Catalog::standard();
        let state = GameState::new_game(&catalog, 3).unwrap();
        let starts: Vec<&Hex> = state
            .map
            .iter()
            .filter(|h| h.terrain == Terrain::Start)
            .collect();
        assert_eq!(starts.len(), 3);
        for (i, hex) in starts.iter().enumerate() {
            assert_eq!(hex.owner, Some(PlayerId::from_index(i)));
            assert_eq!(hex.structure, Some(Structure::Starbase));
        }
        assert!(state.check_invariants().is_empty());
    }

    #[test]
    fn test_state_hash_tracks_changes() {
        let catalog = Catalog::standard();
        let a = GameState::new_game(&catalog, 2).unwrap();
        let mut b = a.clone();
        assert_eq!(a.state_hash(), b.state_hash());
        b.players[0].resources.money += 1;
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn test_check_invariants_flags_overpopulation() {
        let catalog = Catalog::standard();
        let mut state = GameState::new_game(&catalog, 1).unwrap();
        state.map[1].population = 5;
        state.active_player = 3;
        let problems = state.check_invariants();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_final_round_is_advisory() {
        let catalog = Catalog::standard();
        let mut state = GameState::new_game(&catalog, 1).unwrap();
        assert!(!state.is_final_round_complete(catalog.rules.round_limit));
        state.round = 10;
        assert!(state.is_final_round_complete(catalog.rules.round_limit));
    }
}
