//! Tunable game rules.
//!
//! Every field has a default matching the standard game, so a RON file only
//! needs to list what it changes:
//!
//! ```ron
//! RuleSet(
//!     starting_resources: (money: 5, science: 5, materials: 5),
//!     round_limit: 6,
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::blueprint::{Specials, UpgradeStat};
use crate::economy::Resources;

/// Materials cost of each blueprint base-stat upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeCosts {
    /// +1 base hull.
    pub hull: u32,
    /// +1 base initiative.
    pub initiative: u32,
    /// +1 base movement.
    pub movement: u32,
}

impl UpgradeCosts {
    /// Cost of upgrading `stat`.
    #[must_use]
    pub const fn cost_of(&self, stat: UpgradeStat) -> u32 {
        match stat {
            UpgradeStat::Hull => self.hull,
            UpgradeStat::Initiative => self.initiative,
            UpgradeStat::Movement => self.movement,
        }
    }
}

impl Default for UpgradeCosts {
    fn default() -> Self {
        Self {
            hull: 2,
            initiative: 3,
            movement: 3,
        }
    }
}

/// Dice and reward constants for combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Minimum (modified) d6 roll that hits.
    pub hit_threshold: u32,
    /// Added to the roll for hit checks when the attacker carries missiles.
    pub missile_bonus: u32,
    /// Raw die face that scores a critical.
    pub crit_face: u32,
    /// Extra damage on a critical.
    pub crit_bonus: i32,
    /// Damage absorbed by shields against non-ion weapons.
    pub shield_absorb: i32,
    /// Paid to the winner of a battle.
    pub victory_reward: Resources,
    /// Materials lost on defeat (floored at zero).
    pub defeat_penalty: u32,
    /// Reputation is drawn uniformly from `1..=reputation_faces`.
    pub reputation_faces: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            hit_threshold: 3,
            missile_bonus: 1,
            crit_face: 6,
            crit_bonus: 2,
            shield_absorb: 2,
            victory_reward: Resources::new(0, 2, 2),
            defeat_penalty: 2,
            reputation_faces: 4,
        }
    }
}

/// Fixed statistics of a static hostile occupant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostileProfile {
    /// Name used in the combat log.
    pub name: String,
    /// Hull points.
    pub hull: i32,
    /// Damage per hit.
    pub damage: i32,
    /// Initiative.
    pub initiative: i32,
    /// Combat specials.
    #[serde(default)]
    pub specials: Specials,
}

/// The two kinds of static hostiles on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileRoster {
    /// Guardian of the galactic core.
    pub gcds: HostileProfile,
    /// Ancient guarding an ordinary hostile sector.
    pub guardian: HostileProfile,
}

impl Default for HostileRoster {
    fn default() -> Self {
        Self {
            gcds: HostileProfile {
                name: "G.C.D.S. Omega".to_string(),
                hull: 30,
                damage: 7,
                initiative: 6,
                specials: Specials {
                    shields: true,
                    ion: false,
                    missiles: true,
                    plasma: true,
                },
            },
            guardian: HostileProfile {
                name: "Ancient Guardian".to_string(),
                hull: 8,
                damage: 3,
                initiative: 2,
                specials: Specials::default(),
            },
        }
    }
}

/// Every tunable number in the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Balances each player starts with.
    pub starting_resources: Resources,
    /// Income before sector production.
    pub base_income: Resources,
    /// Influence discs per player.
    pub influence_discs: u32,
    /// Population cubes in each player's inventory at start.
    pub starting_population: u32,
    /// Colony ships at start.
    pub starting_colony_ships: u32,
    /// Starbases in inventory at start.
    pub starting_starbases: u32,
    /// Inventory cap for starbases returned by recalls.
    pub max_starbases: u32,
    /// Population placed on each home sector.
    pub home_population: u32,
    /// Money spent per exploration.
    pub explore_cost: u32,
    /// Materials spent per starbase.
    pub starbase_cost: u32,
    /// Materials spent per colony ship.
    pub colony_ship_cost: u32,
    /// Blueprint upgrade prices.
    pub upgrade_costs: UpgradeCosts,
    /// Combat constants.
    pub combat: CombatRules,
    /// Static hostile occupants.
    pub hostiles: HostileRoster,
    /// Advisory number of rounds in a game.
    pub round_limit: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            starting_resources: Resources::new(2, 3, 3),
            base_income: Resources::new(1, 1, 1),
            influence_discs: 16,
            starting_population: 33,
            starting_colony_ships: 1,
            starting_starbases: 4,
            max_starbases: 4,
            home_population: 3,
            explore_cost: 1,
            starbase_cost: 3,
            colony_ship_cost: 2,
            upgrade_costs: UpgradeCosts::default(),
            combat: CombatRules::default(),
            hostiles: HostileRoster::default(),
            round_limit: 9,
        }
    }
}
