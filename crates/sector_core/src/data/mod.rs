//! Static game data: techs, ship parts, hulls and rules.
//!
//! This module contains pure data structures plus the built-in standard
//! game. Everything here can be deserialized from RON.
//!
//! **Note:** This module contains no IO - callers read files and hand the
//! text to [`Catalog::from_ron`].

mod catalog;
mod hull_data;
mod part_data;
mod rules;
mod tech_data;

pub use catalog::Catalog;
pub use hull_data::{standard_hulls, HullData};
pub use part_data::{standard_parts, PartId, PartKind, ShipPart, Special, StatDelta};
pub use rules::{CombatRules, HostileProfile, HostileRoster, RuleSet, UpgradeCosts};
pub use tech_data::{standard_techs, TechData};
