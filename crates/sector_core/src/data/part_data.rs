//! Ship part catalog data structures.

use serde::{Deserialize, Serialize};

use crate::tech::TechId;

/// Unique identifier for a ship part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    /// Create a part ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PartId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which bay a part occupies. Purely descriptive; any slot accepts any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// Adds damage.
    Weapon,
    /// Adds hull or shields.
    Defense,
    /// Adds initiative.
    Support,
    /// Adds movement.
    Drive,
}

/// Combat modifier granted by a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// +1 to hit.
    Missile,
    /// Ignores shields.
    Ion,
    /// Marks high-damage weaponry.
    Plasma,
    /// Absorbs damage from non-ion weapons.
    Shield,
}

/// Stat changes applied by an installed part. Missing fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatDelta {
    /// Hull points.
    #[serde(default)]
    pub hull: i32,
    /// Initiative.
    #[serde(default)]
    pub initiative: i32,
    /// Movement range.
    #[serde(default)]
    pub movement: i32,
    /// Damage per hit.
    #[serde(default)]
    pub damage: i32,
}

/// Data-driven ship part definition.
///
/// # Example RON
///
/// ```ron
/// ShipPart(
///     id: "ion_cannon",
///     name: "Ion Cannon",
///     kind: Weapon,
///     cost: 2,
///     required_tech: Some("m2"),
///     stats: (damage: 1),
///     special: Some(Ion),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipPart {
    /// Unique identifier.
    pub id: PartId,
    /// Display name.
    pub name: String,
    /// Descriptive category.
    pub kind: PartKind,
    /// Materials cost to install.
    pub cost: u32,
    /// Tech that must be unlocked before installing.
    #[serde(default)]
    pub required_tech: Option<TechId>,
    /// Stat changes.
    #[serde(default)]
    pub stats: StatDelta,
    /// Combat special, if any.
    #[serde(default)]
    pub special: Option<Special>,
    /// Short description for UI.
    #[serde(default)]
    pub description: String,
}

impl ShipPart {
    fn new(id: &str, name: &str, kind: PartKind, cost: u32, tech: &str, stats: StatDelta) -> Self {
        Self {
            id: PartId::new(id),
            name: name.to_string(),
            kind,
            cost,
            required_tech: Some(TechId::new(tech)),
            stats,
            special: None,
            description: String::new(),
        }
    }

    fn with_special(mut self, special: Special) -> Self {
        self.special = Some(special);
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// The built-in part catalog.
#[must_use]
pub fn standard_parts() -> Vec<ShipPart> {
    let damage = |n| StatDelta {
        damage: n,
        ..StatDelta::default()
    };
    let hull = |n| StatDelta {
        hull: n,
        ..StatDelta::default()
    };
    let initiative = |n| StatDelta {
        initiative: n,
        ..StatDelta::default()
    };
    let movement = |n| StatDelta {
        movement: n,
        ..StatDelta::default()
    };

    vec![
        // Weapons
        ShipPart::new("plasma_cannon", "Plasma Cannon", PartKind::Weapon, 2, "m1", damage(2))
            .with_special(Special::Plasma)
            .describe("+2 Damage"),
        ShipPart::new("ion_cannon", "Ion Cannon", PartKind::Weapon, 2, "m2", damage(1))
            .with_special(Special::Ion)
            .describe("Bypasses Shields"),
        ShipPart::new("missile_launcher", "Missile Launcher", PartKind::Weapon, 3, "m3", damage(1))
            .with_special(Special::Missile)
            .describe("+1 Accuracy"),
        // Defense
        ShipPart::new("shield_gen", "Shield Generator", PartKind::Defense, 3, "g3", hull(1))
            .with_special(Special::Shield)
            .describe("Absorbs 2 Dmg"),
        ShipPart::new("reinforced_hull", "Reinforced Plating", PartKind::Defense, 2, "n1", hull(3))
            .describe("+3 Hull Integrity"),
        // Support
        ShipPart::new("target_comp", "Targeting Comp", PartKind::Support, 2, "g2", initiative(2))
            .describe("+2 Initiative"),
        ShipPart::new("fusion_reactor", "Fusion Reactor", PartKind::Support, 2, "g1", initiative(1))
            .describe("+1 Init (Power)"),
        // Drives
        ShipPart::new("warp_drive", "Warp Drive", PartKind::Drive, 3, "g4", movement(1))
            .describe("+1 Movement Range"),
    ]
}
