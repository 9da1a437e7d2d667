//! Tech catalog data structures.

use serde::{Deserialize, Serialize};

use crate::tech::{TechCategory, TechId};

/// Data-driven technology definition.
///
/// Static and shared; each player gets an owned runtime copy through
/// [`crate::tech::TechTree::from_catalog`].
///
/// # Example RON
///
/// ```ron
/// TechData(
///     id: "m2",
///     name: "Ballistics",
///     category: Military,
///     cost: 4,
///     prerequisite: Some("m1"),
///     description: "Unlock Ion Cannons (Anti-Shield)",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechData {
    /// Unique identifier.
    pub id: TechId,

    /// Display name.
    pub name: String,

    /// Track this technology belongs to.
    pub category: TechCategory,

    /// Science cost to research.
    pub cost: u32,

    /// Technology that must be researched first.
    #[serde(default)]
    pub prerequisite: Option<TechId>,

    /// Short description for UI.
    #[serde(default)]
    pub description: String,
}

impl TechData {
    /// Create a tech definition with no prerequisite.
    #[must_use]
    pub fn new(id: &str, name: &str, category: TechCategory, cost: u32) -> Self {
        Self {
            id: TechId::new(id),
            name: name.to_string(),
            category,
            cost,
            prerequisite: None,
            description: String::new(),
        }
    }

    /// Builder method to set the prerequisite.
    #[must_use]
    pub fn after(mut self, prerequisite: &str) -> Self {
        self.prerequisite = Some(TechId::new(prerequisite));
        self
    }

    /// Builder method to set the description.
    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Check if this technology directly requires `tech_id`.
    #[must_use]
    pub fn requires(&self, tech_id: &TechId) -> bool {
        self.prerequisite.as_ref() == Some(tech_id)
    }
}

/// The built-in three-track tech catalog.
#[must_use]
pub fn standard_techs() -> Vec<TechData> {
    use TechCategory::{Grid, Military, Nano};

    vec![
        TechData::new("m1", "Plasma Physics", Military, 3)
            .describe("Unlock Plasma Cannons (Dmg Bonus)"),
        TechData::new("m2", "Ballistics", Military, 4)
            .after("m1")
            .describe("Unlock Ion Cannons (Anti-Shield)"),
        TechData::new("m3", "Missile Tech", Military, 5)
            .after("m2")
            .describe("Unlock Guided Missiles (+1 Accuracy)"),
        TechData::new("m4", "Antimatter", Military, 8)
            .after("m3")
            .describe("Unlock Mass Bombardment"),
        TechData::new("g1", "Power Sources", Grid, 3).describe("Unlock Fusion Reactor (Energy)"),
        TechData::new("g2", "Quantum Comp", Grid, 4)
            .after("g1")
            .describe("Unlock Target Comp (Initiative)"),
        TechData::new("g3", "Deflectors", Grid, 5)
            .after("g2")
            .describe("Unlock Shield Generators"),
        TechData::new("g4", "Warp Drives", Grid, 6)
            .after("g3")
            .describe("Unlock Warp Drive (+1 Move)"),
        TechData::new("n1", "Materials Sci", Nano, 3).describe("Unlock Reinforced Hull (+HP)"),
        TechData::new("n2", "Civil Eng", Nano, 4)
            .after("n1")
            .describe("Mining Bonus (+Materials)"),
        TechData::new("n3", "Xenobiology", Nano, 5)
            .after("n2")
            .describe("Terraforming (+Pop Cap)"),
        TechData::new("n4", "Logistics", Nano, 6)
            .after("n3")
            .describe("Field Repairs"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires() {
        let tech = TechData::new("g2", "Quantum Comp", TechCategory::Grid, 4).after("g1");
        assert!(tech.requires(&TechId::new("g1")));
        assert!(!tech.requires(&TechId::new("m1")));
    }

    #[test]
    fn test_standard_tracks_are_linear() {
        let techs = standard_techs();
        assert_eq!(techs.len(), 12);
        for category in TechCategory::ALL {
            let roots = techs
                .iter()
                .filter(|t| t.category == category && t.prerequisite.is_none())
                .count();
            assert_eq!(roots, 1, "{category:?} should have one entry point");
        }
    }
}
