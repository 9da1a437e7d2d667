//! The complete static data set for a game.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::hull_data::{standard_hulls, HullData};
use super::part_data::{standard_parts, PartId, ShipPart};
use super::rules::RuleSet;
use super::tech_data::{standard_techs, TechData};
use crate::blueprint::ShipType;
use crate::error::{GameError, Result};
use crate::tech::TechId;

/// Static, read-only data shared by every player in a game.
///
/// Contains the tech catalog, the part catalog, stock hulls and the rule
/// set. Loaded from RON or built from the standard game.
///
/// # Example RON
///
/// ```ron
/// Catalog(
///     techs: [...],
///     parts: [...],
///     hulls: [...],
///     rules: (round_limit: 9),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// All technologies.
    pub techs: Vec<TechData>,

    /// All ship parts.
    pub parts: Vec<ShipPart>,

    /// Stock hull for each ship type.
    pub hulls: Vec<HullData>,

    /// Tunable rules.
    #[serde(default)]
    pub rules: RuleSet,
}

impl Catalog {
    /// The standard game data.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            techs: standard_techs(),
            parts: standard_parts(),
            hulls: standard_hulls(),
            rules: RuleSet::default(),
        }
    }

    /// Parse a catalog from RON text.
    ///
    /// `source_name` only labels errors (usually the file name).
    pub fn from_ron(text: &str, source_name: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| GameError::DataParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Render the catalog as pretty RON.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| GameError::InvalidState(format!("Failed to serialize catalog: {e}")))
    }

    /// Find a technology by its ID.
    #[must_use]
    pub fn tech(&self, id: &TechId) -> Option<&TechData> {
        self.techs.iter().find(|t| &t.id == id)
    }

    /// Find a part by its ID.
    #[must_use]
    pub fn part(&self, id: &PartId) -> Option<&ShipPart> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Find a part, failing fast on ids outside the catalog.
    pub fn require_part(&self, id: &PartId) -> Result<&ShipPart> {
        self.part(id).ok_or_else(|| GameError::UnknownPart(id.clone()))
    }

    /// Stock hull for a ship type.
    #[must_use]
    pub fn hull(&self, ship_type: ShipType) -> Option<&HullData> {
        self.hulls.iter().find(|h| h.ship_type == ship_type)
    }

    /// Validate cross-references.
    ///
    /// Returns a list of validation errors (empty if valid).
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for tech in &self.techs {
            if !seen.insert(&tech.id) {
                errors.push(format!("Duplicate tech id '{}'", tech.id));
            }
            if let Some(prereq) = &tech.prerequisite {
                if self.tech(prereq).is_none() {
                    errors.push(format!(
                        "Tech '{}' has unknown prerequisite '{}'",
                        tech.id, prereq
                    ));
                }
            }
        }

        for tech in &self.techs {
            if self.has_prerequisite_cycle(tech) {
                errors.push(format!("Tech '{}' is part of a prerequisite cycle", tech.id));
            }
        }

        let mut seen = HashSet::new();
        for part in &self.parts {
            if !seen.insert(&part.id) {
                errors.push(format!("Duplicate part id '{}'", part.id));
            }
            if let Some(tech) = &part.required_tech {
                if self.tech(tech).is_none() {
                    errors.push(format!(
                        "Part '{}' requires unknown tech '{}'",
                        part.id, tech
                    ));
                }
            }
        }

        for ship_type in ShipType::ALL {
            match self.hulls.iter().filter(|h| h.ship_type == ship_type).count() {
                0 => errors.push(format!("Missing hull for {ship_type}")),
                1 => {}
                n => errors.push(format!("{n} hulls defined for {ship_type}")),
            }
        }

        for hull in &self.hulls {
            if hull.movement <= 0 {
                errors.push(format!("{} hull can never move", hull.ship_type));
            }
        }

        if self.hulls.iter().all(|h| h.slots == 0) {
            for part in &self.parts {
                errors.push(format!("Part '{}' can never fit: no hull has a slot", part.id));
            }
        }

        errors
    }

    fn has_prerequisite_cycle(&self, start: &TechData) -> bool {
        let mut cursor = start.prerequisite.as_ref();
        // A chain longer than the catalog must revisit something.
        for _ in 0..self.techs.len() {
            let Some(id) = cursor else {
                return false;
            };
            if id == &start.id {
                return true;
            }
            cursor = self.tech(id).and_then(|t| t.prerequisite.as_ref());
        }
        cursor.is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
