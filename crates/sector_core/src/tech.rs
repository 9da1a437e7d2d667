//! Per-player technology tree.
//!
//! Three independent linear tracks. A tech is available once its
//! prerequisite (if any) is unlocked. Research spends Science; a reset refunds
//! everything spent and starts the tree over.

use serde::{Deserialize, Serialize};

use crate::data::TechData;
use crate::economy::{ResourceType, Resources};
use crate::error::{GameError, Result};

/// Unique identifier for a technology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechId(String);

impl TechId {
    /// Create a tech ID.
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

impl From<&str> for TechId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for TechId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three research tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechCategory {
    /// Weapons.
    Military,
    /// Power, computers, shields, drives.
    Grid,
    /// Hulls and colonisation.
    Nano,
}

impl TechCategory {
    /// All tracks.
    pub const ALL: [Self; 3] = [Self::Military, Self::Grid, Self::Nano];
}

/// A player's copy of one technology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tech {
    /// Identifier.
    pub id: TechId,
    /// Display name.
    pub name: String,
    /// Research track.
    pub category: TechCategory,
    /// Science cost.
    pub cost: u32,
    /// Whether this player has researched it.
    pub unlocked: bool,
    /// Tech required first.
    pub prerequisite: Option<TechId>,
    /// What unlocking it enables.
    pub description: String,
}

impl Tech {
    fn from_data(data: &TechData) -> Self {
        Self {
            id: data.id.clone(),
            name: data.name.clone(),
            category: data.category,
            cost: data.cost,
            unlocked: false,
            prerequisite: data.prerequisite.clone(),
            description: data.description.clone(),
        }
    }
}

/// An owned, per-player technology tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechTree {
    techs: Vec<Tech>,
}

impl TechTree {
    /// Build a fresh tree with nothing unlocked.
    #[must_use]
    pub fn from_catalog(catalog: &[TechData]) -> Self {
        Self {
            techs: catalog.iter().map(Tech::from_data).collect(),
        }
    }

    /// All techs in catalog order.
    #[must_use]
    pub fn techs(&self) -> &[Tech] {
        &self.techs
    }

    /// Look up a tech.
    #[must_use]
    pub fn get(&self, id: &TechId) -> Option<&Tech> {
        self.techs.iter().find(|t| &t.id == id)
    }

    /// Whether `id` is unlocked. Unknown ids are locked.
    #[must_use]
    pub fn is_unlocked(&self, id: &TechId) -> bool {
        self.get(id).is_some_and(|t| t.unlocked)
    }

    /// Whether `id` can be researched now (ignoring cost).
    #[must_use]
    pub fn is_available(&self, id: &TechId) -> bool {
        self.get(id).is_some_and(|t| self.is_tech_available(t))
    }

    fn is_tech_available(&self, tech: &Tech) -> bool {
        !tech.unlocked
            && tech
                .prerequisite
                .as_ref()
                .map_or(true, |prereq| self.is_unlocked(prereq))
    }

    /// Techs that can be researched right now.
    pub fn available(&self) -> impl Iterator<Item = &Tech> {
        self.techs.iter().filter(|t| self.is_tech_available(t))
    }

    /// Techs on one track, in catalog order.
    pub fn by_category(&self, category: TechCategory) -> impl Iterator<Item = &Tech> {
        self.techs.iter().filter(move |t| t.category == category)
    }

    /// Number of unlocked techs.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.techs.iter().filter(|t| t.unlocked).count()
    }

    /// Total Science spent on currently unlocked techs.
    #[must_use]
    pub fn spent_science(&self) -> u32 {
        self.techs
            .iter()
            .filter(|t| t.unlocked)
            .map(|t| t.cost)
            .sum()
    }

    /// Research `id`, paying from `balance`.
    ///
    /// # Errors
    /// - [`GameError::UnknownTech`] if `id` is not in the tree
    /// - [`GameError::NotAvailable`] if already unlocked or the prerequisite is missing
    /// - [`GameError::InsufficientFunds`] if Science is short
    pub fn research(&mut self, id: &TechId, balance: &mut Resources) -> Result<u32> {
        let index = self
            .techs
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| GameError::UnknownTech(id.clone()))?;
        if !self.is_tech_available(&self.techs[index]) {
            return Err(GameError::NotAvailable(id.clone()));
        }
        let cost = self.techs[index].cost;
        balance.try_debit(ResourceType::Science, cost)?;
        self.techs[index].unlocked = true;
        Ok(cost)
    }

    /// Refund every unlocked tech and rebuild the tree from `catalog`.
    ///
    /// Returns the Science credited to `balance`.
    pub fn reset(&mut self, catalog: &[TechData], balance: &mut Resources) -> u32 {
        let refund = self.spent_science();
        balance.credit(ResourceType::Science, refund);
        *self = Self::from_catalog(catalog);
        refund
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::standard_techs;

    fn tree() -> TechTree {
        TechTree::from_catalog(&standard_techs())
    }

    #[test]
    fn test_fresh_tree_roots_available() {
        let tree = tree();
        let available: Vec<_> = tree.available().map(|t| t.id.as_str()).collect();
        assert_eq!(available, vec!["m1", "g1", "n1"]);
        assert_eq!(tree.unlocked_count(), 0);
    }

    #[test]
    fn test_research_debits_and_unlocks() {
        let mut tree = tree();
        let mut balance = Resources::new(0, 5, 0);
        let cost = tree.research(&TechId::new("m1"), &mut balance).unwrap();
        assert_eq!(cost, 3);
        assert_eq!(balance.science, 2);
        assert!(tree.is_unlocked(&TechId::new("m1")));
        assert!(tree.is_available(&TechId::new("m2")));
    }

    #[test]
    fn test_research_prerequisite_unmet() {
        let mut tree = tree();
        let mut balance = Resources::new(0, 50, 0);
        let err = tree.research(&TechId::new("m2"), &mut balance).unwrap_err();
        assert_eq!(err, GameError::NotAvailable(TechId::new("m2")));
        assert_eq!(balance.science, 50);
    }

    #[test]
    fn test_research_already_unlocked() {
        let mut tree = tree();
        let mut balance = Resources::new(0, 50, 0);
        tree.research(&TechId::new("g1"), &mut balance).unwrap();
        let err = tree.research(&TechId::new("g1"), &mut balance).unwrap_err();
        assert_eq!(err, GameError::NotAvailable(TechId::new("g1")));
    }

    #[test]
    fn test_research_insufficient_science() {
        let mut tree = tree();
        let mut balance = Resources::new(0, 2, 0);
        let err = tree.research(&TechId::new("n1"), &mut balance).unwrap_err();
        assert_eq!(err, GameError::funds(ResourceType::Science, 3, 2));
        assert!(!tree.is_unlocked(&TechId::new("n1")));
    }

    #[test]
    fn test_research_unknown() {
        let mut tree = tree();
        let mut balance = Resources::new(0, 50, 0);
        let err = tree.research(&TechId::new("z9"), &mut balance).unwrap_err();
        assert_eq!(err, GameError::UnknownTech(TechId::new("z9")));
    }

    #[test]
    fn test_reset_refunds_exact_sum() {
        let catalog = standard_techs();
        let mut tree = TechTree::from_catalog(&catalog);
        let mut balance = Resources::new(0, 20, 0);
        for id in ["m1", "m2", "g1"] {
            tree.research(&TechId::new(id), &mut balance).unwrap();
        }
        assert_eq!(balance.science, 10);
        let refund = tree.reset(&catalog, &mut balance);
        assert_eq!(refund, 3 + 4 + 3);
        assert_eq!(balance.science, 20);
        assert_eq!(tree.unlocked_count(), 0);
    }

    #[test]
    fn test_by_category_order() {
        let tree = tree();
        let nano: Vec<_> = tree
            .by_category(TechCategory::Nano)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(nano, vec!["n1", "n2", "n3", "n4"]);
    }
}
