//! Resource ledger: balances, influence discs and inventory pools.
//!
//! Balances are unsigned. Every debit goes through a checked path that
//! reports the shortfall instead of wrapping, so a balance can never go
//! negative.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// The three tradeable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    /// Spent on exploration.
    Money,
    /// Spent on research.
    Science,
    /// Spent on ships, parts, upgrades and starbases.
    Materials,
}

impl ResourceType {
    /// All resource types in ledger order.
    pub const ALL: [Self; 3] = [Self::Money, Self::Science, Self::Materials];
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Money => "Money",
            Self::Science => "Science",
            Self::Materials => "Materials",
        };
        f.write_str(name)
    }
}

/// An amount of each resource. Used for balances, income rates and costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resources {
    /// Money.
    #[serde(default)]
    pub money: u32,
    /// Science.
    #[serde(default)]
    pub science: u32,
    /// Materials.
    #[serde(default)]
    pub materials: u32,
}

impl Resources {
    /// Nothing of anything.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a resource bundle.
    #[must_use]
    pub const fn new(money: u32, science: u32, materials: u32) -> Self {
        Self {
            money,
            science,
            materials,
        }
    }

    /// Amount held of one resource.
    #[must_use]
    pub const fn get(&self, resource: ResourceType) -> u32 {
        match resource {
            ResourceType::Money => self.money,
            ResourceType::Science => self.science,
            ResourceType::Materials => self.materials,
        }
    }

    fn slot_mut(&mut self, resource: ResourceType) -> &mut u32 {
        match resource {
            ResourceType::Money => &mut self.money,
            ResourceType::Science => &mut self.science,
            ResourceType::Materials => &mut self.materials,
        }
    }

    /// Check if the balance covers `amount` of `resource`.
    #[must_use]
    pub const fn can_afford(&self, resource: ResourceType, amount: u32) -> bool {
        self.get(resource) >= amount
    }

    /// Fail with [`GameError::InsufficientFunds`] unless the balance covers `amount`.
    pub fn ensure(&self, resource: ResourceType, amount: u32) -> Result<()> {
        let available = self.get(resource);
        if available < amount {
            return Err(GameError::funds(resource, amount, available));
        }
        Ok(())
    }

    /// Add `amount` of `resource`.
    pub fn credit(&mut self, resource: ResourceType, amount: u32) {
        let slot = self.slot_mut(resource);
        *slot = slot.saturating_add(amount);
    }

    /// Spend `amount` of `resource`, leaving the balance untouched on failure.
    pub fn try_debit(&mut self, resource: ResourceType, amount: u32) -> Result<()> {
        self.ensure(resource, amount)?;
        *self.slot_mut(resource) -= amount;
        Ok(())
    }

    /// Remove up to `amount`, stopping at zero. Returns what was actually removed.
    pub fn debit_floored(&mut self, resource: ResourceType, amount: u32) -> u32 {
        let slot = self.slot_mut(resource);
        let removed = amount.min(*slot);
        *slot -= removed;
        removed
    }

    /// Credit every resource in `other`.
    pub fn credit_all(&mut self, other: Resources) {
        for resource in ResourceType::ALL {
            self.credit(resource, other.get(resource));
        }
    }
}

impl std::ops::Add for Resources {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.credit_all(rhs);
        self
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Money, {} Science, {} Materials",
            self.money, self.science, self.materials
        )
    }
}

/// Influence discs: spent to claim sectors, returned on recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Influence {
    /// Discs available to place.
    pub current: u32,
    /// Total discs owned.
    pub max: u32,
}

impl Influence {
    /// A full supply of `max` discs.
    #[must_use]
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Take one disc off the track.
    pub fn spend(&mut self) -> Result<()> {
        if self.current == 0 {
            return Err(GameError::InsufficientInfluence);
        }
        self.current -= 1;
        Ok(())
    }

    /// Return one disc, never exceeding `max`.
    pub fn restore(&mut self) {
        self.current = (self.current + 1).min(self.max);
    }
}

/// Inventory pools that are not resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InventoryItem {
    /// Population cubes waiting to be placed.
    Population,
    /// Colony ships ready to settle a sector.
    ColonyShips,
    /// Starbases ready to be built.
    Starbases,
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Population => "population",
            Self::ColonyShips => "colony ships",
            Self::Starbases => "starbases",
        };
        f.write_str(name)
    }
}

/// A player's stock of population, colony ships and starbases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Population cubes.
    pub population: u32,
    /// Colony ships.
    pub colony_ships: u32,
    /// Starbases.
    pub starbases: u32,
}

impl Inventory {
    /// Count held of `item`.
    #[must_use]
    pub const fn get(&self, item: InventoryItem) -> u32 {
        match item {
            InventoryItem::Population => self.population,
            InventoryItem::ColonyShips => self.colony_ships,
            InventoryItem::Starbases => self.starbases,
        }
    }

    /// Fail with [`GameError::InsufficientInventory`] when `item` is exhausted.
    pub fn ensure(&self, item: InventoryItem) -> Result<()> {
        if self.get(item) == 0 {
            return Err(GameError::InsufficientInventory { item });
        }
        Ok(())
    }

    /// Take one `item`.
    pub fn take(&mut self, item: InventoryItem) -> Result<()> {
        self.ensure(item)?;
        match item {
            InventoryItem::Population => self.population -= 1,
            InventoryItem::ColonyShips => self.colony_ships -= 1,
            InventoryItem::Starbases => self.starbases -= 1,
        }
        Ok(())
    }

    /// Return `amount` of `item`.
    pub fn add(&mut self, item: InventoryItem, amount: u32) {
        let slot = match item {
            InventoryItem::Population => &mut self.population,
            InventoryItem::ColonyShips => &mut self.colony_ships,
            InventoryItem::Starbases => &mut self.starbases,
        };
        *slot = slot.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_debit_success() {
        let mut r = Resources::new(2, 3, 3);
        r.try_debit(ResourceType::Materials, 3).unwrap();
        assert_eq!(r, Resources::new(2, 3, 0));
    }

    #[test]
    fn test_try_debit_failure_leaves_balance() {
        let mut r = Resources::new(0, 3, 1);
        let err = r.try_debit(ResourceType::Money, 1).unwrap_err();
        assert_eq!(err, GameError::funds(ResourceType::Money, 1, 0));
        assert_eq!(r, Resources::new(0, 3, 1));
    }

    #[test]
    fn test_debit_floored() {
        let mut r = Resources::new(0, 0, 1);
        assert_eq!(r.debit_floored(ResourceType::Materials, 2), 1);
        assert_eq!(r.materials, 0);
    }

    #[test]
    fn test_add_resources() {
        let total = Resources::new(1, 1, 1) + Resources::new(3, 0, 2);
        assert_eq!(total, Resources::new(4, 1, 3));
    }

    #[test]
    fn test_influence_spend_and_restore_cap() {
        let mut inf = Influence::full(2);
        inf.restore();
        assert_eq!(inf.current, 2);
        inf.spend().unwrap();
        inf.spend().unwrap();
        assert_eq!(inf.spend(), Err(GameError::InsufficientInfluence));
        inf.restore();
        assert_eq!(inf.current, 1);
    }

    #[test]
    fn test_inventory_take() {
        let mut inv = Inventory {
            population: 1,
            colony_ships: 0,
            starbases: 4,
        };
        inv.take(InventoryItem::Population).unwrap();
        assert_eq!(inv.population, 0);
        inv.add(InventoryItem::Population, 3);
        assert_eq!(inv.population, 3);
        assert_eq!(
            inv.take(InventoryItem::ColonyShips),
            Err(GameError::InsufficientInventory {
                item: InventoryItem::ColonyShips
            })
        );
    }
}
