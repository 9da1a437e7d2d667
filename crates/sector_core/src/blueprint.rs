//! Ship blueprints: base stats plus installed parts.
//!
//! Each player owns one [`ShipBlueprint`] per [`ShipType`]. The effective
//! stats of a ship are always derived from its blueprint, never stored, so a
//! part swap immediately affects every ship of that class.

use serde::{Deserialize, Serialize};

use crate::data::{Catalog, HullData, PartId, ShipPart, Special, UpgradeCosts};
use crate::economy::{ResourceType, Resources};
use crate::error::{GameError, Result};
use crate::tech::TechTree;

/// Ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipType {
    /// Small, fast, two slots.
    Interceptor,
    /// Medium, four slots.
    Cruiser,
    /// Large, slow, six slots.
    Dreadnought,
}

impl ShipType {
    /// All ship types in display order.
    pub const ALL: [Self; 3] = [Self::Interceptor, Self::Cruiser, Self::Dreadnought];
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Interceptor => "Interceptor",
            Self::Cruiser => "Cruiser",
            Self::Dreadnought => "Dreadnought",
        };
        f.write_str(name)
    }
}

/// Base stats that can be bought up with Materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeStat {
    /// +1 hull.
    Hull,
    /// +1 initiative.
    Initiative,
    /// +1 movement.
    Movement,
}

impl std::fmt::Display for UpgradeStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hull => "hull",
            Self::Initiative => "initiative",
            Self::Movement => "movement",
        };
        f.write_str(name)
    }
}

/// Effective per-ship statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShipStats {
    /// Hull points.
    pub hull: i32,
    /// Initiative.
    pub initiative: i32,
    /// Movement range.
    pub movement: i32,
    /// Damage per hit.
    pub damage: i32,
}

/// Combat specials present on a ship or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Specials {
    /// Absorbs damage from non-ion attackers.
    pub shields: bool,
    /// Bypasses shields.
    pub ion: bool,
    /// +1 to hit.
    pub missiles: bool,
    /// Plasma weaponry fitted.
    pub plasma: bool,
}

impl Specials {
    /// Set the flag for `special`.
    pub fn insert(&mut self, special: Special) {
        match special {
            Special::Shield => self.shields = true,
            Special::Ion => self.ion = true,
            Special::Missile => self.missiles = true,
            Special::Plasma => self.plasma = true,
        }
    }

    /// Logical OR of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            shields: self.shields || other.shields,
            ion: self.ion || other.ion,
            missiles: self.missiles || other.missiles,
            plasma: self.plasma || other.plasma,
        }
    }
}

/// A player's design for one ship class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipBlueprint {
    /// Ship class.
    pub ship_type: ShipType,
    /// Installed part per slot; the length is the slot count.
    pub slots: Vec<Option<PartId>>,
    /// Base hull.
    pub base_hull: i32,
    /// Base initiative.
    pub base_initiative: i32,
    /// Base movement.
    pub base_movement: i32,
    /// Base damage (0 reads as 1).
    pub base_damage: i32,
    /// Materials cost per ship built.
    pub cost: u32,
}

impl ShipBlueprint {
    /// A blank blueprint from a stock hull.
    #[must_use]
    pub fn from_hull(hull: &HullData) -> Self {
        Self {
            ship_type: hull.ship_type,
            slots: vec![None; hull.slots],
            base_hull: hull.hull,
            base_initiative: hull.initiative,
            base_movement: hull.movement,
            base_damage: hull.damage,
            cost: hull.cost,
        }
    }

    /// Number of part slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Installed parts resolved against the catalog.
    ///
    /// Part ids are checked on install, so every installed id resolves for
    /// the catalog the game was started with.
    pub fn installed_parts<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a ShipPart> {
        self.slots
            .iter()
            .flatten()
            .filter_map(move |id| catalog.part(id))
    }

    /// Base stats plus every installed part's deltas.
    #[must_use]
    pub fn compute_stats(&self, catalog: &Catalog) -> ShipStats {
        let base_damage = if self.base_damage == 0 {
            1
        } else {
            self.base_damage
        };
        self.installed_parts(catalog).fold(
            ShipStats {
                hull: self.base_hull,
                initiative: self.base_initiative,
                movement: self.base_movement,
                damage: base_damage,
            },
            |mut stats, part| {
                stats.hull += part.stats.hull;
                stats.initiative += part.stats.initiative;
                stats.movement += part.stats.movement;
                stats.damage += part.stats.damage;
                stats
            },
        )
    }

    /// Union of specials on installed parts.
    #[must_use]
    pub fn compute_specials(&self, catalog: &Catalog) -> Specials {
        let mut specials = Specials::default();
        for special in self.installed_parts(catalog).filter_map(|p| p.special) {
            specials.insert(special);
        }
        specials
    }

    /// Buy +1 on a base stat.
    ///
    /// Returns the Materials spent.
    pub fn upgrade_base(
        &mut self,
        stat: UpgradeStat,
        costs: &UpgradeCosts,
        balance: &mut Resources,
    ) -> Result<u32> {
        let cost = costs.cost_of(stat);
        balance.try_debit(ResourceType::Materials, cost)?;
        match stat {
            UpgradeStat::Hull => self.base_hull += 1,
            UpgradeStat::Initiative => self.base_initiative += 1,
            UpgradeStat::Movement => self.base_movement += 1,
        }
        Ok(cost)
    }

    /// Fail with [`GameError::InvalidSlot`] unless `slot` exists on this hull.
    pub fn check_slot(&self, slot: usize) -> Result<()> {
        if slot >= self.slots.len() {
            return Err(GameError::InvalidSlot {
                ship_type: self.ship_type,
                slot,
                slots: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Install `part` into `slot`, replacing whatever was there.
    ///
    /// The replaced part is not refunded. Returns the replaced part id.
    pub fn install_part(
        &mut self,
        slot: usize,
        part: &ShipPart,
        techs: &TechTree,
        balance: &mut Resources,
    ) -> Result<Option<PartId>> {
        self.check_slot(slot)?;
        if let Some(tech) = &part.required_tech {
            if !techs.is_unlocked(tech) {
                return Err(GameError::PartLocked {
                    part: part.id.clone(),
                    tech: tech.clone(),
                });
            }
        }
        balance.try_debit(ResourceType::Materials, part.cost)?;
        Ok(self.slots[slot].replace(part.id.clone()))
    }

    /// Empty `slot`. No refund. Returns the removed part id, if any.
    pub fn uninstall_part(&mut self, slot: usize) -> Result<Option<PartId>> {
        self.check_slot(slot)?;
        Ok(self.slots[slot].take())
    }
}

/// One blueprint per ship type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blueprints {
    interceptor: ShipBlueprint,
    cruiser: ShipBlueprint,
    dreadnought: ShipBlueprint,
}

impl Blueprints {
    /// Fresh blueprints from the catalog's stock hulls.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidState`] if a ship type has no hull.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        let build = |ship_type: ShipType| {
            catalog
                .hull(ship_type)
                .map(ShipBlueprint::from_hull)
                .ok_or_else(|| GameError::InvalidState(format!("No hull defined for {ship_type}")))
        };
        Ok(Self {
            interceptor: build(ShipType::Interceptor)?,
            cruiser: build(ShipType::Cruiser)?,
            dreadnought: build(ShipType::Dreadnought)?,
        })
    }

    /// Blueprint for `ship_type`.
    #[must_use]
    pub const fn get(&self, ship_type: ShipType) -> &ShipBlueprint {
        match ship_type {
            ShipType::Interceptor => &self.interceptor,
            ShipType::Cruiser => &self.cruiser,
            ShipType::Dreadnought => &self.dreadnought,
        }
    }

    /// Mutable blueprint for `ship_type`.
    pub fn get_mut(&mut self, ship_type: ShipType) -> &mut ShipBlueprint {
        match ship_type {
            ShipType::Interceptor => &mut self.interceptor,
            ShipType::Cruiser => &mut self.cruiser,
            ShipType::Dreadnought => &mut self.dreadnought,
        }
    }

    /// All blueprints in [`ShipType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &ShipBlueprint> {
        [&self.interceptor, &self.cruiser, &self.dreadnought].into_iter()
    }
}
