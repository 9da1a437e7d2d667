//! Sector map: hex records and the fixed starting layout.
//!
//! A new game always begins with the galactic core at the origin, the six
//! inner sectors around it (unrevealed, unowned) and one home sector per
//! player on a preset slot two steps out.

use serde::{Deserialize, Serialize};

use crate::economy::ResourceType;
use crate::hex::HexCoord;
use crate::state::PlayerId;

/// Unique identifier for a hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexId(String);

impl HexId {
    /// Create a hex ID.
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

impl From<&str> for HexId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for HexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terrain class of a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// The galactic center.
    Core,
    /// Radius-1 ring.
    Inner,
    /// Radius-2 ring.
    Middle,
    /// Everything further out.
    Outer,
    /// A player's home sector.
    Start,
}

/// Structure standing on a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    /// Enables ship construction; returned to inventory on recall.
    Starbase,
    /// Ancient monument.
    Monolith,
}

/// One sector of the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    /// Axial position.
    pub coord: HexCoord,
    /// Unique id.
    pub id: HexId,
    /// Display name.
    pub name: String,
    /// Terrain class.
    pub terrain: Terrain,
    /// Resource slots in order. Also the population cap.
    pub resources: Vec<ResourceType>,
    /// Controlling player.
    pub owner: Option<PlayerId>,
    /// Ancient guardians present.
    pub has_enemy: bool,
    /// The core defence system is present.
    pub is_gcds: bool,
    /// An artifact lies here.
    pub has_artifact: bool,
    /// Visible to players.
    pub revealed: bool,
    /// Structure on the sector.
    pub structure: Option<Structure>,
    /// Population cubes placed, at most `resources.len()`.
    pub population: u32,
    /// Flavour text.
    pub description: Option<String>,
}

impl Hex {
    /// An empty, unowned, unrevealed sector.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coord: HexCoord,
        terrain: Terrain,
        resources: Vec<ResourceType>,
    ) -> Self {
        Self {
            coord,
            id: HexId::new(id),
            name: name.into(),
            terrain,
            resources,
            owner: None,
            has_enemy: false,
            is_gcds: false,
            has_artifact: false,
            revealed: false,
            structure: None,
            population: 0,
            description: None,
        }
    }

    /// Whether a static hostile occupies the sector.
    #[must_use]
    pub const fn has_hostiles(&self) -> bool {
        self.has_enemy || self.is_gcds
    }

    /// Population cap (one cube per resource slot).
    #[must_use]
    pub fn population_capacity(&self) -> u32 {
        u32::try_from(self.resources.len()).unwrap_or(u32::MAX)
    }

    /// Whether another population cube fits.
    #[must_use]
    pub fn has_free_slot(&self) -> bool {
        self.population < self.population_capacity()
    }

    /// Whether `player` controls this sector.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Whether ships can be built here.
    #[must_use]
    pub fn is_shipyard(&self) -> bool {
        self.structure == Some(Structure::Starbase) || self.terrain == Terrain::Start
    }
}

/// Preset home-sector positions, taken in seat order.
pub const START_SLOTS: [HexCoord; 4] = [
    HexCoord::new(0, 2),
    HexCoord::new(0, -2),
    HexCoord::new(2, -1),
    HexCoord::new(-2, 1),
];

/// The galactic core plus the inner ring, as every game begins.
#[must_use]
pub fn starting_map() -> Vec<Hex> {
    use ResourceType::{Materials, Money, Science};

    let mut core = Hex::new("001", "Galactic Center", HexCoord::ORIGIN, Terrain::Core, Vec::new());
    core.has_enemy = true;
    core.is_gcds = true;
    core.has_artifact = true;
    core.description = Some("Guarded by the G.C.D.S.".to_string());

    let inner = [
        ("i1", "Alpha Centauri", HexCoord::new(1, 0), vec![Money, Materials]),
        ("i2", "Barnard Star", HexCoord::new(1, -1), vec![Materials, Materials]),
        ("i3", "Luyten 726-8", HexCoord::new(0, -1), vec![Science, Science]),
        ("i4", "Wolf 359", HexCoord::new(-1, 0), vec![Money]),
        ("i5", "Ross 128", HexCoord::new(-1, 1), vec![Science, Materials]),
        ("i6", "Epsilon Eridani", HexCoord::new(0, 1), vec![Money, Science, Materials]),
    ];

    std::iter::once(core)
        .chain(
            inner
                .into_iter()
                .map(|(id, name, coord, resources)| Hex::new(id, name, coord, Terrain::Inner, resources)),
        )
        .collect()
}

/// Home sector for the player in `seat`, or `None` past the last slot.
#[must_use]
pub fn start_hex(player: PlayerId, player_name: &str, population: u32) -> Option<Hex> {
    let coord = *START_SLOTS.get(player.index())?;
    let mut hex = Hex::new(
        format!("start{}", player.index() + 1),
        format!("{player_name} Base"),
        coord,
        Terrain::Start,
        vec![
            ResourceType::Money,
            ResourceType::Science,
            ResourceType::Materials,
        ],
    );
    hex.owner = Some(player);
    hex.revealed = true;
    hex.structure = Some(Structure::Starbase);
    hex.population = population.min(hex.population_capacity());
    hex.description = Some("Home Base".to_string());
    Some(hex)
}
