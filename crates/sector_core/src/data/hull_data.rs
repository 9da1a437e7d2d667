//! Stock hull designs that seed every player's blueprints.

use serde::{Deserialize, Serialize};

use crate::blueprint::ShipType;

/// Base statistics of one ship hull before any parts are installed.
///
/// # Example RON
///
/// ```ron
/// HullData(
///     ship_type: Cruiser,
///     slots: 4,
///     hull: 2,
///     initiative: 2,
///     movement: 2,
///     damage: 1,
///     cost: 3,
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullData {
    /// Ship class this hull defines.
    pub ship_type: ShipType,
    /// Number of part slots.
    pub slots: usize,
    /// Base hull points.
    pub hull: i32,
    /// Base initiative.
    pub initiative: i32,
    /// Base movement range.
    pub movement: i32,
    /// Base damage per hit (0 means the default of 1).
    #[serde(default)]
    pub damage: i32,
    /// Materials cost to build one ship.
    pub cost: u32,
}

/// The built-in hulls: Interceptor, Cruiser, Dreadnought.
#[must_use]
pub fn standard_hulls() -> Vec<HullData> {
    vec![
        HullData {
            ship_type: ShipType::Interceptor,
            slots: 2,
            hull: 1,
            initiative: 3,
            movement: 2,
            damage: 1,
            cost: 1,
        },
        HullData {
            ship_type: ShipType::Cruiser,
            slots: 4,
            hull: 2,
            initiative: 2,
            movement: 2,
            damage: 1,
            cost: 3,
        },
        HullData {
            ship_type: ShipType::Dreadnought,
            slots: 6,
            hull: 4,
            initiative: 1,
            movement: 1,
            damage: 1,
            cost: 6,
        },
    ]
}
