//! Proptest strategies for core value types.

use proptest::prelude::*;

use sector_core::blueprint::{ShipType, UpgradeStat};
use sector_core::economy::Resources;
use sector_core::fleet::ShipCounts;
use sector_core::hex::HexCoord;

/// Coordinates within `radius` of the origin (in each axial component).
pub fn arb_hex_coord(radius: i32) -> impl Strategy<Value = HexCoord> {
    (-radius..=radius, -radius..=radius).prop_map(|(q, r)| HexCoord::new(q, r))
}

/// A small fleet composition, possibly empty.
pub fn arb_ship_counts(max_each: u32) -> impl Strategy<Value = ShipCounts> {
    (0..=max_each, 0..=max_each, 0..=max_each)
        .prop_map(|(i, c, d)| ShipCounts::new(i, c, d))
}

/// Resource balances up to `max` of each.
pub fn arb_resources(max: u32) -> impl Strategy<Value = Resources> {
    (0..=max, 0..=max, 0..=max).prop_map(|(m, s, mat)| Resources::new(m, s, mat))
}

/// Any ship type.
pub fn arb_ship_type() -> impl Strategy<Value = ShipType> {
    prop_oneof![
        Just(ShipType::Interceptor),
        Just(ShipType::Cruiser),
        Just(ShipType::Dreadnought),
    ]
}

/// Any upgradable base stat.
pub fn arb_upgrade_stat() -> impl Strategy<Value = UpgradeStat> {
    prop_oneof![
        Just(UpgradeStat::Hull),
        Just(UpgradeStat::Initiative),
        Just(UpgradeStat::Movement),
    ]
}
