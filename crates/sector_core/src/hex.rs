//! Axial hex-grid geometry.
//!
//! Sectors are addressed with axial coordinates `(q, r)`; the implicit third
//! cube coordinate is `s = -q - r`. All math is integer-only.
//!
//! ```text
//!        ( 0,-1) ( 1,-1)
//!    (-1, 0) ( 0, 0) ( 1, 0)
//!        (-1, 1) ( 0, 1)
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A position on the hex grid in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    /// Axial q (column).
    pub q: i32,
    /// Axial r (row).
    pub r: i32,
}

/// The six axial unit directions, clockwise from "up".
pub const DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(0, -1),
    HexCoord::new(1, -1),
    HexCoord::new(1, 0),
    HexCoord::new(0, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(-1, 0),
];

impl HexCoord {
    /// The grid origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Implicit cube coordinate `s`.
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance to `other`.
    #[must_use]
    pub const fn distance(self, other: Self) -> u32 {
        distance(self, other)
    }

    /// Whether `other` shares an edge with this hex.
    #[must_use]
    pub const fn is_neighbor(self, other: Self) -> bool {
        is_neighbor(self, other)
    }

    /// The six adjacent coordinates, in [`DIRECTIONS`] order.
    #[must_use]
    pub fn neighbors(self) -> [Self; 6] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Every coordinate at exactly `radius` steps, walking the ring clockwise.
    ///
    /// Radius 0 yields the hex itself.
    #[must_use]
    pub fn ring(self, radius: u32) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }
        let steps = radius as i32;
        let mut results = Vec::with_capacity(6 * radius as usize);
        // Start at the south-west corner and walk each side.
        let mut cursor = self + HexCoord::new(DIRECTIONS[4].q * steps, DIRECTIONS[4].r * steps);
        for direction in DIRECTIONS {
            for _ in 0..radius {
                results.push(cursor);
                cursor = cursor + direction;
            }
        }
        results
    }
}

impl Add for HexCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Axial hex distance: `(|dq| + |dr| + |dq + dr|) / 2`.
#[must_use]
pub const fn distance(a: HexCoord, b: HexCoord) -> u32 {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
}

/// Adjacency test straight from the coordinate deltas.
///
/// Agrees with `distance(a, b) == 1` for every pair.
#[must_use]
pub const fn is_neighbor(a: HexCoord, b: HexCoord) -> bool {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    dq.abs() <= 1 && dr.abs() <= 1 && (dq + dr).abs() <= 1 && !(dq == 0 && dr == 0)
}

/// Every candidate other than `origin` within `range` steps, tagged with its distance.
///
/// The distance doubles as the movement cost of reaching that hex. Candidates
/// sitting on the origin coordinate are skipped; range 0 always yields an
/// empty set. Output order follows the input order.
pub fn reachable_set<K, I>(origin: HexCoord, range: u32, candidates: I) -> Vec<(K, u32)>
where
    I: IntoIterator<Item = (K, HexCoord)>,
{
    if range == 0 {
        return Vec::new();
    }
    candidates
        .into_iter()
        .filter(|(_, coord)| *coord != origin)
        .filter_map(|(key, coord)| {
            let cost = distance(origin, coord);
            (cost <= range).then_some((key, cost))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(q: i32, r: i32) -> HexCoord {
        HexCoord::new(q, r)
    }

    #[test]
    fn test_distance_basic() {
        assert_eq!(distance(hex(0, 0), hex(0, 0)), 0);
        assert_eq!(distance(hex(0, 0), hex(1, 0)), 1);
        assert_eq!(distance(hex(0, 0), hex(0, 2)), 2);
        assert_eq!(distance(hex(0, 2), hex(0, -2)), 4);
        assert_eq!(distance(hex(2, -1), hex(-2, 1)), 4);
        assert_eq!(distance(hex(1, -1), hex(-1, 1)), 2);
    }

    #[test]
    fn test_neighbors_are_distance_one() {
        let center = hex(3, -2);
        for n in center.neighbors() {
            assert!(is_neighbor(center, n));
            assert_eq!(distance(center, n), 1);
        }
        assert!(!is_neighbor(center, center));
        // Diagonal along the "wrong" axis is two steps away.
        assert!(!is_neighbor(hex(0, 0), hex(1, 1)));
        assert_eq!(distance(hex(0, 0), hex(1, 1)), 2);
    }

    #[test]
    fn test_ring_sizes() {
        assert_eq!(HexCoord::ORIGIN.ring(0), vec![HexCoord::ORIGIN]);
        let ring1 = HexCoord::ORIGIN.ring(1);
        assert_eq!(ring1.len(), 6);
        assert!(ring1.iter().all(|c| c.distance(HexCoord::ORIGIN) == 1));
        let ring2 = hex(1, 1).ring(2);
        assert_eq!(ring2.len(), 12);
        assert!(ring2.iter().all(|c| c.distance(hex(1, 1)) == 2));
    }

    #[test]
    fn test_reachable_set_range_zero_empty() {
        let hexes = vec![("a", hex(0, 0)), ("b", hex(1, 0))];
        let reach = reachable_set(hex(0, 0), 0, hexes);
        assert!(reach.is_empty());
    }

    #[test]
    fn test_reachable_set_excludes_origin_and_far_hexes() {
        let hexes = vec![
            ("origin", hex(0, 0)),
            ("near", hex(1, 0)),
            ("two", hex(0, 2)),
            ("three", hex(3, 0)),
        ];
        let reach = reachable_set(hex(0, 0), 2, hexes);
        assert_eq!(reach, vec![("near", 1), ("two", 2)]);
    }
}
