//! Property tests for axial hex math.

use proptest::prelude::*;
use sector_core::hex::{distance, is_neighbor, reachable_set, HexCoord};
use sector_test_utils::strategies::arb_hex_coord;

proptest! {
    #[test]
    fn test_distance_is_symmetric(a in arb_hex_coord(8), b in arb_hex_coord(8)) {
        prop_assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_zero_only_for_same_hex(a in arb_hex_coord(8), b in arb_hex_coord(8)) {
        prop_assert_eq!(distance(a, b) == 0, a == b);
    }

    #[test]
    fn test_triangle_inequality(
        a in arb_hex_coord(6),
        b in arb_hex_coord(6),
        c in arb_hex_coord(6),
    ) {
        prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c));
    }

    #[test]
    fn test_is_neighbor_agrees_with_distance(a in arb_hex_coord(5), b in arb_hex_coord(5)) {
        prop_assert_eq!(is_neighbor(a, b), distance(a, b) == 1);
    }

    #[test]
    fn test_every_neighbor_is_adjacent(a in arb_hex_coord(8)) {
        for n in a.neighbors() {
            prop_assert!(is_neighbor(a, n));
        }
    }

    #[test]
    fn test_ring_members_at_radius(a in arb_hex_coord(4), radius in 1u32..4) {
        let ring = a.ring(radius);
        prop_assert_eq!(ring.len(), 6 * radius as usize);
        for c in ring {
            prop_assert_eq!(distance(a, c), radius);
        }
    }

    #[test]
    fn test_reachable_set_matches_brute_force(origin in arb_hex_coord(3), range in 0u32..4) {
        let board: Vec<(usize, HexCoord)> = (-4..=4)
            .flat_map(|q| (-4..=4).map(move |r| HexCoord::new(q, r)))
            .enumerate()
            .collect();

        let reachable = reachable_set(origin, range, board.iter().copied());

        for (key, cost) in &reachable {
            let coord = board[*key].1;
            prop_assert_ne!(coord, origin);
            prop_assert_eq!(*cost, distance(origin, coord));
            prop_assert!(*cost >= 1 && *cost <= range);
        }
        let expected = board
            .iter()
            .filter(|(_, c)| *c != origin && distance(origin, *c) <= range)
            .count();
        prop_assert_eq!(reachable.len(), expected);
    }
}

#[test]
fn test_range_zero_reaches_nothing() {
    let board = HexCoord::ORIGIN
        .neighbors()
        .into_iter()
        .map(|c| (c, c))
        .collect::<Vec<_>>();
    assert!(reachable_set(HexCoord::ORIGIN, 0, board).is_empty());
}
