//! Simulation benchmarks for sector_core.
//!
//! Run with: `cargo bench -p sector_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sector_core::combat::{run_to_completion, stock_fleet_combatant, Battle, Combatant, Side};
use sector_core::data::Catalog;
use sector_core::dice::SeededDice;
use sector_core::fleet::ShipCounts;
use sector_core::hex::{reachable_set, HexCoord};
use sector_core::prelude::{apply_action, Action, GameState};

/// Full battles against the core guardian and a mirror match.
pub fn battle_benchmark(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let fleet = stock_fleet_combatant("Blue", Side::Player, &ShipCounts::new(6, 4, 2), &catalog);
    let gcds = Combatant::from_profile(&catalog.rules.hostiles.gcds);
    let mirror = stock_fleet_combatant("Red", Side::Enemy, &ShipCounts::new(6, 4, 2), &catalog);

    c.bench_function("battle_vs_gcds", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let battle = Battle::new(fleet.clone(), gcds.clone(), catalog.rules.combat);
            black_box(run_to_completion(battle, &mut SeededDice::new(seed)))
        });
    });

    c.bench_function("battle_mirror", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let battle = Battle::new(fleet.clone(), mirror.clone(), catalog.rules.combat);
            black_box(run_to_completion(battle, &mut SeededDice::new(seed)))
        });
    });
}

/// Reachable sets over a radius-6 board.
pub fn movement_benchmark(c: &mut Criterion) {
    let board: Vec<(usize, HexCoord)> = (0..=6)
        .flat_map(|radius| HexCoord::ORIGIN.ring(radius))
        .enumerate()
        .collect();

    c.bench_function("reachable_set_r3", |b| {
        b.iter(|| black_box(reachable_set(HexCoord::ORIGIN, 3, board.iter().copied())));
    });
}

/// Whole-state transitions, which clone the state each time.
pub fn action_benchmark(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let state = GameState::new_game(&catalog, 4).expect("four players");
    let mut dice = SeededDice::new(1);

    c.bench_function("end_turn", |b| {
        b.iter(|| black_box(apply_action(&state, &catalog, &mut dice, &Action::EndTurn)));
    });
}

criterion_group!(benches, battle_benchmark, movement_benchmark, action_benchmark);
criterion_main!(benches);
