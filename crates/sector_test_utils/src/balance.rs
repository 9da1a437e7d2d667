//! Balance testing utilities for headless battles.
//!
//! Runs many seeded battles between fleet compositions to see how a
//! matchup plays out across dice luck.

use sector_core::combat::{
    run_to_completion, stock_fleet_combatant, Battle, CombatOutcome, Combatant, Side,
};
use sector_core::data::Catalog;
use sector_core::dice::SeededDice;
use sector_core::fleet::ShipCounts;
use tracing::debug;

/// Result of one simulated battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleResult {
    /// How it ended for the player side.
    pub outcome: CombatOutcome,
    /// Rounds fought.
    pub rounds: u32,
    /// Player hull left (may be negative).
    pub remaining_hull: i32,
}

/// Statistics for a set of battles.
#[derive(Debug, Clone, Default)]
pub struct BattleStats {
    /// Total battles run.
    pub total_battles: u32,
    /// Player victories.
    pub victories: u32,
    /// Player defeats.
    pub defeats: u32,
    /// Average rounds to resolution.
    pub avg_rounds: f64,
}

impl BattleStats {
    /// Fold a set of results into statistics.
    #[must_use]
    pub fn from_results(results: &[BattleResult]) -> Self {
        let total_battles = u32::try_from(results.len()).unwrap_or(u32::MAX);
        let victories = u32::try_from(
            results
                .iter()
                .filter(|r| r.outcome == CombatOutcome::Victory)
                .count(),
        )
        .unwrap_or(u32::MAX);
        let rounds: u64 = results.iter().map(|r| u64::from(r.rounds)).sum();
        #[allow(clippy::cast_precision_loss)]
        let avg_rounds = if results.is_empty() {
            0.0
        } else {
            rounds as f64 / results.len() as f64
        };
        Self {
            total_battles,
            victories,
            defeats: total_battles - victories,
            avg_rounds,
        }
    }

    /// Player win rate (0.0 to 1.0).
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.5;
        }
        f64::from(self.victories) / f64::from(self.total_battles)
    }

    /// Check if the matchup is balanced (within acceptable range).
    #[must_use]
    pub fn is_balanced(&self, min_rate: f64, max_rate: f64) -> bool {
        let rate = self.win_rate();
        rate >= min_rate && rate <= max_rate
    }
}

/// Fight one battle with the given seed.
#[must_use]
pub fn simulate_battle(player: &Combatant, enemy: &Combatant, catalog: &Catalog, seed: u64) -> BattleResult {
    let mut dice = SeededDice::new(seed);
    let battle = Battle::new(player.clone(), enemy.clone(), catalog.rules.combat);
    let (finished, _) = run_to_completion(battle, &mut dice);
    BattleResult {
        outcome: finished.outcome().unwrap_or(CombatOutcome::Defeat),
        rounds: finished.round(),
        remaining_hull: finished.player().hull,
    }
}

/// Fight `battles` battles with seeds `0..battles`.
#[must_use]
pub fn sample_battles(player: &Combatant, enemy: &Combatant, catalog: &Catalog, battles: u32) -> BattleStats {
    let results: Vec<BattleResult> = (0..u64::from(battles))
        .map(|seed| simulate_battle(player, enemy, catalog, seed))
        .collect();
    let stats = BattleStats::from_results(&results);
    debug!(
        player = %player.name,
        enemy = %enemy.name,
        battles,
        victories = stats.victories,
        avg_rounds = stats.avg_rounds,
        "Battles sampled"
    );
    stats
}

/// Stock fleet against stock fleet.
#[must_use]
pub fn sample_fleet_matchup(
    ours: &ShipCounts,
    theirs: &ShipCounts,
    catalog: &Catalog,
    battles: u32,
) -> BattleStats {
    let player = stock_fleet_combatant("Player", Side::Player, ours, catalog);
    let enemy = stock_fleet_combatant("Enemy", Side::Enemy, theirs, catalog);
    sample_battles(&player, &enemy, catalog, battles)
}

/// Stock fleet against the ancient guardian.
#[must_use]
pub fn sample_against_guardian(ours: &ShipCounts, catalog: &Catalog, battles: u32) -> BattleStats {
    let player = stock_fleet_combatant("Player", Side::Player, ours, catalog);
    let guardian = Combatant::from_profile(&catalog.rules.hostiles.guardian);
    sample_battles(&player, &guardian, catalog, battles)
}
