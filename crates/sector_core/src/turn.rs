//! Turn order, phases and rounds.
//!
//! Every player acts once per phase. When the last player ends their turn
//! the phase advances; when Cleanup ends the round advances and income is
//! paid to everyone.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::economy::Resources;
use crate::error::Result;
use crate::event::GameEvent;
use crate::map::Hex;
use crate::state::{GameState, PlayerId};

/// The four phases of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players take actions.
    Action,
    /// Battles are fought.
    Combat,
    /// Upkeep.
    Maintenance,
    /// End of round tidy-up.
    Cleanup,
}

impl GamePhase {
    /// Phases in round order.
    pub const ALL: [Self; 4] = [Self::Action, Self::Combat, Self::Maintenance, Self::Cleanup];

    /// The phase after this one, wrapping Cleanup back to Action.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Action => Self::Combat,
            Self::Combat => Self::Maintenance,
            Self::Maintenance => Self::Cleanup,
            Self::Cleanup => Self::Action,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Action => "Action",
            Self::Combat => "Combat",
            Self::Maintenance => "Maintenance",
            Self::Cleanup => "Cleanup",
        };
        f.write_str(name)
    }
}

/// Income for one player: base rates plus sector production.
///
/// Each owned, populated sector adds its population once per matching
/// resource slot. Base rates themselves are left alone.
#[must_use]
pub fn compute_income(base: Resources, player: PlayerId, map: &[Hex]) -> Resources {
    let mut income = base;
    for hex in map
        .iter()
        .filter(|h| h.is_owned_by(player) && h.population > 0)
    {
        for resource in &hex.resources {
            income.credit(*resource, hex.population);
        }
    }
    income
}

/// Pass the turn to the next player, advancing phase and round as needed.
pub fn end_turn(state: &mut GameState) -> Result<Vec<GameEvent>> {
    let next = state.active_player + 1;
    if next < state.players.len() {
        state.active_player = next;
        let player = state.require_player(PlayerId::from_index(next))?;
        return Ok(vec![GameEvent::TurnPassed {
            player: player.id,
            name: player.name.clone(),
        }]);
    }

    state.active_player = 0;
    let wrapped = state.phase == GamePhase::Cleanup;
    state.phase = state.phase.next();
    if !wrapped {
        info!(round = state.round, phase = %state.phase, "Phase changed");
        return Ok(vec![GameEvent::PhaseChanged { phase: state.phase }]);
    }

    state.round += 1;
    let payouts: Vec<(PlayerId, Resources)> = state
        .players
        .iter()
        .map(|p| (p.id, compute_income(p.income, p.id, &state.map)))
        .collect();
    for (player, income) in &payouts {
        state.require_player_mut(*player)?.resources.credit_all(*income);
    }
    info!(round = state.round, players = payouts.len(), "Round started, income distributed");
    Ok(vec![GameEvent::RoundStarted {
        round: state.round,
        income: payouts,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::ResourceType::{Materials, Money, Science};
    use crate::hex::HexCoord;
    use crate::map::Terrain;

    #[test]
    fn test_phase_cycle() {
        let mut phase = GamePhase::Action;
        for expected in [
            GamePhase::Combat,
            GamePhase::Maintenance,
            GamePhase::Cleanup,
            GamePhase::Action,
        ] {
            phase = phase.next();
            assert_eq!(phase, expected);
        }
    }

    #[test]
    fn test_income_counts_population_per_slot() {
        let owner = PlayerId(0);
        let mut home = Hex::new("h", "Home", HexCoord::new(0, 2), Terrain::Start, vec![Money, Science, Materials]);
        home.owner = Some(owner);
        home.population = 3;
        let mut mine = Hex::new("m", "Mine", HexCoord::new(1, -1), Terrain::Inner, vec![Materials, Materials]);
        mine.owner = Some(owner);
        mine.population = 1;
        let mut empty = Hex::new("e", "Empty", HexCoord::new(1, 0), Terrain::Inner, vec![Money]);
        empty.owner = Some(owner);
        let mut foreign = Hex::new("f", "Foreign", HexCoord::new(0, 1), Terrain::Inner, vec![Science]);
        foreign.owner = Some(PlayerId(1));
        foreign.population = 1;

        let income = compute_income(Resources::new(1, 1, 1), owner, &[home, mine, empty, foreign]);
        assert_eq!(income, Resources::new(4, 4, 6));
    }
}
