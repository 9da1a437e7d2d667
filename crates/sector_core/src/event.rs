//! Notifications emitted by successful actions.
//!
//! Events describe what changed; presentation layers turn them into toasts,
//! log panes or sounds. [`GameEvent::message`] gives a short default text.

use serde::{Deserialize, Serialize};

use crate::blueprint::{ShipType, UpgradeStat};
use crate::combat::{CombatLogEntry, CombatOutcome};
use crate::data::PartId;
use crate::economy::Resources;
use crate::fleet::{MovePlan, ShipCounts};
use crate::map::HexId;
use crate::state::PlayerId;
use crate::tech::TechId;
use crate::turn::GamePhase;

/// Something that happened as the result of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was set up.
    GameStarted {
        /// Number of seated players.
        player_count: usize,
    },
    /// Exploration revealed sectors.
    SectorsRevealed {
        /// Sector explored from.
        from: HexId,
        /// Newly revealed sectors.
        revealed: Vec<HexId>,
    },
    /// Exploration found nothing new.
    NothingToReveal {
        /// Sector explored from.
        from: HexId,
    },
    /// A sector changed hands.
    SectorClaimed {
        /// New owner.
        player: PlayerId,
        /// Claimed sector.
        hex: HexId,
    },
    /// Influence pulled back from a sector.
    InfluenceRecalled {
        /// Former owner.
        player: PlayerId,
        /// Released sector.
        hex: HexId,
        /// Population cubes returned to inventory.
        population_returned: u32,
        /// Whether a starbase went back to inventory.
        starbase_returned: bool,
    },
    /// A starbase was constructed.
    StarbaseBuilt {
        /// Location.
        hex: HexId,
    },
    /// A colony ship settled population on a sector.
    Colonized {
        /// Location.
        hex: HexId,
        /// Population after settling.
        population: u32,
    },
    /// A technology was unlocked.
    TechResearched {
        /// Tech id.
        tech: TechId,
        /// Display name.
        name: String,
        /// Science spent.
        cost: u32,
    },
    /// The tech tree was reset.
    TechsReset {
        /// Science refunded.
        refund: u32,
    },
    /// A blueprint base stat went up.
    BlueprintUpgraded {
        /// Blueprint.
        ship_type: ShipType,
        /// Stat raised.
        stat: UpgradeStat,
        /// Materials spent.
        cost: u32,
    },
    /// A part was fitted.
    PartInstalled {
        /// Blueprint.
        ship_type: ShipType,
        /// Slot index.
        slot: usize,
        /// Part fitted.
        part: PartId,
        /// Display name of the part.
        name: String,
        /// Part that was overwritten, if any.
        replaced: Option<PartId>,
    },
    /// A slot was emptied.
    PartUninstalled {
        /// Blueprint.
        ship_type: ShipType,
        /// Slot index.
        slot: usize,
        /// Part removed, if the slot was occupied.
        removed: Option<PartId>,
    },
    /// Ships and colony ships were built.
    ProductionComplete {
        /// Shipyard.
        hex: HexId,
        /// Warships built.
        ships: ShipCounts,
        /// Colony ships built.
        colony_ships: u32,
        /// Materials spent.
        cost: u32,
    },
    /// Answer to a move query.
    MovePlanned {
        /// Origin of the move.
        source: HexId,
        /// Range and reachable sectors.
        plan: MovePlan,
    },
    /// Ships relocated.
    FleetMoved {
        /// Origin.
        source: HexId,
        /// Destination.
        dest: HexId,
        /// Destination display name.
        hex_name: String,
        /// Ships moved.
        ships: ShipCounts,
    },
    /// The destination holds hostiles.
    HostilesDetected {
        /// Destination.
        hex: HexId,
    },
    /// The destination belongs to another player.
    EnteredTerritory {
        /// Destination.
        hex: HexId,
        /// Its owner.
        owner: PlayerId,
        /// Owner's display name.
        owner_name: String,
    },
    /// One line of a battle.
    CombatLog(CombatLogEntry),
    /// A battle finished.
    CombatEnded {
        /// Contested sector.
        hex: HexId,
        /// Result for the acting player.
        outcome: CombatOutcome,
        /// Reputation drawn on victory.
        reputation: Option<u32>,
    },
    /// The next player is up.
    TurnPassed {
        /// Newly active player.
        player: PlayerId,
        /// Display name.
        name: String,
    },
    /// The phase advanced within a round.
    PhaseChanged {
        /// New phase.
        phase: GamePhase,
    },
    /// A new round began and income was paid.
    RoundStarted {
        /// New round number.
        round: u32,
        /// Income credited to each player.
        income: Vec<(PlayerId, Resources)>,
    },
}

impl GameEvent {
    /// Short human-readable description.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::GameStarted { player_count } => format!("Game started with {player_count} players."),
            Self::SectorsRevealed { revealed, .. } => {
                format!("Scanners revealed {} sectors.", revealed.len())
            }
            Self::NothingToReveal { .. } => "No unknown sectors adjacent to this position.".to_string(),
            Self::SectorClaimed { .. } => "Sector Claimed (+1 VP)".to_string(),
            Self::InfluenceRecalled { .. } => "Influence recalled.".to_string(),
            Self::StarbaseBuilt { .. } => "Starbase constructed.".to_string(),
            Self::Colonized { .. } => "Colonization successful.".to_string(),
            Self::TechResearched { name, .. } => format!("Research Complete: {name}"),
            Self::TechsReset { refund } => format!("Research reset. {refund} Science refunded."),
            Self::BlueprintUpgraded { .. } => "Blueprint updated.".to_string(),
            Self::PartInstalled { name, .. } => format!("{name} installed."),
            Self::PartUninstalled { .. } => "Module uninstalled.".to_string(),
            Self::ProductionComplete { .. } => "Production complete.".to_string(),
            Self::MovePlanned { plan, .. } => {
                if plan.reachable.is_empty() {
                    "No reachable sectors within range.".to_string()
                } else {
                    format!("Select destination (Range: {})", plan.range)
                }
            }
            Self::FleetMoved { hex_name, .. } => format!("Fleet deployed to {hex_name}."),
            Self::HostilesDetected { .. } => "Hostiles detected. Engage Combat?".to_string(),
            Self::EnteredTerritory { owner_name, .. } => format!("Entering {owner_name}'s territory."),
            Self::CombatLog(entry) => entry.message.clone(),
            Self::CombatEnded { outcome, .. } => match outcome {
                CombatOutcome::Victory => "Victory.".to_string(),
                CombatOutcome::Defeat => "Defeat.".to_string(),
            },
            Self::TurnPassed { name, .. } => format!("Turn: {name}"),
            Self::PhaseChanged { phase } => format!("Phase Changed: {phase}"),
            Self::RoundStarted { round, .. } => format!("Round {round} Begun. Income distributed."),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let event = GameEvent::SectorsRevealed {
            from: HexId::new("start1"),
            revealed: vec![HexId::new("i6"), HexId::new("i5")],
        };
        assert_eq!(event.to_string(), "Scanners revealed 2 sectors.");
        let event = GameEvent::PhaseChanged {
            phase: GamePhase::Combat,
        };
        assert_eq!(event.message(), "Phase Changed: Combat");
        let event = GameEvent::MovePlanned {
            source: HexId::new("start1"),
            plan: MovePlan {
                range: 2,
                reachable: vec![(HexId::new("i6"), 1)],
            },
        };
        assert_eq!(event.message(), "Select destination (Range: 2)");
    }
}
