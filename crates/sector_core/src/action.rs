//! The closed set of player actions and their dispatcher.
//!
//! [`apply_action`] is the single transition function of the game:
//! `(&GameState, Action) -> Result<(GameState, Vec<GameEvent>)>`. It works on
//! a clone, so a rejected action never leaves partial changes behind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blueprint::{ShipType, UpgradeStat};
use crate::combat::resolve_combat;
use crate::data::{Catalog, PartId};
use crate::dice::Dice;
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::fleet::{execute_move, plan_move, queue_build, ShipCounts};
use crate::map::HexId;
use crate::sector::{build_starbase, claim_sector, colonize, explore, recall_influence};
use crate::state::GameState;
use crate::tech::TechId;
use crate::turn::end_turn;

/// Everything a player can ask the game to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the whole game with a fresh one.
    InitGame {
        /// 1 to 4.
        player_count: usize,
    },
    /// Reveal sectors around a controlled one.
    Explore {
        /// Controlled sector to scan from.
        hex: HexId,
    },
    /// Place an influence disc.
    ClaimSector {
        /// Target sector.
        hex: HexId,
    },
    /// Take an influence disc back.
    RecallInfluence {
        /// Controlled sector.
        hex: HexId,
    },
    /// Build a starbase.
    BuildStarbase {
        /// Controlled sector.
        hex: HexId,
    },
    /// Settle population with a colony ship.
    Colonize {
        /// Controlled sector.
        hex: HexId,
    },
    /// Unlock a technology.
    ResearchTech {
        /// Tech to unlock.
        tech: TechId,
    },
    /// Refund all research and start the tree over.
    ResetTechs,
    /// Raise a blueprint base stat.
    UpgradeBlueprint {
        /// Blueprint.
        ship_type: ShipType,
        /// Stat to raise.
        stat: UpgradeStat,
    },
    /// Fit a part into a blueprint slot.
    InstallPart {
        /// Blueprint.
        ship_type: ShipType,
        /// Slot index.
        slot: usize,
        /// Part to fit.
        part: PartId,
    },
    /// Empty a blueprint slot.
    UninstallPart {
        /// Blueprint.
        ship_type: ShipType,
        /// Slot index.
        slot: usize,
    },
    /// Build warships and colony ships at a shipyard.
    QueueBuild {
        /// Warships to build.
        ships: ShipCounts,
        /// Colony ships to build.
        colony_ships: u32,
        /// Shipyard sector.
        hex: HexId,
    },
    /// Ask how far a selection of ships can travel. Changes nothing.
    PlanMove {
        /// Ships selected.
        ships: ShipCounts,
        /// Where they are.
        source: HexId,
    },
    /// Move ships.
    ExecuteMove {
        /// Where they are.
        source: HexId,
        /// Where they go.
        dest: HexId,
        /// Ships to move.
        ships: ShipCounts,
    },
    /// Fight whatever is hostile at a sector.
    ResolveCombat {
        /// Contested sector.
        hex: HexId,
    },
    /// Pass to the next player.
    EndTurn,
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InitGame { .. } => "InitGame",
            Self::Explore { .. } => "Explore",
            Self::ClaimSector { .. } => "ClaimSector",
            Self::RecallInfluence { .. } => "RecallInfluence",
            Self::BuildStarbase { .. } => "BuildStarbase",
            Self::Colonize { .. } => "Colonize",
            Self::ResearchTech { .. } => "ResearchTech",
            Self::ResetTechs => "ResetTechs",
            Self::UpgradeBlueprint { .. } => "UpgradeBlueprint",
            Self::InstallPart { .. } => "InstallPart",
            Self::UninstallPart { .. } => "UninstallPart",
            Self::QueueBuild { .. } => "QueueBuild",
            Self::PlanMove { .. } => "PlanMove",
            Self::ExecuteMove { .. } => "ExecuteMove",
            Self::ResolveCombat { .. } => "ResolveCombat",
            Self::EndTurn => "EndTurn",
        }
    }

    /// Whether the action leaves the state untouched.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::PlanMove { .. })
    }
}

/// Apply `action` for the active player.
///
/// Returns the next state and the events it produced. On `Err` nothing
/// has changed.
pub fn apply_action<D: Dice + ?Sized>(
    state: &GameState,
    catalog: &Catalog,
    dice: &mut D,
    action: &Action,
) -> Result<(GameState, Vec<GameEvent>)> {
    let mut next = state.clone();
    let player = next.active_id();
    let events = match action {
        Action::InitGame { player_count } => {
            next = GameState::new_game(catalog, *player_count)?;
            vec![GameEvent::GameStarted {
                player_count: *player_count,
            }]
        }
        Action::Explore { hex } => explore(&mut next, catalog, player, hex)?,
        Action::ClaimSector { hex } => claim_sector(&mut next, player, hex)?,
        Action::RecallInfluence { hex } => recall_influence(&mut next, catalog, player, hex)?,
        Action::BuildStarbase { hex } => build_starbase(&mut next, catalog, player, hex)?,
        Action::Colonize { hex } => colonize(&mut next, player, hex)?,
        Action::ResearchTech { tech } => {
            let actor = next.require_player_mut(player)?;
            let cost = actor.techs.research(tech, &mut actor.resources)?;
            let name = actor
                .techs
                .get(tech)
                .map_or_else(|| tech.to_string(), |t| t.name.clone());
            vec![GameEvent::TechResearched {
                tech: tech.clone(),
                name,
                cost,
            }]
        }
        Action::ResetTechs => {
            let actor = next.require_player_mut(player)?;
            let refund = actor.techs.reset(&catalog.techs, &mut actor.resources);
            vec![GameEvent::TechsReset { refund }]
        }
        Action::UpgradeBlueprint { ship_type, stat } => {
            let actor = next.require_player_mut(player)?;
            let cost = actor.blueprints.get_mut(*ship_type).upgrade_base(
                *stat,
                &catalog.rules.upgrade_costs,
                &mut actor.resources,
            )?;
            vec![GameEvent::BlueprintUpgraded {
                ship_type: *ship_type,
                stat: *stat,
                cost,
            }]
        }
        Action::InstallPart {
            ship_type,
            slot,
            part,
        } => {
            let actor = next.require_player_mut(player)?;
            let blueprint = actor.blueprints.get_mut(*ship_type);
            blueprint.check_slot(*slot)?;
            let part_data = catalog.require_part(part)?;
            let replaced =
                blueprint.install_part(*slot, part_data, &actor.techs, &mut actor.resources)?;
            vec![GameEvent::PartInstalled {
                ship_type: *ship_type,
                slot: *slot,
                part: part.clone(),
                name: part_data.name.clone(),
                replaced,
            }]
        }
        Action::UninstallPart { ship_type, slot } => {
            let actor = next.require_player_mut(player)?;
            let removed = actor.blueprints.get_mut(*ship_type).uninstall_part(*slot)?;
            vec![GameEvent::PartUninstalled {
                ship_type: *ship_type,
                slot: *slot,
                removed,
            }]
        }
        Action::QueueBuild {
            ships,
            colony_ships,
            hex,
        } => queue_build(&mut next, catalog, player, hex, ships, *colony_ships)?,
        Action::PlanMove { ships, source } => {
            let plan = plan_move(&next, catalog, player, source, ships)?;
            vec![GameEvent::MovePlanned {
                source: source.clone(),
                plan,
            }]
        }
        Action::ExecuteMove {
            source,
            dest,
            ships,
        } => execute_move(&mut next, catalog, player, source, dest, ships)?,
        Action::ResolveCombat { hex } => resolve_combat(&mut next, catalog, player, hex, dice)?,
        Action::EndTurn => end_turn(&mut next)?,
    };

    #[cfg(feature = "debug-validation")]
    {
        let problems = next.check_invariants();
        if !problems.is_empty() {
            return Err(GameError::InvalidState(problems.join("; ")));
        }
    }

    debug!(player = player.0, action = action.name(), events = events.len(), "Action applied");
    Ok((next, events))
}
