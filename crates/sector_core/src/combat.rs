//! Combat resolution between two aggregated combatants.
//!
//! A [`Battle`] is advanced one attack at a time by [`advance_one_exchange`],
//! which never mutates its input. Callers that want pacing (animation, a
//! delay between rolls) drive the step function themselves; callers that
//! just want the result use [`run_to_completion`].
//!
//! ## Rules
//!
//! - The side with higher initiative attacks first each round; ties go to the player.
//! - One d6 per attack. Missiles add to the roll for the hit check only.
//! - A modified roll at or above the hit threshold hits for the attacker's damage.
//! - The crit face (raw roll) adds bonus damage.
//! - Shields absorb a fixed amount unless the attacker carries ion weapons.
//! - The battle ends as soon as either hull drops to zero or below. The player
//!   only wins with hull remaining and the enemy destroyed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::blueprint::{ShipStats, Specials};
use crate::data::{Catalog, CombatRules, HostileProfile};
use crate::dice::Dice;
use crate::economy::ResourceType;
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::fleet::{FleetOwner, ShipCounts};
use crate::map::HexId;
use crate::state::{GameState, PlayerId};

/// Which side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The acting player's fleet.
    Player,
    /// The hostile occupant.
    Enemy,
}

/// Origin of a combat log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogSource {
    /// The player's attack.
    Player,
    /// The enemy's attack.
    Enemy,
    /// Round headers and results.
    Info,
}

impl From<Side> for LogSource {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Self::Player,
            Side::Enemy => Self::Enemy,
        }
    }
}

/// One line of the combat log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatLogEntry {
    /// Round the line belongs to.
    pub round: u32,
    /// Display text.
    pub message: String,
    /// Who produced it.
    pub source: LogSource,
}

impl CombatLogEntry {
    fn info(round: u32, message: impl Into<String>) -> Self {
        Self {
            round,
            message: message.into(),
            source: LogSource::Info,
        }
    }
}

/// One side of a battle, with its ships collapsed into a single pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    /// Name used in the log.
    pub name: String,
    /// Which side this is.
    pub side: Side,
    /// Remaining hull. May go negative.
    pub hull: i32,
    /// Hull at the start of the battle.
    pub max_hull: i32,
    /// Damage per hit.
    pub damage: i32,
    /// Initiative.
    pub initiative: i32,
    /// Combat specials.
    pub specials: Specials,
}

impl Combatant {
    /// Aggregate a mixed group of ships.
    ///
    /// Hull and damage add up per ship; initiative is the best in the group;
    /// specials are shared by the whole group.
    #[must_use]
    pub fn from_group<I>(name: impl Into<String>, side: Side, groups: I) -> Self
    where
        I: IntoIterator<Item = (ShipStats, Specials, u32)>,
    {
        let mut hull = 0i32;
        let mut damage = 0i32;
        let mut initiative: Option<i32> = None;
        let mut specials = Specials::default();
        for (stats, group_specials, count) in groups.into_iter().filter(|(_, _, n)| *n > 0) {
            let count = i32::try_from(count).unwrap_or(i32::MAX);
            hull = hull.saturating_add(stats.hull.saturating_mul(count));
            damage = damage.saturating_add(stats.damage.saturating_mul(count));
            initiative = Some(initiative.map_or(stats.initiative, |i| i.max(stats.initiative)));
            specials = specials.union(group_specials);
        }
        Self {
            name: name.into(),
            side,
            hull,
            max_hull: hull,
            damage,
            initiative: initiative.unwrap_or(0),
            specials,
        }
    }

    /// A fixed hostile occupant.
    #[must_use]
    pub fn from_profile(profile: &HostileProfile) -> Self {
        Self {
            name: profile.name.clone(),
            side: Side::Enemy,
            hull: profile.hull,
            max_hull: profile.hull,
            damage: profile.damage,
            initiative: profile.initiative,
            specials: profile.specials,
        }
    }

    /// Whether this side has been knocked out.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.hull <= 0
    }
}

/// The result of a single attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    /// Unmodified die face.
    pub raw: u32,
    /// Whether the (missile-modified) roll hit.
    pub hit: bool,
    /// Raw roll was the crit face.
    pub critical: bool,
    /// Shields reduced the damage.
    pub absorbed: bool,
    /// Ion weapons ignored the defender's shields.
    pub ion_bypass: bool,
    /// Final damage applied.
    pub damage: i32,
}

/// Work out one attack for a given raw die face.
#[must_use]
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &Combatant,
    raw: u32,
    rules: &CombatRules,
) -> AttackRoll {
    let modified = if attacker.specials.missiles {
        raw + rules.missile_bonus
    } else {
        raw
    };
    let hit = modified >= rules.hit_threshold;
    let mut roll = AttackRoll {
        raw,
        hit,
        critical: false,
        absorbed: false,
        ion_bypass: false,
        damage: 0,
    };
    if !hit {
        return roll;
    }

    let mut damage = attacker.damage;
    if raw == rules.crit_face {
        damage += rules.crit_bonus;
        roll.critical = true;
    }
    if defender.specials.shields {
        if attacker.specials.ion {
            roll.ion_bypass = true;
        } else {
            damage -= rules.shield_absorb;
            roll.absorbed = true;
        }
    }
    roll.damage = damage.max(0);
    roll
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The player's fleet survived and the enemy was destroyed.
    Victory,
    /// Anything else, including mutual destruction.
    Defeat,
}

/// A battle in progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Battle {
    player: Combatant,
    enemy: Combatant,
    rules: CombatRules,
    round: u32,
    second_attack_pending: bool,
    outcome: Option<CombatOutcome>,
}

impl Battle {
    /// Set up a battle that has not started yet.
    #[must_use]
    pub fn new(player: Combatant, enemy: Combatant, rules: CombatRules) -> Self {
        Self {
            player,
            enemy,
            rules,
            round: 0,
            second_attack_pending: false,
            outcome: None,
        }
    }

    /// The player's side.
    #[must_use]
    pub const fn player(&self) -> &Combatant {
        &self.player
    }

    /// The enemy side.
    #[must_use]
    pub const fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Current round (0 before the first exchange).
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The result once the battle is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    /// Whether the battle has ended.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Side that attacks first in every round.
    #[must_use]
    pub const fn first_attacker(&self) -> Side {
        if self.player.initiative >= self.enemy.initiative {
            Side::Player
        } else {
            Side::Enemy
        }
    }

    /// Whether neither side can ever damage the other.
    ///
    /// Such a battle would never end, so it is scored as a defeat.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !can_ever_damage(&self.player, &self.enemy, &self.rules)
            && !can_ever_damage(&self.enemy, &self.player, &self.rules)
    }

    fn sides_mut(&mut self, attacker: Side) -> (&mut Combatant, &mut Combatant) {
        match attacker {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    fn settle(&mut self) {
        let outcome = if !self.player.is_destroyed() && self.enemy.is_destroyed() {
            CombatOutcome::Victory
        } else {
            CombatOutcome::Defeat
        };
        info!(round = self.round, ?outcome, player_hull = self.player.hull, enemy_hull = self.enemy.hull, "Battle finished");
        self.outcome = Some(outcome);
    }
}

fn can_ever_damage(attacker: &Combatant, defender: &Combatant, rules: &CombatRules) -> bool {
    let best = resolve_attack(attacker, defender, rules.crit_face.max(6), rules);
    let crit = resolve_attack(attacker, defender, rules.crit_face, rules);
    best.damage > 0 || crit.damage > 0
}

/// Perform the next attack of `battle`.
///
/// Returns the advanced battle, the log lines produced and whether the
/// battle is over. A round header is emitted whenever a new round starts.
/// Calling this on a finished battle returns it unchanged with no entries.
pub fn advance_one_exchange<D: Dice + ?Sized>(
    battle: &Battle,
    dice: &mut D,
) -> (Battle, Vec<CombatLogEntry>, bool) {
    let mut next = battle.clone();
    if next.is_finished() {
        return (next, Vec::new(), true);
    }
    if next.player.is_destroyed() || next.enemy.is_destroyed() || next.is_stalemate() {
        next.settle();
        return (next, Vec::new(), true);
    }

    let mut entries = Vec::new();
    let first = next.first_attacker();
    let attacker_side = if next.second_attack_pending {
        next.second_attack_pending = false;
        match first {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    } else {
        next.round += 1;
        next.second_attack_pending = true;
        entries.push(CombatLogEntry::info(
            next.round,
            format!("--- Round {} ---", next.round),
        ));
        first
    };

    let raw = dice.roll_d6();
    let rules = next.rules;
    let round = next.round;
    let (attacker, defender) = next.sides_mut(attacker_side);
    let roll = resolve_attack(attacker, defender, raw, &rules);
    defender.hull -= roll.damage;

    let verdict = if roll.damage > 0 {
        format!("HIT for {}", roll.damage)
    } else if roll.hit {
        "BLOCKED".to_string()
    } else {
        "MISS".to_string()
    };
    trace!(
        round,
        attacker = %attacker.name,
        raw,
        critical = roll.critical,
        absorbed = roll.absorbed,
        ion_bypass = roll.ion_bypass,
        damage = roll.damage,
        defender_hull = defender.hull,
        "Attack resolved"
    );
    entries.push(CombatLogEntry {
        round,
        message: format!("{} rolls {raw}: {verdict}", attacker.name),
        source: attacker_side.into(),
    });

    if next.player.is_destroyed() || next.enemy.is_destroyed() {
        next.second_attack_pending = false;
        next.settle();
    }
    let finished = next.is_finished();
    (next, entries, finished)
}

/// Step `battle` until it finishes, collecting the full log.
pub fn run_to_completion<D: Dice + ?Sized>(
    battle: Battle,
    dice: &mut D,
) -> (Battle, Vec<CombatLogEntry>) {
    let mut log = Vec::new();
    let mut current = battle;
    loop {
        let (next, entries, finished) = advance_one_exchange(&current, dice);
        log.extend(entries);
        current = next;
        if finished {
            return (current, log);
        }
    }
}

/// Aggregate `player`'s fleet at `hex` into a combatant.
///
/// # Errors
/// [`GameError::NoSelection`] if the player has no fleet at `hex`.
pub fn player_combatant(
    state: &GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
) -> Result<Combatant> {
    let actor = state.require_player(player)?;
    let fleet = state
        .fleet_at(FleetOwner::Player(player), hex)
        .ok_or_else(|| GameError::NoSelection(format!("No fleet stationed at {hex} under your command")))?;
    let groups = fleet.ships.iter().map(|(ship_type, count)| {
        let blueprint = actor.blueprints.get(ship_type);
        (
            blueprint.compute_stats(catalog),
            blueprint.compute_specials(catalog),
            count,
        )
    });
    Ok(Combatant::from_group(actor.name.clone(), Side::Player, groups))
}

/// The hostile side at `hex`, if any.
///
/// A stationed hostile fleet takes precedence over the static occupants.
/// Hostile ships fight with the catalog's stock hulls.
#[must_use]
pub fn hostile_combatant(state: &GameState, catalog: &Catalog, hex: &HexId) -> Option<Combatant> {
    if let Some(fleet) = state.fleet_at(FleetOwner::Hostile, hex) {
        return Some(stock_fleet_combatant("Hostile Fleet", Side::Enemy, &fleet.ships, catalog));
    }
    let site = state.hex(hex)?;
    let roster = &catalog.rules.hostiles;
    if site.is_gcds {
        Some(Combatant::from_profile(&roster.gcds))
    } else if site.has_enemy {
        Some(Combatant::from_profile(&roster.guardian))
    } else {
        None
    }
}

/// A combatant built from unmodified stock hulls.
#[must_use]
pub fn stock_fleet_combatant(
    name: &str,
    side: Side,
    ships: &ShipCounts,
    catalog: &Catalog,
) -> Combatant {
    let groups = ships.iter().filter_map(|(ship_type, count)| {
        catalog.hull(ship_type).map(|hull| {
            let stats = ShipStats {
                hull: hull.hull,
                initiative: hull.initiative,
                movement: hull.movement,
                damage: if hull.damage == 0 { 1 } else { hull.damage },
            };
            (stats, Specials::default(), count)
        })
    });
    Combatant::from_group(name, side, groups)
}

/// Fight at `hex` as `player` and apply the result to `state`.
///
/// # Errors
/// - [`GameError::UnknownHex`] if `hex` is not on the map
/// - [`GameError::InvalidTarget`] if nothing hostile is there
/// - [`GameError::NoSelection`] if the player has no fleet there
pub fn resolve_combat<D: Dice + ?Sized>(
    state: &mut GameState,
    catalog: &Catalog,
    player: PlayerId,
    hex: &HexId,
    dice: &mut D,
) -> Result<Vec<GameEvent>> {
    let site_name = state.require_hex(hex)?.name.clone();
    let enemy = hostile_combatant(state, catalog, hex)
        .ok_or_else(|| GameError::InvalidTarget(format!("No hostiles at {site_name}")))?;
    let ours = player_combatant(state, catalog, player, hex)?;
    info!(player = player.0, %hex, enemy = %enemy.name, "Combat engaged");

    let rules = catalog.rules.combat;
    let (battle, mut log) = run_to_completion(Battle::new(ours, enemy, rules), dice);
    let round = battle.round();
    let outcome = battle.outcome().unwrap_or(CombatOutcome::Defeat);

    let mut reputation = None;
    match outcome {
        CombatOutcome::Victory => {
            let gain = dice.roll_die(rules.reputation_faces);
            let site = state.require_hex_mut(hex)?;
            site.has_enemy = false;
            site.is_gcds = false;
            state
                .fleets
                .retain(|f| !(f.owner == FleetOwner::Hostile && &f.hex == hex));
            let actor = state.require_player_mut(player)?;
            actor.resources.credit_all(rules.victory_reward);
            actor.reputation.push(gain);
            actor.victory_points += gain;
            reputation = Some(gain);
            log.push(CombatLogEntry::info(
                round,
                format!("Sector Secured. Reputation: {gain} VP"),
            ));
        }
        CombatOutcome::Defeat => {
            let actor = state.require_player_mut(player)?;
            let lost = actor
                .resources
                .debit_floored(ResourceType::Materials, rules.defeat_penalty);
            debug!(player = player.0, lost, "Defeat penalty applied");
            log.push(CombatLogEntry::info(round, "Fleet critical failure. Retreating."));
        }
    }

    let mut events: Vec<GameEvent> = log.into_iter().map(GameEvent::CombatLog).collect();
    events.push(GameEvent::CombatEnded {
        hex: hex.clone(),
        outcome,
        reputation,
    });
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn fighter(name: &str, side: Side, hull: i32, damage: i32, initiative: i32) -> Combatant {
        Combatant {
            name: name.to_string(),
            side,
            hull,
            max_hull: hull,
            damage,
            initiative,
            specials: Specials::default(),
        }
    }

    fn shielded(mut c: Combatant) -> Combatant {
        c.specials.shields = true;
        c
    }

    #[test]
    fn test_group_aggregation() {
        let interceptor = ShipStats {
            hull: 1,
            initiative: 3,
            movement: 2,
            damage: 1,
        };
        let cruiser = ShipStats {
            hull: 2,
            initiative: 2,
            movement: 2,
            damage: 1,
        };
        let ion = Specials {
            ion: true,
            ..Specials::default()
        };
        let c = Combatant::from_group(
            "Commander 1",
            Side::Player,
            [
                (interceptor, Specials::default(), 3),
                (cruiser, ion, 2),
            ],
        );
        assert_eq!(c.hull, 3 + 4);
        assert_eq!(c.max_hull, 7);
        assert_eq!(c.damage, 3 + 2);
        assert_eq!(c.initiative, 3);
        assert!(c.specials.ion);
    }

    #[test]
    fn test_missile_bonus_only_for_hit_check() {
        let rules = CombatRules::default();
        let mut attacker = fighter("A", Side::Player, 5, 2, 1);
        let defender = fighter("B", Side::Enemy, 5, 1, 1);
        assert!(!resolve_attack(&attacker, &defender, 2, &rules).hit);
        attacker.specials.missiles = true;
        let roll = resolve_attack(&attacker, &defender, 2, &rules);
        assert!(roll.hit);
        assert_eq!(roll.damage, 2);
        // A missile-boosted 5 is not a crit.
        let roll = resolve_attack(&attacker, &defender, 5, &rules);
        assert!(!roll.critical);
        assert_eq!(roll.damage, 2);
    }

    #[test]
    fn test_shields_absorb_unless_ion() {
        let rules = CombatRules::default();
        let mut attacker = fighter("A", Side::Player, 5, 3, 1);
        let defender = shielded(fighter("B", Side::Enemy, 5, 1, 1));
        let roll = resolve_attack(&attacker, &defender, 4, &rules);
        assert!(roll.absorbed);
        assert_eq!(roll.damage, 1);

        attacker.specials.ion = true;
        let roll = resolve_attack(&attacker, &defender, 4, &rules);
        assert!(roll.ion_bypass);
        assert_eq!(roll.damage, 3);
    }

    #[test]
    fn test_crit_on_six() {
        let rules = CombatRules::default();
        let attacker = fighter("A", Side::Player, 5, 1, 1);
        let defender = shielded(fighter("B", Side::Enemy, 5, 1, 1));
        let roll = resolve_attack(&attacker, &defender, 6, &rules);
        assert!(roll.critical);
        assert_eq!(roll.damage, 1);
    }

    #[test]
    fn test_first_exchange_announces_round() {
        let battle = Battle::new(
            fighter("Commander 1", Side::Player, 5, 1, 3),
            fighter("Ancient Guardian", Side::Enemy, 8, 3, 2),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![4]);
        let (next, entries, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(!finished);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "--- Round 1 ---");
        assert_eq!(entries[0].source, LogSource::Info);
        assert_eq!(entries[1].message, "Commander 1 rolls 4: HIT for 1");
        assert_eq!(entries[1].source, LogSource::Player);
        assert_eq!(next.enemy().hull, 7);
        // Input untouched.
        assert_eq!(battle.enemy().hull, 8);
        assert_eq!(battle.round(), 0);
    }

    #[test]
    fn test_initiative_tie_favors_player() {
        let battle = Battle::new(
            fighter("P", Side::Player, 5, 1, 2),
            fighter("E", Side::Enemy, 5, 1, 2),
            CombatRules::default(),
        );
        assert_eq!(battle.first_attacker(), Side::Player);
        let faster = Battle::new(
            fighter("P", Side::Player, 5, 1, 1),
            fighter("E", Side::Enemy, 5, 1, 2),
            CombatRules::default(),
        );
        assert_eq!(faster.first_attacker(), Side::Enemy);
    }

    #[test]
    fn test_second_attack_completes_round() {
        let battle = Battle::new(
            fighter("P", Side::Player, 5, 1, 1),
            fighter("E", Side::Enemy, 5, 2, 4),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![1, 3]);
        let (battle, first, _) = advance_one_exchange(&battle, &mut dice);
        assert_eq!(first[1].message, "E rolls 1: MISS");
        let (battle, second, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(!finished);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].message, "P rolls 3: HIT for 1");
        assert_eq!(second[0].round, 1);
        assert_eq!(battle.enemy().hull, 4);
    }

    #[test]
    fn test_kill_ends_battle_before_second_attack() {
        let battle = Battle::new(
            fighter("P", Side::Player, 5, 4, 3),
            fighter("E", Side::Enemy, 3, 9, 1),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![5]);
        let (battle, entries, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(finished);
        assert_eq!(entries.len(), 2);
        assert_eq!(battle.outcome(), Some(CombatOutcome::Victory));
        assert_eq!(dice.rolls(), 1);
    }

    #[test]
    fn test_second_attacker_kill_finishes_round() {
        let battle = Battle::new(
            fighter("P", Side::Player, 5, 2, 3),
            fighter("E", Side::Enemy, 10, 9, 1),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![1, 5]);

        let (battle, entries, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(!finished);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].message, "P rolls 1: MISS");

        let (battle, entries, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(finished);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "E rolls 5: HIT for 9");
        assert_eq!(entries[0].round, 1);
        assert_eq!(battle.outcome(), Some(CombatOutcome::Defeat));
        assert_eq!(battle.player().hull, -4);

        let (again, entries, finished) = advance_one_exchange(&battle, &mut dice);
        assert!(finished);
        assert!(entries.is_empty());
        assert_eq!(again, battle);
        assert_eq!(dice.rolls(), 2);
    }

    #[test]
    fn test_finished_battle_is_noop() {
        let battle = Battle::new(
            fighter("P", Side::Player, 5, 4, 3),
            fighter("E", Side::Enemy, 3, 9, 1),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![5]);
        let (done, _) = run_to_completion(battle, &mut dice);
        let (again, entries, finished) = advance_one_exchange(&done, &mut dice);
        assert!(finished);
        assert!(entries.is_empty());
        assert_eq!(again, done);
        assert_eq!(dice.rolls(), 1);
    }

    #[test]
    fn test_mutual_destruction_is_defeat() {
        let battle = Battle::new(
            fighter("P", Side::Player, 0, 1, 3),
            fighter("E", Side::Enemy, 0, 1, 1),
            CombatRules::default(),
        );
        let mut dice = ScriptedDice::new(vec![6]);
        let (done, log) = run_to_completion(battle, &mut dice);
        assert_eq!(done.outcome(), Some(CombatOutcome::Defeat));
        assert!(log.is_empty());
        assert_eq!(dice.rolls(), 0);
    }

    #[test]
    fn test_stalemate_terminates() {
        let mut rules = CombatRules::default();
        rules.crit_bonus = 0;
        let battle = Battle::new(
            shielded(fighter("P", Side::Player, 5, 1, 3)),
            shielded(fighter("E", Side::Enemy, 5, 2, 1)),
            rules,
        );
        assert!(battle.is_stalemate());
        let mut dice = ScriptedDice::new(vec![6]);
        let (done, _) = run_to_completion(battle, &mut dice);
        assert_eq!(done.outcome(), Some(CombatOutcome::Defeat));
    }
}
