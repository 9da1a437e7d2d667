//! Worked scenarios from the rules, played through the public API.

use sector_core::blueprint::{ShipType, Specials, UpgradeStat};
use sector_core::combat::{resolve_attack, Combatant, Side};
use sector_core::data::{Catalog, CombatRules};
use sector_core::dice::ScriptedDice;
use sector_core::economy::Resources;
use sector_core::error::GameError;
use sector_core::fleet::ShipCounts;
use sector_core::map::{Structure, Terrain};
use sector_core::prelude::{apply_action, Action, PlayerId};
use sector_test_utils::fixtures::{hex, home_of, new_game, set_resources, station_fleet, P1};

fn combatant(damage: i32, specials: Specials) -> Combatant {
    Combatant {
        name: "Test".to_string(),
        side: Side::Player,
        hull: 10,
        max_hull: 10,
        damage,
        initiative: 1,
        specials,
    }
}

// =============================================================================
// A: Blueprint upgrade with the exact balance
// =============================================================================

#[test]
fn test_upgrade_with_exact_materials() {
    let catalog = Catalog::standard();
    let mut state = new_game(1);
    set_resources(&mut state, P1, Resources::new(0, 0, 2));
    let before = state.players[0].blueprints.get(ShipType::Interceptor).base_hull;

    let (next, events) = apply_action(
        &state,
        &catalog,
        &mut ScriptedDice::default(),
        &Action::UpgradeBlueprint {
            ship_type: ShipType::Interceptor,
            stat: UpgradeStat::Hull,
        },
    )
    .unwrap();

    assert_eq!(next.players[0].resources.materials, 0);
    assert_eq!(
        next.players[0].blueprints.get(ShipType::Interceptor).base_hull,
        before + 1
    );
    assert_eq!(events.len(), 1);
}

// =============================================================================
// B: Claim without influence
// =============================================================================

#[test]
fn test_claim_without_influence_changes_nothing() {
    let catalog = Catalog::standard();
    let mut state = new_game(1);
    state.players[0].influence.current = 0;
    let hash = state.state_hash();

    let err = apply_action(
        &state,
        &catalog,
        &mut ScriptedDice::default(),
        &Action::ClaimSector { hex: hex("i6") },
    )
    .unwrap_err();

    assert!(matches!(err, GameError::InsufficientInfluence));
    assert_eq!(state.state_hash(), hash);
    assert_eq!(state.players[0].victory_points, 0);
    assert!(state.hex(&hex("i6")).unwrap().owner.is_none());
}

// =============================================================================
// C: Mixed fleet range
// =============================================================================

#[test]
fn test_mixed_fleet_moves_at_slowest_range() {
    let catalog = Catalog::standard();
    let mut state = new_game(3);
    station_fleet(&mut state, P1, &home_of(P1), ShipCounts::new(3, 2, 0));

    let (_, events) = apply_action(
        &state,
        &catalog,
        &mut ScriptedDice::default(),
        &Action::PlanMove {
            ships: ShipCounts::new(3, 2, 0),
            source: home_of(P1),
        },
    )
    .unwrap();

    let plan = match &events[0] {
        sector_core::event::GameEvent::MovePlanned { plan, .. } => plan.clone(),
        other => panic!("unexpected event {other:?}"),
    };
    assert_eq!(plan.range, 2);
    assert!(plan.can_reach(&hex("i6")));
    assert!(plan.can_reach(&hex("001")));
    // The third home sector sits three steps away.
    assert!(!plan.can_reach(&hex("start3")));
}

#[test]
fn test_dreadnought_slows_the_group() {
    let catalog = Catalog::standard();
    let mut state = new_game(1);
    station_fleet(&mut state, P1, &home_of(P1), ShipCounts::new(1, 0, 1));

    let plan = sector_core::fleet::plan_move(
        &state,
        &catalog,
        P1,
        &home_of(P1),
        &ShipCounts::new(1, 0, 1),
    )
    .unwrap();
    assert_eq!(plan.range, 1);
    assert!(plan.can_reach(&hex("i6")));
    assert!(!plan.can_reach(&hex("001")));
}

// =============================================================================
// D: Shields and ion weapons
// =============================================================================

#[test]
fn test_shields_absorb_without_ion() {
    let rules = CombatRules::default();
    let defender = combatant(
        1,
        Specials {
            shields: true,
            ..Specials::default()
        },
    );
    let plain = combatant(3, Specials::default());
    let ion = combatant(
        3,
        Specials {
            ion: true,
            ..Specials::default()
        },
    );

    let blocked = resolve_attack(&plain, &defender, 4, &rules);
    assert!(blocked.hit && blocked.absorbed);
    assert_eq!(blocked.damage, 1);

    let through = resolve_attack(&ion, &defender, 4, &rules);
    assert!(through.ion_bypass);
    assert_eq!(through.damage, 3);

    let weak = combatant(1, Specials::default());
    assert_eq!(resolve_attack(&weak, &defender, 4, &rules).damage, 0);
}

// =============================================================================
// E: Four-player setup
// =============================================================================

#[test]
fn test_four_player_setup() {
    let catalog = Catalog::standard();
    let state = new_game(1);
    let (state, _) = apply_action(
        &state,
        &catalog,
        &mut ScriptedDice::default(),
        &Action::InitGame { player_count: 4 },
    )
    .unwrap();

    assert_eq!(state.players.len(), 4);
    let starts: Vec<_> = state
        .map
        .iter()
        .filter(|h| h.terrain == Terrain::Start)
        .collect();
    assert_eq!(starts.len(), 4);
    for (i, start) in starts.iter().enumerate() {
        assert!(start.revealed);
        assert_eq!(start.owner, Some(PlayerId::from_index(i)));
        assert_eq!(start.structure, Some(Structure::Starbase));
        assert_eq!(start.population, 3);
    }

    let statics: Vec<_> = state
        .map
        .iter()
        .filter(|h| h.terrain != Terrain::Start)
        .collect();
    assert_eq!(statics.len(), 7);
    assert!(statics.iter().all(|h| !h.revealed && h.owner.is_none()));
}
