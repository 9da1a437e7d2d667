//! Session store and replay verification.

use sector_core::prelude::*;
use sector_test_utils::fixtures::{hex, home_of, P1};

fn opening(store: &mut GameStore) {
    store.submit(Action::Explore { hex: home_of(P1) }).unwrap();
    store
        .submit(Action::QueueBuild {
            ships: ShipCounts::new(2, 0, 0),
            colony_ships: 0,
            hex: home_of(P1),
        })
        .unwrap();
    store
        .submit(Action::ExecuteMove {
            source: home_of(P1),
            dest: hex("001"),
            ships: ShipCounts::new(2, 0, 0),
        })
        .unwrap();
    store.submit(Action::ResolveCombat { hex: hex("001") }).unwrap();
    store.submit(Action::EndTurn).unwrap();
}

#[test]
fn test_replay_rebuilds_same_state() {
    let mut store = GameStore::new(Catalog::standard(), 2, 42).unwrap();
    opening(&mut store);

    let replay = store.replay();
    assert_eq!(replay.len(), 5);
    let rebuilt = replay.rebuild(store.catalog()).unwrap();
    assert_eq!(&rebuilt, store.state());
    assert!(replay
        .verify(store.catalog(), store.state().state_hash())
        .unwrap());
    assert!(!replay.verify(store.catalog(), 0).unwrap());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameStore::new(Catalog::standard(), 2, 7).unwrap();
    let mut b = GameStore::new(Catalog::standard(), 2, 7).unwrap();
    opening(&mut a);
    opening(&mut b);
    assert_eq!(a.state().state_hash(), b.state().state_hash());
}

#[test]
fn test_rejected_actions_are_not_recorded() {
    let mut store = GameStore::new(Catalog::standard(), 1, 1).unwrap();
    let before = store.state().clone();

    let err = store
        .submit(Action::ClaimSector { hex: hex("001") })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidTarget(_)));
    assert_eq!(store.state(), &before);
    assert!(store.replay().is_empty());
}

#[test]
fn test_move_planning_is_not_recorded() {
    let mut store = GameStore::new(Catalog::standard(), 1, 1).unwrap();
    store
        .submit(Action::QueueBuild {
            ships: ShipCounts::new(1, 0, 0),
            colony_ships: 0,
            hex: home_of(P1),
        })
        .unwrap();

    let plan = store.plan_move(&ShipCounts::new(1, 0, 0), &home_of(P1)).unwrap();
    assert_eq!(plan.range, 2);

    let hash = store.state().state_hash();
    let events = store
        .submit(Action::PlanMove {
            ships: ShipCounts::new(1, 0, 0),
            source: home_of(P1),
        })
        .unwrap();
    assert!(matches!(events[0], GameEvent::MovePlanned { .. }));
    assert_eq!(store.state().state_hash(), hash);
    assert_eq!(store.replay().len(), 1);
}

#[test]
fn test_replay_survives_ron() {
    let mut store = GameStore::new(Catalog::standard(), 2, 99).unwrap();
    opening(&mut store);

    let text = ron::to_string(store.replay()).unwrap();
    let loaded: Replay = ron::from_str(&text).unwrap();
    assert_eq!(&loaded, store.replay());
    assert!(loaded
        .verify(store.catalog(), store.state().state_hash())
        .unwrap());
}

#[test]
fn test_init_game_restarts() {
    let mut store = GameStore::new(Catalog::standard(), 1, 5).unwrap();
    store.submit(Action::Explore { hex: home_of(P1) }).unwrap();
    let events = store.submit(Action::InitGame { player_count: 3 }).unwrap();
    assert_eq!(events, vec![GameEvent::GameStarted { player_count: 3 }]);
    assert_eq!(store.state().players.len(), 3);
    assert_eq!(store.state().players[0].resources.money, 2);

    let err = store.submit(Action::InitGame { player_count: 5 }).unwrap_err();
    assert!(matches!(err, GameError::InvalidPlayerCount(5)));
}
