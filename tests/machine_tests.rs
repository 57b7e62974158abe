//! End-to-end behaviour of the state machine engine.

use retrace::{ConfigurationError, Fsm, FsmConfig, FsmError, Snapshot, StateId};
use serde_json::json;

fn ab_table() -> Fsm {
    Fsm::from_value(json!({
        "initial": "A",
        "states": {
            "A": { "transitions": { "go": "B" } },
            "B": { "transitions": { "back": "A" } },
            "C": { "transitions": { "go": "B" } }
        }
    }))
    .unwrap()
}

#[test]
fn missing_configuration_is_rejected() {
    assert_eq!(
        Fsm::create(None).unwrap_err(),
        FsmError::Configuration(ConfigurationError::Missing)
    );
    assert_eq!(
        Fsm::from_json("null").unwrap_err(),
        FsmError::Configuration(ConfigurationError::Missing)
    );
    assert_eq!(
        Fsm::from_value(serde_json::Value::Null).unwrap_err(),
        FsmError::Configuration(ConfigurationError::Missing)
    );
}

#[test]
fn malformed_configuration_is_rejected() {
    assert!(matches!(
        Fsm::from_json("{\"initial\": 3}"),
        Err(FsmError::Configuration(ConfigurationError::Malformed(_)))
    ));
    assert!(matches!(
        Fsm::from_json("not json"),
        Err(FsmError::Configuration(ConfigurationError::Malformed(_)))
    ));
}

#[test]
fn inconsistent_tables_are_rejected_at_construction() {
    let unknown_initial = json!({
        "initial": "Q",
        "states": { "A": { "transitions": {} } }
    });
    assert_eq!(
        Fsm::from_value(unknown_initial).unwrap_err(),
        FsmError::Configuration(ConfigurationError::UnknownInitialState(StateId::from("Q")))
    );

    let dangling = json!({
        "initial": "A",
        "states": { "A": { "transitions": { "go": "nowhere" } } }
    });
    assert!(matches!(
        Fsm::from_value(dangling),
        Err(FsmError::Configuration(ConfigurationError::UnknownTarget { .. }))
    ));
}

#[test]
fn create_with_config_starts_at_initial() {
    let config: FsmConfig = serde_json::from_value(json!({
        "initial": "B",
        "states": { "A": {}, "B": { "transitions": { "x": "A" } } }
    }))
    .unwrap();

    let fsm = Fsm::create(Some(config)).unwrap();
    assert_eq!(fsm.state(), "B");
}

#[test]
fn trigger_moves_to_destination() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    assert_eq!(fsm.state(), "B");
}

#[test]
fn invalid_trigger_keeps_state() {
    let mut fsm = ab_table();
    let err = fsm.trigger("back").unwrap_err();

    assert!(matches!(err, FsmError::InvalidTransition { .. }));
    assert_eq!(fsm.state(), "A");
    assert!(!fsm.can_undo());
}

#[test]
fn invalid_change_state_keeps_state() {
    let mut fsm = ab_table();
    let err = fsm.change_state("nonexistent").unwrap_err();

    assert_eq!(err, FsmError::InvalidState(StateId::from("nonexistent")));
    assert_eq!(fsm.state(), "A");
    assert!(!fsm.can_undo());
}

#[test]
fn undo_redo_round_trip() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();

    assert!(fsm.undo());
    assert_eq!(fsm.state(), "A");
    assert!(fsm.redo());
    assert_eq!(fsm.state(), "B");
}

#[test]
fn forward_move_after_undo_invalidates_redo() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    assert!(fsm.undo());
    fsm.change_state("C").unwrap();

    assert!(!fsm.history().undone().is_empty());
    assert!(!fsm.redo());
    assert_eq!(fsm.state(), "C");
}

#[test]
fn trigger_after_undo_also_invalidates_redo() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    assert!(fsm.undo());
    fsm.trigger("go").unwrap();

    assert!(!fsm.redo());
}

#[test]
fn undo_on_fresh_machine_is_declined() {
    let mut fsm = ab_table();
    assert!(!fsm.undo());
    assert_eq!(fsm.state(), "A");

    fsm.trigger("go").unwrap();
    fsm.reset();
    assert!(!fsm.undo());
    assert_eq!(fsm.state(), "A");
}

#[test]
fn redo_on_fresh_machine_is_declined() {
    let mut fsm = ab_table();
    assert!(!fsm.redo());
    assert_eq!(fsm.state(), "A");
}

#[test]
fn reset_restores_initial_state() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    fsm.trigger("back").unwrap();
    fsm.change_state("C").unwrap();
    fsm.undo();
    fsm.undo();

    fsm.reset();
    assert_eq!(fsm.state(), "A");
    assert!(!fsm.undo());
    assert!(!fsm.redo());
}

#[test]
fn clear_history_disables_undo_and_redo() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    fsm.trigger("back").unwrap();
    fsm.undo();

    fsm.clear_history();
    assert_eq!(fsm.state(), "B");
    assert!(!fsm.undo());
    assert!(!fsm.redo());
}

#[test]
fn states_query() {
    let fsm = Fsm::from_value(json!({
        "initial": "A",
        "states": {
            "A": { "transitions": { "x": "B" } },
            "B": { "transitions": { "y": "A" } }
        }
    }))
    .unwrap();

    assert_eq!(fsm.states(Some("x")), vec!["A"]);
    assert_eq!(fsm.states(Some("y")), vec!["B"]);
    assert!(fsm.states(Some("z")).is_empty());

    let mut all: Vec<_> = fsm.states(None).into_iter().map(|s| s.as_str()).collect();
    all.sort();
    assert_eq!(all, vec!["A", "B"]);
}

#[test]
fn states_query_ignores_current_state() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    assert_eq!(fsm.states(Some("go")), vec!["A", "C"]);
}

#[test]
fn redo_replays_the_undone_state_onto_history() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    fsm.undo();
    fsm.redo();

    assert_eq!(fsm.history().past(), &["B"]);
    assert!(fsm.history().undone().is_empty());
}

#[test]
fn failed_operations_leave_snapshot_untouched() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    fsm.undo();
    let before = fsm.snapshot();

    assert!(fsm.trigger("missing").is_err());
    assert!(fsm.change_state("missing").is_err());
    assert_eq!(fsm.snapshot(), before);
    assert!(fsm.redo());
}

#[test]
fn snapshot_survives_json_and_binary_encoding() {
    let mut fsm = ab_table();
    fsm.trigger("go").unwrap();
    fsm.trigger("back").unwrap();
    fsm.undo();

    let snapshot = fsm.snapshot();
    let from_json = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    let from_bytes = Snapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
    assert_eq!(from_json, snapshot);
    assert_eq!(from_bytes, snapshot);

    let mut restored = ab_table();
    restored.restore(from_bytes).unwrap();
    assert_eq!(restored.state(), "B");
    assert!(restored.redo());
    assert_eq!(restored.state(), "A");
}

#[test]
fn long_sessions_keep_every_move_in_history() {
    const MOVES: usize = 50_000;
    let mut fsm = Fsm::from_value(json!({
        "initial": "on",
        "states": {
            "on": { "transitions": { "flip": "off" } },
            "off": { "transitions": { "flip": "on" } }
        }
    }))
    .unwrap();

    for _ in 0..MOVES {
        fsm.trigger("flip").unwrap();
    }
    assert_eq!(fsm.history().past().len(), MOVES);
    assert_eq!(fsm.state(), "on");

    for _ in 0..MOVES / 2 {
        assert!(fsm.undo());
    }
    assert_eq!(fsm.history().past().len(), MOVES / 2);
    assert_eq!(fsm.history().undone().len(), MOVES / 2);

    fsm.trigger("flip").unwrap();
    assert!(!fsm.redo());
    assert_eq!(fsm.history().past().len(), MOVES / 2 + 1);
}
