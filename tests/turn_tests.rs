use broadsword::rules::{total_steps, TURN_PHASES};
use broadsword::store::{MemoryStore, TURN_KEY};
use broadsword::turn::{Advance, TurnTracker};

#[test]
fn fresh_tracker_starts_at_initiative() {
    let tracker = TurnTracker::new();
    assert_eq!(tracker.turn(), 1);
    assert_eq!(tracker.current_phase().id, "tactics");
    assert_eq!(tracker.current_step().id, "initiative");
}

#[test]
fn a_full_turn_is_thirteen_advances() {
    let mut tracker = TurnTracker::new();
    for _ in 0..total_steps() - 1 {
        let advanced = tracker.advance();
        assert_ne!(advanced, Advance::NewTurn);
    }
    assert_eq!(tracker.advance(), Advance::NewTurn);
    assert_eq!(tracker.turn(), 2);
    assert_eq!(tracker.current_phase().id, "tactics");
    assert_eq!(tracker.current_step().id, "initiative");
}

#[test]
fn phase_boundary_reports_phase_advance() {
    let mut tracker = TurnTracker::new();
    let tactics_steps = TURN_PHASES[0].steps.len();
    for _ in 0..tactics_steps - 1 {
        assert_eq!(tracker.advance(), Advance::Step);
    }
    assert_eq!(tracker.advance(), Advance::Phase);
    assert_eq!(tracker.current_phase().id, "maneuver");
    assert_eq!(tracker.current_step().id, "movement");
}

#[test]
fn new_turn_resets_the_cursor_from_anywhere() {
    let mut tracker = TurnTracker::new();
    for _ in 0..7 {
        tracker.advance();
    }
    tracker.new_turn();
    assert_eq!(tracker.turn(), 2);
    assert_eq!(tracker.current_step().id, "initiative");

    tracker.reset();
    assert_eq!(tracker.turn(), 1);
    assert_eq!(tracker.current_step().id, "initiative");
}

#[test]
fn cursor_round_trips_through_the_store() {
    let store = MemoryStore::new();
    let mut tracker = TurnTracker::new();
    for _ in 0..6 {
        tracker.advance();
    }
    tracker.save(&store);

    let loaded = TurnTracker::load(&store);
    assert_eq!(loaded, tracker);
}

#[test]
fn out_of_range_snapshot_is_clamped_not_trusted() {
    let store = MemoryStore::with_entry(TURN_KEY, r#"{"turn":0,"phase":99,"step":99}"#);
    let loaded = TurnTracker::load(&store);
    assert_eq!(loaded.turn(), 1);
    assert_eq!(loaded.phase_index(), TURN_PHASES.len() - 1);
    let last_phase_steps = TURN_PHASES[TURN_PHASES.len() - 1].steps.len();
    assert_eq!(loaded.step_index(), last_phase_steps - 1);
}

#[test]
fn missing_fields_default_and_garbage_resets() {
    let store = MemoryStore::with_entry(TURN_KEY, r#"{"phase":1}"#);
    let loaded = TurnTracker::load(&store);
    assert_eq!(loaded.turn(), 1);
    assert_eq!(loaded.phase_index(), 1);
    assert_eq!(loaded.step_index(), 0);

    let garbage = MemoryStore::with_entry(TURN_KEY, "{not json");
    assert_eq!(TurnTracker::load(&garbage), TurnTracker::new());
}
