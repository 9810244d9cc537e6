//! Full game sessions driven through the public action API

use quadfall::core::{GameSnapshot, GameState};
use quadfall::types::{Action, Shift, Spin, Status};

/// Hard-drops until the stack tops out. Center-column drops never clear
/// lines, so this terminates well inside the bound.
fn play_until_over(state: &mut GameState) {
    for _ in 0..60 {
        if state.status() == Status::Over {
            return;
        }
        state.apply(Action::HardDrop);
    }
    panic!("stack never topped out");
}

#[test]
fn test_start_runs_only_from_idle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.status(), Status::Idle);

    assert!(state.apply(Action::Start));
    assert_eq!(state.status(), Status::Running);
    assert!(state.active().is_some());

    // A second start is a silent no-op.
    assert!(!state.apply(Action::Start));
    assert_eq!(state.status(), Status::Running);
}

#[test]
fn test_gameplay_actions_are_ignored_while_idle() {
    let mut state = GameState::new(12345);

    assert!(!state.apply(Action::Tick));
    assert!(!state.apply(Action::HardDrop));
    assert!(!state.apply(Action::Move(Shift::Left)));
    assert_eq!(state.metrics().score, 0);
    assert!(state.active().is_none());
}

#[test]
fn test_pause_freezes_gameplay() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    assert!(state.apply(Action::Pause));
    assert_eq!(state.status(), Status::Paused);
    assert!(!state.apply(Action::Tick));
    assert!(!state.apply(Action::Move(Shift::Left)));

    assert!(state.apply(Action::Resume));
    assert_eq!(state.status(), Status::Running);
    assert!(state.apply(Action::Move(Shift::Left)));
}

#[test]
fn test_soft_drop_scores_one_point_per_cell() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    assert!(state.apply(Action::SoftDrop));
    assert_eq!(state.metrics().score, 1);
}

#[test]
fn test_hard_drop_scores_double_per_cell() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    // Every kind spawns with its lowest block on row 1, twenty rows up.
    assert!(state.apply(Action::HardDrop));
    assert_eq!(state.metrics().score, 40);
    assert_eq!(state.metrics().total_pieces, 2);
}

#[test]
fn test_tick_descends_without_scoring() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);
    let y0 = state.active().unwrap().y;

    assert!(state.apply(Action::Tick));
    assert_eq!(state.active().unwrap().y, y0 + 1);
    assert_eq!(state.metrics().score, 0);
}

#[test]
fn test_rotation_spends_no_points() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);
    state.apply(Action::Tick);
    state.apply(Action::Tick);

    state.apply(Action::Rotate(Spin::Cw));
    state.apply(Action::Rotate(Spin::Ccw));
    assert_eq!(state.metrics().score, 0);
}

#[test]
fn test_hold_stashes_and_swaps() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    let before = state.snapshot();
    let first = before.active.unwrap().kind;
    let upcoming = before.preview[0];

    assert!(state.apply(Action::Hold));
    assert_eq!(state.hold_slot(), Some(first));
    assert_eq!(state.active().unwrap().kind, upcoming);
    assert!(!state.can_hold());

    // Blocked until the current piece locks.
    assert!(!state.apply(Action::Hold));

    state.apply(Action::HardDrop);
    assert!(state.can_hold());
    assert!(state.apply(Action::Hold));
    assert_eq!(state.active().unwrap().kind, first);
}

#[test]
fn test_stack_tops_out_into_game_over() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    play_until_over(&mut state);
    assert_eq!(state.status(), Status::Over);
    assert!(state.active().is_none());

    // Terminal state rejects gameplay but keeps the record.
    let score = state.metrics().score;
    assert!(!state.apply(Action::HardDrop));
    assert!(!state.apply(Action::Pause));
    assert_eq!(state.metrics().score, score);
}

#[test]
fn test_reset_starts_a_fresh_run_and_keeps_the_best() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);
    play_until_over(&mut state);
    let best = state.metrics().score;
    assert!(best > 0, "hard drops scored something");

    assert!(state.apply(Action::Reset));
    assert_eq!(state.status(), Status::Running);
    assert_eq!(state.metrics().score, 0);
    assert_eq!(state.metrics().lines, 0);
    assert_eq!(state.metrics().level, 1);
    assert_eq!(state.board().occupied_count(), 0);
    assert!(state.active().is_some());
    assert_eq!(state.high_score(), best);
}

#[test]
fn test_hydrate_overwrites_the_stored_best() {
    let mut state = GameState::new(12345);

    assert!(state.apply(Action::HydrateHighScore(500)));
    assert_eq!(state.high_score(), 500);

    // Hydration replaces rather than maxes; the store owns the record.
    assert!(state.apply(Action::HydrateHighScore(100)));
    assert_eq!(state.high_score(), 100);

    // Unchanged value reports no change.
    assert!(!state.apply(Action::HydrateHighScore(100)));
}

#[test]
fn test_same_seed_and_script_replay_identically() {
    let script = [
        Action::Start,
        Action::Move(Shift::Left),
        Action::Tick,
        Action::Rotate(Spin::Cw),
        Action::SoftDrop,
        Action::HardDrop,
        Action::Tick,
        Action::Move(Shift::Right),
        Action::Rotate(Spin::Half),
        Action::HardDrop,
        Action::Hold,
        Action::Tick,
        Action::HardDrop,
    ];

    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    for action in script {
        a.apply(action);
        b.apply(action);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_into_reuses_a_buffer() {
    let mut state = GameState::new(12345);
    state.apply(Action::Start);

    let mut buffer = GameSnapshot::default();
    state.snapshot_into(&mut buffer);
    state.apply(Action::Tick);
    state.snapshot_into(&mut buffer);

    assert_eq!(buffer, state.snapshot());
    assert_eq!(buffer.status, Status::Running);
}
