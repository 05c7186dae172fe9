use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::DVec2;

#[test]
fn depth_change_sets_depth_and_rebuilds() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::DepthChanged { depth: 3 });
    assert_eq!(
        commands,
        vec![AppCommand::SetDepth { depth: 3 }, AppCommand::RebuildOutline]
    );
}

#[test]
fn animation_tick_is_ignored_when_stopped() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::AnimationTick).is_empty());
}

#[test]
fn time_elapsed_batches_due_ticks_into_one_step() {
    let mut state = AppState::new();
    state.animation.running = true;

    let commands = map_intent_to_commands(&state, AppIntent::TimeElapsed { seconds: 2.5 });
    assert_eq!(
        commands,
        vec![
            AppCommand::ConsumeAnimationTime { seconds: 2.5 },
            AppCommand::AdvanceAnimation { steps: 2 },
            AppCommand::RebuildOutline,
        ]
    );
}

#[test]
fn huge_time_elapsed_stays_three_commands() {
    let mut state = AppState::new();
    state.animation.running = true;

    let commands = map_intent_to_commands(&state, AppIntent::TimeElapsed { seconds: 1e12 });
    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[1],
        AppCommand::AdvanceAnimation {
            steps: 1_000_000_000_000
        }
    );
}

#[test]
fn time_below_interval_only_books_time() {
    let mut state = AppState::new();
    state.animation.running = true;

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::TimeElapsed { seconds: 0.4 }),
        vec![AppCommand::ConsumeAnimationTime { seconds: 0.4 }]
    );
}

#[test]
fn time_elapsed_without_animation_is_empty() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::TimeElapsed { seconds: 9.0 }).is_empty());
}

#[test]
fn drag_moved_without_anchor_is_ignored() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragMoved {
            screen_pos: DVec2::new(10.0, 10.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn reset_rebuilds_after_resetting_view() {
    let state = AppState::new();
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ResetRequested),
        vec![AppCommand::ResetView, AppCommand::RebuildOutline]
    );
}
