use glam::DVec2;
use koch_snowflake::{AppController, AppIntent, AppState, KochError, KochOptions, SegmentStyle};

fn started() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("Reset sollte einen Umriss bauen");
    (controller, state)
}

#[test]
fn test_reset_builds_raw_triangle() {
    let (_, state) = started();
    let outline = state.fractal.outline.as_ref().expect("Umriss erwartet");

    assert_eq!(outline.current.len(), 3);
    assert!(outline.previous.is_empty());
    assert_eq!(state.segment_count(), 3);
}

#[test]
fn test_depth_changed_rebuilds_and_logs_commands() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 3 })
        .expect("DepthChanged sollte durchlaufen");

    assert_eq!(state.fractal.depth, 3);
    assert_eq!(state.segment_count(), 3 * 64);

    let recent: Vec<_> = state.command_log.recent().collect();
    assert_eq!(&recent[recent.len() - 2..], &["SetDepth", "RebuildOutline"]);
    assert_eq!(state.command_log.rebuilds(), 2);
}

#[test]
fn test_negative_depth_is_rejected_without_touching_outline() {
    let (mut controller, mut state) = started();
    let before = state.fractal.outline.clone();

    let err = controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: -1 })
        .expect_err("negative Tiefe muss fehlschlagen");

    assert!(matches!(
        err.downcast_ref::<KochError>(),
        Some(KochError::InvalidArgument(_))
    ));
    assert_eq!(state.fractal.outline, before);
    // RebuildOutline wurde nach dem Fehler nicht mehr ausgeführt
    assert_eq!(state.command_log.last(), Some("SetDepth"));
    assert_eq!(state.command_log.rebuilds(), 1);
}

#[test]
fn test_show_previous_adds_overlay() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 2 })
        .expect("DepthChanged sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ShowPreviousToggled { enabled: true })
        .expect("Toggle sollte durchlaufen");

    let outline = state.fractal.outline.as_ref().expect("Umriss erwartet");
    assert_eq!(outline.current.len(), 48);
    assert_eq!(outline.previous.len(), 12);

    let scene = controller.build_render_scene(&state);
    let styles: Vec<_> = scene.lines().map(|s| s.style).collect();
    assert_eq!(styles.len(), 60);
    assert_eq!(styles[0], SegmentStyle::Previous);
    assert_eq!(styles[59], SegmentStyle::Current);

    controller
        .handle_intent(&mut state, AppIntent::ShowPreviousToggled { enabled: false })
        .expect("Toggle sollte durchlaufen");
    assert_eq!(state.segment_count(), 48);
}

#[test]
fn test_animation_cycles_through_depths() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(&mut state, AppIntent::AnimationToggled { enabled: true })
        .expect("Animation sollte starten");

    let mut depths = Vec::new();
    for _ in 0..7 {
        controller
            .handle_intent(&mut state, AppIntent::AnimationTick)
            .expect("Tick sollte durchlaufen");
        depths.push(state.fractal.depth);
    }
    assert_eq!(depths, vec![1, 2, 3, 4, 5, 6, 0]);
    assert_eq!(state.segment_count(), 3);
}

#[test]
fn test_time_elapsed_drives_animation() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(&mut state, AppIntent::AnimationToggled { enabled: true })
        .expect("Animation sollte starten");
    controller
        .handle_intent(&mut state, AppIntent::TimeElapsed { seconds: 0.75 })
        .expect("Zeit sollte gebucht werden");
    assert_eq!(state.fractal.depth, 0);

    controller
        .handle_intent(&mut state, AppIntent::TimeElapsed { seconds: 1.5 })
        .expect("Zeit sollte gebucht werden");
    assert_eq!(state.fractal.depth, 2);
    assert_eq!(state.segment_count(), 48);
}

#[test]
fn test_huge_time_elapsed_runs_one_batched_step() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(&mut state, AppIntent::AnimationToggled { enabled: true })
        .expect("Animation sollte starten");
    controller
        .handle_intent(&mut state, AppIntent::TimeElapsed { seconds: 1e12 })
        .expect("Zeit sollte gebucht werden");

    // 10^12 Schritte über die Tiefen 0..=6 landen bei 10^12 mod 7 = 1
    assert_eq!(state.fractal.depth, 1);
    assert_eq!(state.segment_count(), 12);
    assert_eq!(state.command_log.animation_steps(), 1_000_000_000_000);
    assert_eq!(state.command_log.rebuilds(), 2);
    assert!(state.animation.accumulated.as_secs_f64() < 1.0);
}

#[test]
fn test_depth_beyond_u32_is_clamped_to_slider_maximum() {
    let (mut controller, mut state) = started();
    state.options.depth_max = 4;

    controller
        .handle_intent(
            &mut state,
            AppIntent::DepthChanged {
                depth: 5_000_000_000,
            },
        )
        .expect("große Tiefe wird begrenzt");

    assert_eq!(state.fractal.depth, 4);
    assert_eq!(state.segment_count(), 3 * 256);
}

#[test]
fn test_ticks_are_ignored_while_stopped() {
    let (mut controller, mut state) = started();
    controller
        .handle_intent(&mut state, AppIntent::AnimationTick)
        .expect("Tick sollte durchlaufen");
    assert_eq!(state.fractal.depth, 0);
}

#[test]
fn test_drag_pans_view_and_keeps_geometry() {
    let (mut controller, mut state) = started();
    let before = state.fractal.outline.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DragStarted {
                screen_pos: DVec2::new(500.0, 500.0),
            },
        )
        .expect("Drag-Start");
    controller
        .handle_intent(
            &mut state,
            AppIntent::DragMoved {
                screen_pos: DVec2::new(550.0, 500.0),
            },
        )
        .expect("Drag-Update");
    controller
        .handle_intent(&mut state, AppIntent::DragEnded)
        .expect("Drag-Ende");

    assert!((state.view.translation.x - 1.0).abs() < 1e-9);
    assert_eq!(state.view.translation.y, 0.0);
    assert!(state.view.drag_anchor.is_none());
    assert_eq!(state.fractal.outline, before);
}

#[test]
fn test_base_edge_drag_moves_geometry() {
    let (mut controller, mut state) = started();

    controller
        .handle_intent(
            &mut state,
            AppIntent::BaseEdgeDragged {
                delta: DVec2::new(-50.0, 20.0),
            },
        )
        .expect("Verschieben sollte durchlaufen");

    let outline = state.fractal.outline.as_ref().expect("Umriss erwartet");
    assert_eq!(outline.current[0].start, DVec2::new(150.0, 520.0));
    assert_eq!(outline.current[0].end, DVec2::new(550.0, 520.0));
}

#[test]
fn test_resource_limit_from_options_is_reported() {
    let (mut controller, mut state) = started();
    let options = KochOptions {
        max_build_depth: 2,
        ..KochOptions::default()
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("Optionen sollten übernommen werden");

    let err = controller
        .handle_intent(&mut state, AppIntent::DepthChanged { depth: 5 })
        .expect_err("Limit muss greifen");
    assert!(matches!(
        err.downcast_ref::<KochError>(),
        Some(KochError::ResourceLimit {
            depth: 5,
            max_depth: 2
        })
    ));
    assert_eq!(state.segment_count(), 3);
}

#[test]
fn test_rotated_apex_rule_matches_reference_shape() {
    let (mut controller, mut state) = started();
    let reference = state.fractal.outline.clone().expect("Umriss erwartet");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ApexRuleChanged {
                rule: koch_snowflake::ApexRule::Rotated,
            },
        )
        .expect("Regelwechsel sollte durchlaufen");

    let rotated = state.fractal.outline.as_ref().expect("Umriss erwartet");
    let diff = (rotated.triangle.apex - reference.triangle.apex).length();
    assert!(diff < 1e-9, "Apex weicht um {diff} ab");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = started();
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    match state.command_log.last() {
        Some("RequestExit") => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
