//! Handler für Pan-Verschiebung und Viewport.

use glam::DVec2;

use super::fractal::clamp_delta;
use crate::app::AppState;

/// Merkt sich die Mausposition beim Drag-Start.
pub fn begin_pan(state: &mut AppState, anchor: DVec2) {
    state.view.drag_anchor = Some(anchor);
}

/// Verschiebt die Ansicht um `pan_factor · (Anker − Mausposition)`.
///
/// Der Anker bleibt während des gesamten Drags fest, die Verschiebung
/// summiert sich also pro Bewegungs-Event auf. Pro Achse wird die Bewegung
/// verworfen, wenn der Umriss danach den Viewport verlassen würde.
pub fn pan(state: &mut AppState, screen_pos: DVec2) {
    let Some(anchor) = state.view.drag_anchor else {
        return;
    };

    let delta = state.options.pan_factor * (anchor - screen_pos);
    let allowed = match state.fractal.outline.as_ref().and_then(|o| o.bounds()) {
        Some(bounds) => clamp_delta(
            bounds.translated(state.view.translation),
            delta,
            state.view.viewport(),
        ),
        None => delta,
    };
    state.view.translation += allowed;
}

/// Beendet den Drag.
pub fn end_pan(state: &mut AppState) {
    state.view.drag_anchor = None;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    state.view.viewport_size = size;
}

/// Setzt Verschiebung und Basiskante auf die Werte aus den Optionen zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.translation = DVec2::ZERO;
    state.view.drag_anchor = None;
    state.fractal.base_start = state.options.base_start_point();
    state.fractal.base_end = state.options.base_end_point();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::fractal::rebuild_outline;
    use approx::assert_abs_diff_eq;

    fn built_state() -> AppState {
        let mut state = AppState::new();
        rebuild_outline(&mut state).expect("Build erwartet");
        state
    }

    #[test]
    fn pan_accumulates_relative_to_fixed_anchor() {
        let mut state = built_state();
        begin_pan(&mut state, DVec2::new(500.0, 500.0));

        pan(&mut state, DVec2::new(600.0, 450.0));
        assert_abs_diff_eq!(state.view.translation.x, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.view.translation.y, -1.0, epsilon = 1e-9);

        // gleicher Abstand zum Anker → gleiche Verschiebung erneut
        pan(&mut state, DVec2::new(600.0, 450.0));
        assert_abs_diff_eq!(state.view.translation.x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.view.translation.y, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_without_anchor_does_nothing() {
        let mut state = built_state();
        pan(&mut state, DVec2::new(900.0, 900.0));
        assert_eq!(state.view.translation, DVec2::ZERO);
    }

    #[test]
    fn pan_is_blocked_at_viewport_edge() {
        let mut state = built_state();
        // Umriss reicht bei Tiefe 0 von x=200 bis x=600
        state.view.translation = DVec2::new(399.0, 0.0);
        begin_pan(&mut state, DVec2::ZERO);

        pan(&mut state, DVec2::new(100.0, 0.0));
        assert_eq!(state.view.translation, DVec2::new(399.0, 0.0));

        pan(&mut state, DVec2::new(-100.0, 0.0));
        assert_abs_diff_eq!(state.view.translation.x, 397.0, epsilon = 1e-9);
    }

    #[test]
    fn end_pan_clears_anchor() {
        let mut state = built_state();
        begin_pan(&mut state, DVec2::ONE);
        end_pan(&mut state);
        assert!(state.view.drag_anchor.is_none());
    }

    #[test]
    fn reset_view_restores_base_edge() {
        let mut state = built_state();
        state.view.translation = DVec2::new(5.0, 5.0);
        state.fractal.base_start += DVec2::X;
        state.fractal.base_end += DVec2::X;

        reset_view(&mut state);
        assert_eq!(state.view.translation, DVec2::ZERO);
        assert_eq!(state.fractal.base_start, DVec2::new(200.0, 500.0));
        assert_eq!(state.fractal.base_end, DVec2::new(600.0, 500.0));
    }
}
