//! Handler für Tiefe, Overlay, Basiskante und Neuaufbau des Umrisses.

use std::sync::Arc;

use anyhow::Context;
use glam::DVec2;
use koch_engine::{ApexRule, Bounds, Depth, Triangle};

use crate::app::AppState;

/// Setzt die Tiefe. Negative Werte sind eine Vertragsverletzung und werden abgelehnt,
/// zu große Werte (beliebig groß) auf den Slider-Bereich begrenzt.
pub fn set_depth(state: &mut AppState, depth: i64) -> anyhow::Result<()> {
    let capped = depth.min(i64::from(state.options.depth_max));
    let requested = Depth::try_from(capped).context("Tiefe abgelehnt")?;
    let clamped = state.options.clamp_depth(requested.get());
    if i64::from(clamped) != depth {
        log::debug!("Tiefe {} auf {} begrenzt", depth, clamped);
    }
    state.fractal.depth = clamped;
    Ok(())
}

/// Schaltet das Overlay der Vorgänger-Iteration.
pub fn set_show_previous(state: &mut AppState, enabled: bool) {
    state.fractal.show_previous = enabled;
}

/// Setzt die Regel für den dritten Dreieckspunkt.
pub fn set_apex_rule(state: &mut AppState, rule: ApexRule) {
    state.fractal.apex_rule = rule;
}

/// Verschiebt beide Punkte der Basiskante um `delta`.
///
/// Pro Achse wird die Bewegung verworfen, wenn das Ausgangsdreieck danach
/// den Viewport verlassen würde.
pub fn translate_base_edge(state: &mut AppState, delta: DVec2) {
    let fractal = &state.fractal;
    let Ok(triangle) = Triangle::from_base(fractal.base_start, fractal.base_end, fractal.apex_rule)
    else {
        // Ungültige Kante: ohne Dreieck keine Grenzprüfung, Bewegung trotzdem zulassen
        state.fractal.base_start += delta;
        state.fractal.base_end += delta;
        return;
    };

    let Some(bounds) = Bounds::from_points([triangle.base_start, triangle.base_end, triangle.apex])
    else {
        return;
    };

    let allowed = clamp_delta(bounds, delta, state.view.viewport());
    state.fractal.base_start += allowed;
    state.fractal.base_end += allowed;
}

/// Baut den Umriss aus dem aktuellen State neu.
///
/// Bei Fehler bleibt der zuletzt gebaute Umriss erhalten.
pub fn rebuild_outline(state: &mut AppState) -> anyhow::Result<()> {
    let request = state.fractal.build_request();
    match request.build(&state.options.build_limits()) {
        Ok(outline) => {
            log::debug!(
                "Umriss neu gebaut: Tiefe {}, {} Segmente",
                outline.depth.get(),
                outline.len()
            );
            state.fractal.outline = Some(Arc::new(outline));
            Ok(())
        }
        Err(e) => {
            log::warn!("Umriss konnte nicht gebaut werden: {}", e);
            Err(e).context("Neuaufbau des Koch-Umrisses fehlgeschlagen")
        }
    }
}

/// Nullt die Komponenten von `delta`, die `bounds` aus `[0, viewport]` schieben würden.
pub(crate) fn clamp_delta(bounds: Bounds, delta: DVec2, viewport: DVec2) -> DVec2 {
    let moved = bounds.translated(delta);
    let mut allowed = delta;
    if moved.max.x - viewport.x > 0.0 || moved.min.x < 0.0 {
        allowed.x = 0.0;
    }
    if moved.max.y - viewport.y > 0.0 || moved.min.y < 0.0 {
        allowed.y = 0.0;
    }
    allowed
}
