//! Handler für die Timer-gesteuerte Tiefen-Animation.

use std::time::Duration;

use crate::app::AppState;
use crate::shared::KochOptions;

/// Startet oder stoppt die Animation. Beim Stoppen verfällt angesammelte Zeit.
pub fn set_running(state: &mut AppState, running: bool) {
    state.animation.running = running;
    if !running {
        state.animation.accumulated = Duration::ZERO;
    }
    log::info!(
        "Animation {}",
        if running { "gestartet" } else { "gestoppt" }
    );
}

/// Bucht verstrichene Zeit auf den Animations-Akkumulator.
pub fn consume_time(state: &mut AppState, seconds: f64) {
    let interval = state.options.animation_interval();
    state.animation.consume(seconds, interval);
}

/// Führt `steps` Animationsschritte aus.
///
/// Die Tiefenfolge läuft über wenige Werte und wiederholt sich; sobald eine Tiefe
/// erneut auftritt, wird der Rest per Periode abgekürzt statt Schritt für Schritt.
pub fn advance(state: &mut AppState, steps: u64) {
    // seen[i] = Tiefe nach i Schritten
    let mut seen = vec![state.fractal.depth];
    let mut remaining = steps;
    while remaining > 0 {
        let current = seen[seen.len() - 1];
        let next = next_depth(&state.options, current);
        remaining -= 1;
        if let Some(pos) = seen.iter().position(|&d| d == next) {
            let period = (seen.len() - pos) as u64;
            let offset = (remaining % period) as usize;
            state.fractal.depth = seen[pos + offset];
            return;
        }
        seen.push(next);
    }
    state.fractal.depth = seen[seen.len() - 1];
}

/// Ein Schritt: oberhalb von `animation_wrap_after` zurück auf 0, sonst +1.
fn next_depth(options: &KochOptions, depth: u32) -> u32 {
    let next = if depth > options.animation_wrap_after {
        0
    } else {
        depth.saturating_add(1)
    };
    options.clamp_depth(next)
}
