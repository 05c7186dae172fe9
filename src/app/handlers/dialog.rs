//! Handler für Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::KochOptions;

/// Übernimmt neue Optionen. Die Tiefe wird in den neuen Slider-Bereich gezogen.
pub fn apply_options(state: &mut AppState, options: KochOptions) {
    state.fractal.depth = options.clamp_depth(state.fractal.depth);
    state.fractal.apex_rule = options.apex_rule;
    state.options = options;
    log::info!("Optionen übernommen");
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
