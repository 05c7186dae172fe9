//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        outline: state.fractal.outline.clone(),
        translation: state.view.translation,
        viewport_size: state.view.viewport_size,
        color_current: state.options.color_current,
        color_previous: state.options.color_previous,
        color_background: state.options.color_background,
    }
}
