use glam::DVec2;

use crate::shared::KochOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan-Verschiebung in Pixeln
    pub translation: DVec2,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f64; 2],
    /// Mausposition beim Drag-Start (None = kein Drag aktiv)
    pub drag_anchor: Option<DVec2>,
}

impl ViewState {
    /// Startzustand aus den Optionen.
    pub fn from_options(options: &KochOptions) -> Self {
        Self {
            translation: DVec2::ZERO,
            viewport_size: options.viewport_size,
            drag_anchor: None,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport(&self) -> DVec2 {
        DVec2::from_array(self.viewport_size)
    }
}
