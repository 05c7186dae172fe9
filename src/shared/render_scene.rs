//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.
//! Gerundet wird ausschließlich hier ([`RenderScene::pixel_lines`]).

use std::sync::Arc;

use glam::DVec2;
use koch_engine::{Bounds, Outline, PixelSegment, Segment, SegmentStyle};
use serde::Serialize;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Zuletzt gebauter Umriss (None = noch kein erfolgreicher Build)
    pub outline: Option<Arc<Outline>>,
    /// Pan-Verschiebung in Pixeln
    pub translation: DVec2,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f64; 2],
    /// Farbe des aktuellen Umrisses
    pub color_current: [f32; 4],
    /// Farbe des Vorgänger-Overlays
    pub color_previous: [f32; 4],
    /// Hintergrundfarbe
    pub color_background: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob ein Umriss zum Zeichnen vorhanden ist.
    pub fn has_outline(&self) -> bool {
        self.outline.is_some()
    }

    /// Alle Segmente in Zeichenreihenfolge (Overlay zuerst).
    pub fn lines(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.outline.iter().flat_map(|o| o.segments())
    }

    /// Farbe für einen Segment-Stil.
    pub fn color_for(&self, style: SegmentStyle) -> [f32; 4] {
        match style {
            SegmentStyle::Current => self.color_current,
            SegmentStyle::Previous => self.color_previous,
        }
    }

    /// Auf ganze Pixel gerundete Segmente inklusive Pan-Verschiebung.
    pub fn pixel_lines(&self) -> Vec<PixelSegment> {
        self.lines()
            .map(|s| s.to_pixels(self.translation))
            .collect()
    }

    /// Bounding-Box des Umrisses in Bildschirmkoordinaten (inkl. Verschiebung).
    pub fn screen_bounds(&self) -> Option<Bounds> {
        self.outline
            .as_ref()
            .and_then(|o| o.bounds())
            .map(|b| b.translated(self.translation))
    }

    /// Serialisierbare Momentaufnahme für Ausgabe auf stdout.
    pub fn export(&self) -> SceneExport {
        SceneExport {
            depth: self.outline.as_ref().map(|o| o.depth.get()),
            viewport_size: self.viewport_size,
            translation: self.translation.to_array(),
            bounds: self.screen_bounds(),
            color_current: self.color_current,
            color_previous: self.color_previous,
            color_background: self.color_background,
            lines: self.pixel_lines(),
        }
    }
}

/// JSON-Darstellung einer Render-Szene (gerundete Pixelkoordinaten).
#[derive(Debug, Clone, Serialize)]
pub struct SceneExport {
    pub depth: Option<u32>,
    pub viewport_size: [f64; 2],
    pub translation: [f64; 2],
    pub bounds: Option<Bounds>,
    pub color_current: [f32; 4],
    pub color_previous: [f32; 4],
    pub color_background: [f32; 4],
    pub lines: Vec<PixelSegment>,
}
