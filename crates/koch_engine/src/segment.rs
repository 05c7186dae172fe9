//! Zeichenbare Strecken mit Stil-Markierung.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Unterscheidet den aktuellen Umriss vom Overlay der Vorgänger-Iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SegmentStyle {
    /// Umriss der gewählten Tiefe
    #[default]
    Current,
    /// Umriss der Tiefe d-1
    Previous,
}

/// Gerichtete Strecke von `start` nach `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub style: SegmentStyle,
}

impl Segment {
    /// Neue Strecke im Stil `Current`.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            style: SegmentStyle::Current,
        }
    }

    /// Kopie mit anderem Stil.
    pub fn with_style(self, style: SegmentStyle) -> Self {
        Self { style, ..self }
    }

    /// Länge der Strecke.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Beide Endpunkte endlich?
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Rundet auf ganze Pixel, nach Verschiebung um `offset`.
    ///
    /// Nur an der Renderer-Grenze verwenden, nie zwischen Rekursionsstufen.
    /// Koordinaten außerhalb von `i32` werden auf `i32::MIN..=i32::MAX` begrenzt,
    /// NaN wird zu 0.
    pub fn to_pixels(&self, offset: Point) -> PixelSegment {
        let round = |p: Point| {
            let p = (p + offset).round();
            [to_pixel_coord(p.x), to_pixel_coord(p.y)]
        };
        PixelSegment {
            start: round(self.start),
            end: round(self.end),
            style: self.style,
        }
    }
}

fn to_pixel_coord(v: f64) -> i32 {
    if v.is_nan() {
        0
    } else {
        v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

/// Ganzzahlige Darstellung einer Strecke für Pixel-Renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSegment {
    pub start: [i32; 2],
    pub end: [i32; 2],
    pub style: SegmentStyle,
}
