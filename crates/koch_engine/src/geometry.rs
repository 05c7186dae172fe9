//! Geometrische Grundbausteine: Punkt, Rotation um einen Pivot, Bounding-Box.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D-Punkt in Bildschirmkoordinaten (+Y zeigt nach unten).
pub type Point = DVec2;

/// Rotation um einen festen Winkel mit vorberechnetem Sinus/Kosinus.
///
/// Einmal pro Build erzeugen und für jede Unterteilung wiederverwenden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// (cos θ, sin θ)
    unit: DVec2,
}

impl Rotation {
    /// Erstellt eine Rotation aus einem Winkel in Radiant (positiv = gegen den Uhrzeigersinn
    /// im mathematischen Sinn; auf dem Bildschirm mit +Y nach unten also im Uhrzeigersinn).
    pub fn from_radians(theta: f64) -> Self {
        Self {
            unit: DVec2::from_angle(theta),
        }
    }

    /// Erstellt eine Rotation aus einem Winkel in Grad.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Kosinus des Rotationswinkels.
    pub fn cos(&self) -> f64 {
        self.unit.x
    }

    /// Sinus des Rotationswinkels.
    pub fn sin(&self) -> f64 {
        self.unit.y
    }

    /// Dreht `point` um `pivot`.
    ///
    /// `x' = o.x + (x - o.x)·cos θ - (y - o.y)·sin θ`
    /// `y' = o.y + (y - o.y)·cos θ + (x - o.x)·sin θ`
    pub fn rotate_about(&self, pivot: Point, point: Point) -> Point {
        pivot + (point - pivot).rotate(self.unit)
    }
}

/// Achsenparallele Bounding-Box über eine Menge von Punkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Kleinste Box, die alle Punkte enthält. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Breite der Box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe der Box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Um `offset` verschobene Box.
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Vereinigung zweier Boxen.
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
