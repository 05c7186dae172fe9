//! Rekursive Koch-Unterteilung einer einzelnen Strecke.
//!
//! Aus `S → E` werden vier Teilstrecken `S → Pa → Pc → Pb → E`:
//! - `Pa` liegt bei 1/3, `Pb` bei 2/3 der Strecke
//! - `Pc` ist die Spitze: `Pb` um +60° um `Pa` gedreht
//!
//! Jede Stufe liefert einen frisch aufgebauten `Vec`; es gibt keinen geteilten Sammel-Puffer.

use std::f64::consts::FRAC_PI_3;

use crate::error::KochError;
use crate::geometry::{Point, Rotation};
use crate::segment::Segment;
use crate::snowflake::BuildLimits;

/// Rotation für die Spitze jeder Unterteilung (+60°).
pub fn tip_rotation() -> Rotation {
    Rotation::from_radians(FRAC_PI_3)
}

/// Koch-Kurve von `start` nach `end` in Tiefe `depth` (4^depth Segmente).
///
/// Tiefe 0 liefert die Eingabestrecke unverändert. Oberhalb von `limits.max_depth`
/// gibt es [`KochError::ResourceLimit`], bevor irgendetwas alloziert wird.
pub fn koch_curve(
    start: Point,
    end: Point,
    depth: u32,
    limits: &BuildLimits,
) -> Result<Vec<Segment>, KochError> {
    if depth > limits.max_depth {
        return Err(KochError::ResourceLimit {
            depth: u64::from(depth),
            max_depth: limits.max_depth,
        });
    }
    let tip = tip_rotation();
    Ok(subdivide(start, end, depth, &tip))
}

/// Eckpunkte der Koch-Kurve als Polyline (4^depth + 1 Punkte, erster = `start`, letzter = `end`).
pub fn koch_points(
    start: Point,
    end: Point,
    depth: u32,
    limits: &BuildLimits,
) -> Result<Vec<Point>, KochError> {
    let segments = koch_curve(start, end, depth, limits)?;
    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(start);
    points.extend(segments.iter().map(|s| s.end));
    Ok(points)
}

/// Rekursionskern. `tip` wird einmal pro Build berechnet und durchgereicht.
pub(crate) fn subdivide(start: Point, end: Point, depth: u32, tip: &Rotation) -> Vec<Segment> {
    if depth == 0 {
        return vec![Segment::new(start, end)];
    }

    let step = (end - start) / 3.0;
    let a = start + step;
    let b = start + 2.0 * step;
    let c = tip.rotate_about(a, b);

    let mut out = Vec::with_capacity(segment_count(depth));
    for (from, to) in [(start, a), (a, c), (c, b), (b, end)] {
        out.extend(subdivide(from, to, depth - 1, tip));
    }
    out
}

/// Anzahl der Segmente einer Seite in Tiefe `depth`: 4^depth.
///
/// Sättigt bei `usize::MAX` statt zu überlaufen.
pub fn segment_count(depth: u32) -> usize {
    4usize.checked_pow(depth).unwrap_or(usize::MAX)
}
