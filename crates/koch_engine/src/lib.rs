//! `koch_engine` — Geometrie-Kern für Koch-Schneeflocken.
//!
//! Zwei Bausteine:
//! - [`koch`]: rekursive Unterteilung einer Strecke in die Koch-Kurve
//! - [`snowflake`]: Dreieck aus einer Basiskante ableiten und alle drei Seiten
//!   (optional plus Vorgänger-Iteration) zu einem Umriss zusammensetzen
//!
//! Die Engine rechnet ausschließlich in `f64`. Gerundet wird erst an der
//! Übergabe an einen Renderer ([`Segment::to_pixels`]).
//!
//! # Beispiel
//! ```
//! use glam::DVec2;
//! use koch_engine::build_koch_outline;
//!
//! let outline = build_koch_outline(DVec2::new(200.0, 500.0), DVec2::new(600.0, 500.0), 2, true)?;
//! assert_eq!(outline.current.len(), 48);
//! assert_eq!(outline.previous.len(), 12);
//! # Ok::<(), koch_engine::KochError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod koch;
pub mod segment;
pub mod snowflake;

pub use error::KochError;
pub use geometry::{Bounds, Point, Rotation};
pub use koch::{koch_curve, koch_points};
pub use segment::{PixelSegment, Segment, SegmentStyle};
pub use snowflake::{
    build_koch_outline, ApexRule, BuildLimits, BuildRequest, Depth, Outline, Triangle,
    DEFAULT_MAX_DEPTH,
};
