//! Koch-Schneeflocke Library.
//! Geometrie-Kern (`koch_engine`) plus UI-unabhängiger Application-Layer,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod cli;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use cli::CliArgs;
pub use koch_engine::{
    build_koch_outline, ApexRule, Bounds, BuildLimits, BuildRequest, Depth, KochError, Outline,
    PixelSegment, Segment, SegmentStyle, Triangle,
};
pub use shared::{KochOptions, RenderScene, SceneExport};
