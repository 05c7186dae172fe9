use std::sync::Arc;

use glam::DVec2;
use koch_engine::{ApexRule, BuildRequest, Depth, Outline};

use crate::shared::KochOptions;

/// Fraktal-bezogener Zustand.
///
/// Die Basiskante ist der einzige Zustand, der einen Build überlebt;
/// der Umriss selbst ist nur ein Cache des letzten erfolgreichen Builds.
#[derive(Debug, Clone)]
pub struct FractalState {
    /// Startpunkt der Basiskante
    pub base_start: DVec2,
    /// Endpunkt der Basiskante
    pub base_end: DVec2,
    /// Aktuelle Tiefe
    pub depth: u32,
    /// Vorgänger-Iteration als Overlay anzeigen
    pub show_previous: bool,
    /// Regel für den dritten Dreieckspunkt
    pub apex_rule: ApexRule,
    /// Zuletzt erfolgreich gebauter Umriss
    pub outline: Option<Arc<Outline>>,
}

impl FractalState {
    /// Startzustand aus den Optionen.
    pub fn from_options(options: &KochOptions) -> Self {
        Self {
            base_start: options.base_start_point(),
            base_end: options.base_end_point(),
            depth: options.clamp_depth(options.depth_initial),
            show_previous: options.show_previous,
            apex_rule: options.apex_rule,
            outline: None,
        }
    }

    /// Build-Request für den aktuellen Zustand.
    pub fn build_request(&self) -> BuildRequest {
        BuildRequest::new(self.base_start, self.base_end, Depth::new(self.depth))
            .with_previous(self.show_previous)
            .with_apex_rule(self.apex_rule)
    }
}
