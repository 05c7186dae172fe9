use crate::app::CommandLog;
use crate::shared::KochOptions;

use super::{AnimationState, FractalState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Basiskante, Tiefe und zuletzt gebauter Umriss
    pub fractal: FractalState,
    /// Pan-Verschiebung und Viewport
    pub view: ViewState,
    /// Timer-gesteuerte Animation der Tiefe
    pub animation: AnimationState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Grenzen, Startwerte)
    pub options: KochOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(KochOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Der Umriss ist noch nicht gebaut; dafür `AppCommand::RebuildOutline` ausführen.
    pub fn with_options(options: KochOptions) -> Self {
        Self {
            fractal: FractalState::from_options(&options),
            view: ViewState::from_options(&options),
            animation: AnimationState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Segmente im aktuellen Umriss (für Status-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.fractal.outline.as_ref().map_or(0, |o| o.len())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
