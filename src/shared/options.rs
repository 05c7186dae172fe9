//! Zentrale Konfiguration für die Koch-Schneeflocke.
//!
//! `KochOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use glam::DVec2;
use koch_engine::{ApexRule, BuildLimits, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

// ── Ausgangsdreieck ─────────────────────────────────────────────────

/// Startpunkt der Basiskante (Bildschirmkoordinaten, +Y nach unten).
pub const BASE_START: [f64; 2] = [200.0, 500.0];
/// Endpunkt der Basiskante.
pub const BASE_END: [f64; 2] = [600.0, 500.0];

// ── Tiefe ───────────────────────────────────────────────────────────

/// Kleinste wählbare Tiefe.
pub const DEPTH_MIN: u32 = 0;
/// Größte wählbare Tiefe (Slider-Bereich).
pub const DEPTH_MAX: u32 = 10;
/// Tiefe beim Start.
pub const DEPTH_INITIAL: u32 = 0;

// ── Animation ───────────────────────────────────────────────────────

/// Abstand zwischen zwei Animationsschritten in Millisekunden.
pub const ANIMATION_INTERVAL_MS: u64 = 1000;
/// Oberhalb dieser Tiefe springt die Animation zurück auf 0.
pub const ANIMATION_WRAP_AFTER: u32 = 5;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Pan-Faktor: Verschiebung = Faktor · (Anker − Mausposition).
pub const PAN_FACTOR: f64 = -0.02;
/// Standard-Viewport-Größe in Pixeln.
pub const VIEWPORT_SIZE: [f64; 2] = [1000.0, 1000.0];

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe des aktuellen Umrisses (RGBA: Blau).
pub const COLOR_CURRENT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe des Vorgänger-Overlays (RGBA: Cyan).
pub const COLOR_PREVIOUS: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
/// Hintergrundfarbe (RGBA: Weiß).
pub const COLOR_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `koch_snowflake.toml` neben der Binary gespeichert.
/// Fehlende Felder werden mit Standardwerten aufgefüllt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KochOptions {
    // ── Ausgangsdreieck ─────────────────────────────────────────
    /// Startpunkt der Basiskante
    pub base_start: [f64; 2],
    /// Endpunkt der Basiskante
    pub base_end: [f64; 2],
    /// Regel für den dritten Dreieckspunkt
    pub apex_rule: ApexRule,

    // ── Tiefe ───────────────────────────────────────────────────
    /// Kleinste wählbare Tiefe
    pub depth_min: u32,
    /// Größte wählbare Tiefe
    pub depth_max: u32,
    /// Tiefe beim Start
    pub depth_initial: u32,
    /// Harte Obergrenze für einen Build (Schutz vor 4^d-Explosion)
    pub max_build_depth: u32,
    /// Vorgänger-Iteration beim Start einblenden
    pub show_previous: bool,

    // ── Animation ───────────────────────────────────────────────
    /// Intervall zwischen Animationsschritten (ms)
    pub animation_interval_ms: u64,
    /// Oberhalb dieser Tiefe springt die Animation auf 0 zurück
    pub animation_wrap_after: u32,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Pan-Faktor für Drag-Verschiebung
    pub pan_factor: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: [f64; 2],

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe des aktuellen Umrisses
    pub color_current: [f32; 4],
    /// Farbe des Vorgänger-Overlays
    pub color_previous: [f32; 4],
    /// Hintergrundfarbe
    pub color_background: [f32; 4],
}

impl Default for KochOptions {
    fn default() -> Self {
        Self {
            base_start: BASE_START,
            base_end: BASE_END,
            apex_rule: ApexRule::default(),

            depth_min: DEPTH_MIN,
            depth_max: DEPTH_MAX,
            depth_initial: DEPTH_INITIAL,
            max_build_depth: DEFAULT_MAX_DEPTH,
            show_previous: false,

            animation_interval_ms: ANIMATION_INTERVAL_MS,
            animation_wrap_after: ANIMATION_WRAP_AFTER,

            pan_factor: PAN_FACTOR,
            viewport_size: VIEWPORT_SIZE,

            color_current: COLOR_CURRENT,
            color_previous: COLOR_PREVIOUS,
            color_background: COLOR_BACKGROUND,
        }
    }
}

impl KochOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("koch_snowflake"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("koch_snowflake.toml")
    }

    /// Ressourcen-Grenzen für die Geometrie-Engine.
    pub fn build_limits(&self) -> BuildLimits {
        BuildLimits {
            max_depth: self.max_build_depth,
        }
    }

    /// Begrenzt eine gewünschte Tiefe auf den Slider-Bereich.
    pub fn clamp_depth(&self, depth: u32) -> u32 {
        depth.clamp(self.depth_min, self.depth_max.max(self.depth_min))
    }

    /// Startpunkt der Basiskante als Vektor.
    pub fn base_start_point(&self) -> DVec2 {
        DVec2::from_array(self.base_start)
    }

    /// Endpunkt der Basiskante als Vektor.
    pub fn base_end_point(&self) -> DVec2 {
        DVec2::from_array(self.base_end)
    }

    /// Animationsintervall als `Duration` (mindestens 1 ms).
    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms.max(1))
    }
}
