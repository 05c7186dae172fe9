use glam::DVec2;
use koch_engine::ApexRule;

use crate::shared::KochOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Tiefe setzen (negativ = Vertragsverletzung)
    SetDepth { depth: i64 },
    /// Vorgänger-Overlay ein-/ausschalten
    SetShowPrevious { enabled: bool },
    /// Animation starten/stoppen
    SetAnimationRunning { running: bool },
    /// Verstrichene Zeit auf den Animations-Akkumulator buchen
    ConsumeAnimationTime { seconds: f64 },
    /// `steps` Animationsschritte ausführen
    AdvanceAnimation { steps: u64 },
    /// Drag-Lifecycle Start: Anker merken
    BeginPan { anchor: DVec2 },
    /// Drag-Lifecycle Update: Ansicht relativ zum Anker verschieben
    PanView { screen_pos: DVec2 },
    /// Drag-Lifecycle Ende
    EndPan,
    /// Basiskante verschieben
    TranslateBaseEdge { delta: DVec2 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f64; 2] },
    /// Apex-Regel setzen
    SetApexRule { rule: ApexRule },
    /// Optionen ersetzen
    ApplyOptions { options: Box<KochOptions> },
    /// Verschiebung und Basiskante auf Standard zurücksetzen
    ResetView,
    /// Umriss aus dem aktuellen State neu bauen
    RebuildOutline,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Name der Variante ohne Nutzlast, z.B. für das Command-Log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SetDepth { .. } => "SetDepth",
            Self::SetShowPrevious { .. } => "SetShowPrevious",
            Self::SetAnimationRunning { .. } => "SetAnimationRunning",
            Self::ConsumeAnimationTime { .. } => "ConsumeAnimationTime",
            Self::AdvanceAnimation { .. } => "AdvanceAnimation",
            Self::BeginPan { .. } => "BeginPan",
            Self::PanView { .. } => "PanView",
            Self::EndPan => "EndPan",
            Self::TranslateBaseEdge { .. } => "TranslateBaseEdge",
            Self::SetViewportSize { .. } => "SetViewportSize",
            Self::SetApexRule { .. } => "SetApexRule",
            Self::ApplyOptions { .. } => "ApplyOptions",
            Self::ResetView => "ResetView",
            Self::RebuildOutline => "RebuildOutline",
            Self::RequestExit => "RequestExit",
        }
    }
}
