use glam::DVec2;
use koch_engine::ApexRule;

use crate::shared::KochOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Tiefe am Slider geändert (Rohwert, kann ungültig sein)
    DepthChanged { depth: i64 },
    /// Checkbox "Vorgänger-Iteration anzeigen" umgeschaltet
    ShowPreviousToggled { enabled: bool },
    /// Checkbox "Animation" umgeschaltet
    AnimationToggled { enabled: bool },
    /// Ein Timer-Tick der Animation ist eingetroffen
    AnimationTick,
    /// Zeit seit dem letzten Frame (Sekunden), treibt die Animation ohne externen Timer
    TimeElapsed { seconds: f64 },
    /// Maustaste im Viewport gedrückt
    DragStarted { screen_pos: DVec2 },
    /// Maus mit gedrückter Taste bewegt
    DragMoved { screen_pos: DVec2 },
    /// Maustaste losgelassen
    DragEnded,
    /// Basiskante um ein Delta verschieben (Punkte werden neu berechnet)
    BaseEdgeDragged { delta: DVec2 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },
    /// Regel für den dritten Dreieckspunkt geändert
    ApexRuleChanged { rule: ApexRule },
    /// Neue Optionen übernehmen
    OptionsChanged { options: Box<KochOptions> },
    /// Ansicht und Basiskante zurücksetzen
    ResetRequested,
    /// Anwendung beenden
    ExitRequested,
}
