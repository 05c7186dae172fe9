use std::time::Duration;

/// Zustand der Tiefen-Animation.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    /// Animation läuft
    pub running: bool,
    /// Seit dem letzten Schritt verstrichene Zeit (immer kleiner als ein Intervall)
    pub accumulated: Duration,
}

impl AnimationState {
    /// Gestoppte Animation ohne angesammelte Zeit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buchbare Zeit? Gestoppt, NaN/∞, negative Werte und ein Null-Intervall zählen nicht.
    fn accepts(&self, seconds: f64, interval: Duration) -> bool {
        self.running && seconds.is_finite() && seconds > 0.0 && !interval.is_zero()
    }

    /// Anzahl fälliger Schritte, wenn `seconds` zusätzlich verstreichen.
    ///
    /// Reine Berechnung; gebucht wird erst mit [`AnimationState::consume`].
    /// Sättigt bei `u64::MAX`.
    pub fn due_ticks(&self, seconds: f64, interval: Duration) -> u64 {
        if !self.accepts(seconds, interval) {
            return 0;
        }
        let total = self.accumulated.as_secs_f64() + seconds;
        (total / interval.as_secs_f64()).floor() as u64
    }

    /// Bucht `seconds`. Übrig bleibt nur der Rest unterhalb eines Intervalls.
    pub fn consume(&mut self, seconds: f64, interval: Duration) {
        if !self.accepts(seconds, interval) {
            return;
        }
        let total = self.accumulated.as_secs_f64() + seconds;
        let rest = total % interval.as_secs_f64();
        self.accumulated = Duration::try_from_secs_f64(rest).unwrap_or_default();
    }
}
