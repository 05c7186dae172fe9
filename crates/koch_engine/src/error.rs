//! Fehlertyp der Geometrie-Engine.

use thiserror::Error;

/// Fehler beim Aufbau eines Koch-Umrisses.
///
/// Beide Varianten werden vor jeder Rekursion erkannt; es gibt nie Teilergebnisse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KochError {
    /// Ungültige Eingabe (negative Tiefe, schiefe oder entartete Basiskante, NaN/∞)
    #[error("ungültiges Argument: {0}")]
    InvalidArgument(String),
    /// Tiefe über der konfigurierten Obergrenze (4^d Segmente pro Seite)
    #[error("Tiefe {depth} überschreitet das Limit von {max_depth}")]
    ResourceLimit { depth: u64, max_depth: u32 },
}

impl KochError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
