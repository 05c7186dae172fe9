//! Kompaktes Protokoll ausgeführter Commands für die Statusausgabe.
//!
//! Gespeichert werden nur Command-Namen (ohne Nutzlast wie `Box<KochOptions>`)
//! in einem kurzen Fenster, dazu Zähler über die gesamte Laufzeit.

use std::collections::VecDeque;

use super::AppCommand;

/// Zähler und letzte Command-Namen.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<&'static str>,
    total: u64,
    rebuilds: u64,
    animation_steps: u64,
}

impl CommandLog {
    /// Größe des Fensters der zuletzt ausgeführten Commands.
    pub const RECENT_CAPACITY: usize = 32;

    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zählt einen Command und schiebt seinen Namen ins Fenster.
    pub fn record(&mut self, command: &AppCommand) {
        match command {
            AppCommand::RebuildOutline => self.rebuilds += 1,
            AppCommand::AdvanceAnimation { steps } => {
                self.animation_steps = self.animation_steps.saturating_add(*steps)
            }
            _ => {}
        }
        if self.recent.len() == Self::RECENT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.label());
        self.total += 1;
    }

    /// Anzahl aller je ausgeführten Commands.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Angeforderte Neuaufbauten des Umrisses.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Summe aller Animationsschritte.
    pub fn animation_steps(&self) -> u64 {
        self.animation_steps
    }

    /// Zuletzt ausgeführte Command-Namen, älteste zuerst.
    pub fn recent(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.recent.iter().copied()
    }

    /// Name des letzten Commands.
    pub fn last(&self) -> Option<&'static str> {
        self.recent.back().copied()
    }

    /// Einzeilige Zusammenfassung für das Log.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} Commands, {} Neuaufbauten, {} Animationsschritte",
            self.total, self.rebuilds, self.animation_steps
        );
        if let Some(last) = self.last() {
            line.push_str(", zuletzt ");
            line.push_str(last);
        }
        line
    }
}
