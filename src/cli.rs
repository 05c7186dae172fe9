//! Kommandozeilen-Argumente des Frontends.

use std::path::PathBuf;

use clap::Parser;
use koch_engine::ApexRule;

use crate::app::AppIntent;
use crate::shared::KochOptions;

/// Koch-Schneeflocke: Umriss bauen, optional animieren und als JSON ausgeben
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "koch-snowflake")]
#[command(version)]
#[command(about, long_about = None)]
pub struct CliArgs {
    /// Gewünschte Tiefe (roh, Validierung im Controller)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Vorgänger-Iteration einblenden
    #[arg(short, long)]
    pub previous: bool,

    /// Apex per Rotation statt Referenzformel
    #[arg(long)]
    pub rotated: bool,

    /// Anzahl simulierter Animationsschritte
    #[arg(long = "animate", value_name = "STEPS", default_value_t = 0)]
    pub animate_steps: u32,

    /// Render-Szene als JSON auf stdout ausgeben
    #[arg(long)]
    pub json: bool,

    /// Pfad zur Optionen-Datei (sonst neben der Binary)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Pfad zur Optionen-Datei.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(KochOptions::config_path)
    }

    /// Übersetzt die Argumente in die Intents, die ein UI auslösen würde.
    ///
    /// Beginnt immer mit einem Reset, damit ein Umriss gebaut ist.
    pub fn intents(&self, options: &KochOptions) -> Vec<AppIntent> {
        let mut intents = vec![AppIntent::ResetRequested];

        if self.rotated {
            intents.push(AppIntent::ApexRuleChanged {
                rule: ApexRule::Rotated,
            });
        }
        if self.previous {
            intents.push(AppIntent::ShowPreviousToggled { enabled: true });
        }
        if let Some(depth) = self.depth {
            intents.push(AppIntent::DepthChanged { depth });
        }
        if self.animate_steps > 0 {
            let seconds =
                options.animation_interval().as_secs_f64() * f64::from(self.animate_steps);
            intents.push(AppIntent::AnimationToggled { enabled: true });
            intents.push(AppIntent::TimeElapsed { seconds });
            intents.push(AppIntent::AnimationToggled { enabled: false });
        }

        intents
    }
}
