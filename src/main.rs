//! Koch-Schneeflocke.
//!
//! Kommandozeilen-Frontend: lädt Optionen, spielt die Eingaben als Intents
//! durch den Controller und gibt eine Zusammenfassung bzw. die Render-Szene aus.

use clap::Parser;
use koch_snowflake::{AppController, AppState, CliArgs, KochOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();

    log::info!("Koch-Schneeflocke v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = KochOptions::load_from_file(&args.config_path());
    let intents = args.intents(&options);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for intent in intents {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            return Err(e);
        }
    }

    let scene = controller.build_render_scene(&state);
    match state.fractal.outline.as_deref() {
        Some(outline) => log::info!(
            "Tiefe {}: {} aktuelle + {} vorherige Segmente, Apex ({:.1}, {:.1})",
            outline.depth.get(),
            outline.current.len(),
            outline.previous.len(),
            outline.triangle.apex.x,
            outline.triangle.apex.y
        ),
        None => log::warn!("Kein Umriss gebaut"),
    }
    log::info!("{}", state.command_log.summary());
    log::info!("{} Segmente in der Szene", state.segment_count());

    if args.json {
        let json = serde_json::to_string_pretty(&scene.export())?;
        println!("{json}");
    }

    Ok(())
}
