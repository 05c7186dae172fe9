//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die restlichen Commands des Intents verworfen.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Fraktal ===
            AppCommand::SetDepth { depth } => handlers::fractal::set_depth(state, depth)?,
            AppCommand::SetShowPrevious { enabled } => {
                handlers::fractal::set_show_previous(state, enabled)
            }
            AppCommand::SetApexRule { rule } => handlers::fractal::set_apex_rule(state, rule),
            AppCommand::TranslateBaseEdge { delta } => {
                handlers::fractal::translate_base_edge(state, delta)
            }
            AppCommand::RebuildOutline => handlers::fractal::rebuild_outline(state)?,

            // === Animation ===
            AppCommand::SetAnimationRunning { running } => {
                handlers::animation::set_running(state, running)
            }
            AppCommand::ConsumeAnimationTime { seconds } => {
                handlers::animation::consume_time(state, seconds)
            }
            AppCommand::AdvanceAnimation { steps } => handlers::animation::advance(state, steps),

            // === Ansicht ===
            AppCommand::BeginPan { anchor } => handlers::view::begin_pan(state, anchor),
            AppCommand::PanView { screen_pos } => handlers::view::pan(state, screen_pos),
            AppCommand::EndPan => handlers::view::end_pan(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
