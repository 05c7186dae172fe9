//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DepthChanged { depth } => vec![
            AppCommand::SetDepth { depth },
            AppCommand::RebuildOutline,
        ],
        AppIntent::ShowPreviousToggled { enabled } => vec![
            AppCommand::SetShowPrevious { enabled },
            AppCommand::RebuildOutline,
        ],
        AppIntent::AnimationToggled { enabled } => {
            vec![AppCommand::SetAnimationRunning { running: enabled }]
        }
        AppIntent::AnimationTick => {
            if state.animation.running {
                vec![
                    AppCommand::AdvanceAnimation { steps: 1 },
                    AppCommand::RebuildOutline,
                ]
            } else {
                Vec::new()
            }
        }
        AppIntent::TimeElapsed { seconds } => {
            if !state.animation.running {
                return Vec::new();
            }
            let steps = state
                .animation
                .due_ticks(seconds, state.options.animation_interval());
            let mut commands = vec![AppCommand::ConsumeAnimationTime { seconds }];
            if steps > 0 {
                // Zwischenstufen werden nie angezeigt: ein Sammelschritt, ein Neuaufbau
                commands.push(AppCommand::AdvanceAnimation { steps });
                commands.push(AppCommand::RebuildOutline);
            }
            commands
        }
        AppIntent::DragStarted { screen_pos } => vec![AppCommand::BeginPan { anchor: screen_pos }],
        AppIntent::DragMoved { screen_pos } => {
            if state.view.drag_anchor.is_some() {
                vec![AppCommand::PanView { screen_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::DragEnded => vec![AppCommand::EndPan],
        AppIntent::BaseEdgeDragged { delta } => vec![
            AppCommand::TranslateBaseEdge { delta },
            AppCommand::RebuildOutline,
        ],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ApexRuleChanged { rule } => vec![
            AppCommand::SetApexRule { rule },
            AppCommand::RebuildOutline,
        ],
        AppIntent::OptionsChanged { options } => vec![
            AppCommand::ApplyOptions { options },
            AppCommand::RebuildOutline,
        ],
        AppIntent::ResetRequested => vec![AppCommand::ResetView, AppCommand::RebuildOutline],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
