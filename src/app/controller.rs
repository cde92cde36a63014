//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
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
            // === Kontrollpunkte ===
            AppCommand::ApplyPointerEvent { event } => {
                handlers::points::apply_pointer_event(state, event)?
            }
            AppCommand::SelectAllPoints => handlers::points::select_all(state),

            // === Darstellung ===
            AppCommand::SetRenderQuality { quality } => {
                handlers::view::set_render_quality(state, quality)
            }

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Tastet die Kurve neu ab, falls sich seit dem letzten Frame Punkte bewegt haben.
    ///
    /// Muss genau einmal pro Frame nach allen Intents aufgerufen werden, da
    /// `was_changed()` das Flag konsumiert. Gibt `true` zurück, wenn neu abgetastet wurde.
    pub fn refresh_curve(&mut self, state: &mut AppState) -> bool {
        let moved = state.points.was_changed();
        if !moved && !state.curve.is_stale() {
            return false;
        }
        let positions = state.points.positions();
        state
            .curve
            .rebuild(&positions, state.view.render_quality.sample_step());
        true
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
