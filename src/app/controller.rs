//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Mess-Session ===
            AppCommand::ToggleMeasure => handlers::session::toggle_measure(state),
            AppCommand::RestartShape => handlers::session::restart_shape(state),
            AppCommand::AddVertex { geo_pos } => handlers::session::add_vertex(state, geo_pos),
            AppCommand::FinishShape => handlers::session::finish_shape(state),
            AppCommand::UpdatePointer {
                geo_pos,
                screen_pos,
            } => handlers::session::update_pointer(state, geo_pos, screen_pos),
            AppCommand::ClearPointer => handlers::session::clear_pointer(state),

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta_deg } => handlers::view::pan(state, delta_deg),
            AppCommand::ZoomCamera { factor, focus_geo } => {
                handlers::view::zoom_towards(state, factor, focus_geo)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply_options(state, options),
            AppCommand::ResetOptions => handlers::options::reset_options(state),
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
            AppCommand::ToggleOptionsDialog => handlers::options::toggle_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::options::close_options_dialog(state),

            // === System ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
