//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::{AppCommand, AppIntent, AppState};
use crate::core::LatLng;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MeasureToggleRequested => vec![AppCommand::ToggleMeasure],

        AppIntent::ViewportClicked {
            geo_pos,
            screen_pos,
        } => map_viewport_click(state, geo_pos, screen_pos),

        // Sekundär-Klick räumt nur eine fertige Messung weg; während des
        // Zeichnens bleibt er wirkungslos.
        AppIntent::ShapeCancelRequested => match &state.session {
            Some(session) if !session.is_drawing() => vec![AppCommand::RestartShape],
            _ => vec![],
        },

        AppIntent::DrawingAborted => match &state.session {
            Some(session) if !session.vertices().is_empty() => vec![AppCommand::RestartShape],
            _ => vec![],
        },

        AppIntent::PointerMoved {
            geo_pos,
            screen_pos,
        } => vec![AppCommand::UpdatePointer {
            geo_pos,
            screen_pos,
        }],
        AppIntent::PointerLeft => vec![AppCommand::ClearPointer],

        AppIntent::CameraPan { delta_deg } => vec![AppCommand::PanCamera { delta_deg }],
        AppIntent::CameraZoom { factor, focus_geo } => {
            vec![AppCommand::ZoomCamera { factor, focus_geo }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        AppIntent::OptionsDialogToggled => vec![AppCommand::ToggleOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => {
            vec![AppCommand::CloseOptionsDialog, AppCommand::SaveOptions]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Klick-Routing: Klick nahe dem letzten Vertex schließt die Linie ab,
/// sonst wird ein neuer Vertex angehängt. Ohne aktives Tool oder nach
/// Abschluss der Zeichnung passiert nichts.
fn map_viewport_click(state: &AppState, geo_pos: LatLng, screen_pos: [f32; 2]) -> Vec<AppCommand> {
    let Some(session) = &state.session else {
        return vec![];
    };
    if !session.is_drawing() {
        return vec![];
    }

    if session.vertices().len() >= 2 {
        if let Some(last) = session.last_vertex() {
            let viewport = Vec2::new(state.view.viewport_size[0], state.view.viewport_size[1]);
            let last_screen = state.view.camera.geo_to_screen(last, viewport);
            let click_screen = Vec2::new(screen_pos[0], screen_pos[1]);

            if last_screen.distance(click_screen) <= state.options.finish_snap_radius_px {
                return vec![AppCommand::FinishShape];
            }
        }
    }

    vec![AppCommand::AddVertex { geo_pos }]
}

#[cfg(test)]
mod tests;
