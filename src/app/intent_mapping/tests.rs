use super::map_intent_to_commands;
use crate::app::measure::MeasureSession;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::LatLng;

/// State mit aktivem Mess-Tool und 800x600-Viewport.
fn measuring_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.session = Some(MeasureSession::new(&state.options));
    state
}

#[test]
fn test_toggle_maps_to_toggle_command() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::MeasureToggleRequested);
    assert!(matches!(commands.as_slice(), [AppCommand::ToggleMeasure]));
}

#[test]
fn test_click_without_session_is_ignored() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            geo_pos: LatLng::new(0.0, 0.0),
            screen_pos: [100.0, 100.0],
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_click_appends_vertex_while_drawing() {
    let state = measuring_state();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            geo_pos: LatLng::new(10.0, 20.0),
            screen_pos: [100.0, 100.0],
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::AddVertex { .. }]
    ));
}

#[test]
fn test_click_near_last_vertex_finishes_line() {
    let mut state = measuring_state();
    let session = state.session.as_mut().expect("Session erwartet");
    session.add_vertex(LatLng::new(0.0, -30.0));
    session.add_vertex(LatLng::new(0.0, 0.0));

    // (0, 0) liegt bei Standard-Kamera exakt in der Viewport-Mitte
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            geo_pos: LatLng::new(0.0, 0.0),
            screen_pos: [403.0, 298.0],
        },
    );
    assert!(matches!(commands.as_slice(), [AppCommand::FinishShape]));
}

#[test]
fn test_click_near_single_vertex_cannot_finish() {
    let mut state = measuring_state();
    state
        .session
        .as_mut()
        .expect("Session erwartet")
        .add_vertex(LatLng::new(0.0, 0.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportClicked {
            geo_pos: LatLng::new(0.0, 0.0),
            screen_pos: [400.0, 300.0],
        },
    );
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::AddVertex { .. }]
    ));
}

#[test]
fn test_cancel_restarts_only_after_finish() {
    let mut state = measuring_state();
    {
        let session = state.session.as_mut().expect("Session erwartet");
        session.add_vertex(LatLng::new(0.0, 0.0));
        session.add_vertex(LatLng::new(0.0, 1.0));
    }

    // Während des Zeichnens wirkungslos
    let commands = map_intent_to_commands(&state, AppIntent::ShapeCancelRequested);
    assert!(commands.is_empty());

    state
        .session
        .as_mut()
        .expect("Session erwartet")
        .finish_shape();
    let commands = map_intent_to_commands(&state, AppIntent::ShapeCancelRequested);
    assert!(matches!(commands.as_slice(), [AppCommand::RestartShape]));
}

#[test]
fn test_abort_discards_started_drawing() {
    let mut state = measuring_state();

    // Ohne Vertices nichts zu verwerfen
    let commands = map_intent_to_commands(&state, AppIntent::DrawingAborted);
    assert!(commands.is_empty());

    state
        .session
        .as_mut()
        .expect("Session erwartet")
        .add_vertex(LatLng::new(0.0, 0.0));
    let commands = map_intent_to_commands(&state, AppIntent::DrawingAborted);
    assert!(matches!(commands.as_slice(), [AppCommand::RestartShape]));
}

#[test]
fn test_close_options_dialog_also_saves() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::CloseOptionsDialogRequested);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::CloseOptionsDialog, AppCommand::SaveOptions]
    ));
}
