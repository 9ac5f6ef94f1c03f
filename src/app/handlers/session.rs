//! Handler für Mess-Session-Lifecycle und Vertex-Eingaben.

use crate::app::measure::MeasureSession;
use crate::app::AppState;
use crate::core::LatLng;

/// Schaltet das Mess-Tool um: aktivieren startet eine frische Session,
/// deaktivieren verwirft sie vollständig.
pub fn toggle_measure(state: &mut AppState) {
    if state.session.is_some() {
        state.session = None;
        log::info!("Mess-Tool deaktiviert");
    } else {
        state.session = Some(MeasureSession::new(&state.options));
        log::info!("Mess-Tool aktiviert");
    }
}

/// Verwirft die aktuelle Zeichnung und beginnt eine neue.
pub fn restart_shape(state: &mut AppState) {
    if let Some(session) = &mut state.session {
        session.start_shape();
        log::debug!("Zeichnung neu gestartet");
    }
}

/// Hängt einen Vertex an die laufende Zeichnung an.
pub fn add_vertex(state: &mut AppState, geo_pos: LatLng) {
    if let Some(session) = &mut state.session {
        if let Some(distance) = session.add_vertex(geo_pos) {
            log::debug!(
                "Segment vermessen: {} (gesamt {})",
                session.format_distance(distance),
                session.format_distance(session.total_distance_m())
            );
        }
    }
}

/// Schließt die laufende Zeichnung ab.
pub fn finish_shape(state: &mut AppState) {
    if let Some(session) = &mut state.session {
        session.finish_shape();
        log::info!(
            "Messung abgeschlossen: {} über {} Punkte",
            session.format_distance(session.total_distance_m()),
            session.vertices().len()
        );
    }
}

/// Aktualisiert die Cursor-Position für Tooltip und Gummiband.
pub fn update_pointer(state: &mut AppState, geo_pos: LatLng, screen_pos: [f32; 2]) {
    state.ui.pointer_geo = Some(geo_pos);
    state.ui.pointer_screen = Some(screen_pos);
}

/// Verwirft die Cursor-Position (Pointer außerhalb des Viewports).
pub fn clear_pointer(state: &mut AppState) {
    state.ui.pointer_geo = None;
    state.ui.pointer_screen = None;
}
