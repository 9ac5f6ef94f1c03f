//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::{LatLng, MapCamera};

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = MapCamera::new();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(step);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    state.view.camera.zoom_by(1.0 / step);
}

/// Verschiebt die Kamera um ein Grad-Delta.
pub fn pan(state: &mut AppState, delta_deg: glam::DVec2) {
    state.view.camera.pan(delta_deg);
}

/// Zoomt mit optionalem Fokuspunkt; ohne Fokus auf das Kamera-Zentrum.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_geo: Option<LatLng>) {
    match focus_geo {
        Some(focus) => state.view.camera.zoom_towards(factor, focus),
        None => state.view.camera.zoom_by(factor),
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
