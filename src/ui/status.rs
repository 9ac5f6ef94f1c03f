//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, SessionPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(session) = &state.session {
                let phase = match session.phase() {
                    SessionPhase::Drawing => "zeichnet",
                    SessionPhase::Finished => "abgeschlossen",
                };
                ui.label(format!(
                    "Messung ({}) | Punkte: {} | Gesamt: {}",
                    phase,
                    session.vertices().len(),
                    session.format_distance(session.total_distance_m())
                ));
            } else {
                ui.label("Mess-Tool aus");
            }

            ui.separator();

            let units = if state.options.use_metric {
                "metrisch"
            } else if state.options.use_feet {
                "Fuß"
            } else {
                "Meilen/Fuß"
            };
            ui.label(format!("Einheiten: {}", units));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.1}x | Zentrum: ({:.4}°, {:.4}°)",
                state.view.camera.zoom, state.view.camera.center.y, state.view.camera.center.x
            ));

            // Cursor-Position (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(pointer) = state.ui.pointer_geo {
                    ui.label(format!("Cursor: {:.4}°, {:.4}°", pointer.lat, pointer.lng));
                }
            });
        });
    });
}
