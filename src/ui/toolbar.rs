//! Toolbar mit Mess-Control, Zoom-Buttons und Options-Zugang.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let enabled = state.measure_enabled();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Mess-Control (Ein-/Aus-Toggle) ──
            let measure_btn = egui::Button::new("📏 Measure distances");
            if ui
                .add(measure_btn.selected(enabled))
                .on_hover_text("Distanzen entlang geklickter Punkte messen")
                .clicked()
            {
                events.push(AppIntent::MeasureToggleRequested);
            }

            ui.separator();

            if ui.button("🔍+").on_hover_text("Hineinzoomen").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("🔍−").on_hover_text("Herauszoomen").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui
                .button("🌍")
                .on_hover_text("Kamera zurücksetzen")
                .clicked()
            {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.separator();

            if ui.button("⚙ Optionen").clicked() {
                events.push(AppIntent::OptionsDialogToggled);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
