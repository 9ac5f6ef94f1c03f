//! Optionen-Dialog für Einheiten, Labels und Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Einheiten ───────────────────────────────────────
            ui.heading("Einheiten");
            changed |= ui
                .checkbox(&mut opts.use_metric, "Metrisch (m / km)")
                .changed();
            ui.add_enabled_ui(!opts.use_metric, |ui| {
                changed |= ui
                    .checkbox(&mut opts.use_feet, "Nur Fuß (statt Meilen)")
                    .changed();
            });

            ui.separator();

            // ── Messung ─────────────────────────────────────────
            ui.heading("Messung");
            changed |= ui
                .checkbox(&mut opts.show_segment_labels, "Segment-Labels anzeigen")
                .changed();
            ui.horizontal(|ui| {
                ui.label("Abschluss-Radius (px):");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.finish_snap_radius_px)
                            .range(4.0..=50.0)
                            .speed(0.5),
                    )
                    .changed();
            });

            ui.separator();

            // ── Darstellung ─────────────────────────────────────
            ui.heading("Darstellung");
            ui.horizontal(|ui| {
                ui.label("Linienstärke (px):");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.line_width_px)
                            .range(0.5..=10.0)
                            .speed(0.1),
                    )
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Vertex-Radius (px):");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.vertex_radius_px)
                            .range(1.0..=15.0)
                            .speed(0.1),
                    )
                    .changed();
            });
            changed |= color_edit(ui, "Linienfarbe:", &mut opts.line_color);
            changed |= color_edit(ui, "Vertex-Farbe:", &mut opts.vertex_color);
            changed |= color_edit(ui, "Label-Farbe:", &mut opts.label_color);

            ui.separator();

            // ── Kamera ──────────────────────────────────────────
            ui.heading("Kamera");
            ui.horizontal(|ui| {
                ui.label("Zoom-Schritt (Buttons):");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.camera_zoom_step)
                            .range(1.01..=3.0)
                            .speed(0.01),
                    )
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Zoom-Schritt (Scroll):");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut opts.camera_scroll_zoom_step)
                            .range(1.01..=2.0)
                            .speed(0.01),
                    )
                    .changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
