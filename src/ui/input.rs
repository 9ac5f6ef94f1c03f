//! Viewport-Input-Handling: Maus-Events, Pan/Zoom, Mess-Klicks → AppIntent.
//!
//! Der zentrale UI→Intent-Einstieg für Maus-, Scroll- und Tastatur-
//! Interaktionen im Viewport. Die Entscheidung, was ein Klick bewirkt
//! (Vertex anhängen oder Linie abschließen), fällt erst im Intent-Mapping.

use glam::{DVec2, Vec2};

use crate::app::AppIntent;
use crate::core::{LatLng, MapCamera};
use crate::shared::MeasureOptions;

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &MapCamera,
        options: &MeasureOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::DrawingAborted);
        }

        // ── Klicks ──────────────────────────────────────────────────
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let local = pointer_pos - response.rect.min;
                events.push(AppIntent::ViewportClicked {
                    geo_pos: screen_pos_to_geo(pointer_pos, response, viewport_size, camera),
                    screen_pos: [local.x, local.y],
                });
            }
        }

        if response.secondary_clicked() {
            events.push(AppIntent::ShapeCancelRequested);
        }

        // ── Cursor für Tooltip und Gummiband ────────────────────────
        if let Some(hover_pos) = response.hover_pos() {
            let local = hover_pos - response.rect.min;
            events.push(AppIntent::PointerMoved {
                geo_pos: screen_pos_to_geo(hover_pos, response, viewport_size, camera),
                screen_pos: [local.x, local.y],
            });
        } else {
            events.push(AppIntent::PointerLeft);
        }

        // ── Drag = Kamera-Pan ───────────────────────────────────────
        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta != egui::Vec2::ZERO
            && (response.dragged_by(egui::PointerButton::Primary)
                || response.dragged_by(egui::PointerButton::Middle))
        {
            let dpp = camera.degrees_per_pixel(viewport_size[1]);
            events.push(AppIntent::CameraPan {
                // Screen-Y wächst nach unten, Breitengrad nach oben
                delta_deg: DVec2::new(
                    -pointer_delta.x as f64 * dpp,
                    pointer_delta.y as f64 * dpp,
                ),
            });
        }

        // ── Scroll-Zoom auf Mausposition ────────────────────────────
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let step = options.camera_scroll_zoom_step;
            let factor = if scroll > 0.0 { step } else { 1.0 / step };
            let focus_geo = response
                .hover_pos()
                .map(|pos| screen_pos_to_geo(pos, response, viewport_size, camera));
            events.push(AppIntent::CameraZoom { factor, focus_geo });
        }

        events
    }
}

/// Konvertiert eine absolute egui-Pointer-Position in eine geographische
/// Koordinate relativ zum Viewport-Rechteck.
pub(crate) fn screen_pos_to_geo(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &MapCamera,
) -> LatLng {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_geo(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
