//! Viewport-Zeichnung: Mess-Polylinie, Vertex-Marker, Segment-Labels und Tooltip.
//!
//! Gezeichnet wird direkt mit dem egui-Painter — das Tool rendert nur die
//! Mess-Geometrie, keine Kartenkacheln.

use glam::Vec2;

use super::tooltip_layout::place_tooltip;
use crate::app::measure::{tooltip_text, MeasureSession};
use crate::app::AppState;
use crate::core::LatLng;

/// Schriftgröße der Segment-Labels.
const LABEL_FONT_SIZE: f32 = 12.0;
/// Schriftgröße der Tooltip-Hauptzeile.
const TOOLTIP_FONT_SIZE: f32 = 13.0;
/// Innenabstand von Label- und Tooltip-Hintergrund.
const TEXT_PADDING_PX: f32 = 5.0;
/// Strichelung des Gummiband-Segments (Strich/Lücke in Pixeln).
const RUBBER_DASH_PX: f32 = 6.0;
const RUBBER_GAP_PX: f32 = 4.0;

/// Zeichnet den Viewport-Inhalt für den aktuellen App-Zustand.
pub fn render_canvas(ui: &egui::Ui, response: &egui::Response, state: &AppState) {
    let painter = ui.painter_at(response.rect);
    let origin = response.rect.min;
    let viewport = Vec2::new(response.rect.width(), response.rect.height());

    let Some(session) = &state.session else {
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "Mess-Tool aus — \u{1F4CF} Measure distances aktivieren",
            egui::FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    if session.is_drawing() && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    let to_screen = |geo: LatLng| -> egui::Pos2 {
        let local = state.view.camera.geo_to_screen(geo, viewport);
        origin + egui::Vec2::new(local.x, local.y)
    };

    let line_color = color32(state.options.line_color);
    let stroke = egui::Stroke::new(state.options.line_width_px, line_color);
    let points: Vec<egui::Pos2> = session.vertices().iter().map(|&v| to_screen(v)).collect();

    // ── Fertige Segmente ────────────────────────────────────────────
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], stroke);
    }

    // ── Gummiband zum Cursor ────────────────────────────────────────
    if session.is_drawing() {
        if let (Some(&last), Some(pointer)) = (points.last(), state.ui.pointer_screen) {
            let cursor = origin + egui::Vec2::new(pointer[0], pointer[1]);
            painter.extend(egui::Shape::dashed_line(
                &[last, cursor],
                stroke,
                RUBBER_DASH_PX,
                RUBBER_GAP_PX,
            ));
        }
    }

    // ── Vertex-Marker ───────────────────────────────────────────────
    let vertex_color = color32(state.options.vertex_color);
    for &p in &points {
        painter.circle(
            p,
            state.options.vertex_radius_px,
            vertex_color,
            egui::Stroke::new(1.5, line_color),
        );
    }

    // ── Segment-Labels ──────────────────────────────────────────────
    let label_color = color32(state.options.label_color);
    for label in session.labels() {
        draw_text_box(
            &painter,
            ui,
            to_screen(label.position),
            &label.text,
            LABEL_FONT_SIZE,
            label_color,
        );
    }

    draw_tooltip(&painter, ui, response, state, session, viewport);
}

/// Zeichnet den schwebenden Mess-Tooltip neben Cursor bzw. letztem Vertex.
fn draw_tooltip(
    painter: &egui::Painter,
    ui: &egui::Ui,
    response: &egui::Response,
    state: &AppState,
    session: &MeasureSession,
    viewport: Vec2,
) {
    let content = tooltip_text(session, state.ui.pointer_geo);
    if content.is_empty() {
        return;
    }

    // Während des Zeichnens folgt der Tooltip dem Cursor, danach bleibt er
    // am letzten Vertex verankert (und wandert beim Zoomen mit).
    let anchor = if session.is_drawing() {
        state.ui.pointer_screen
    } else {
        session.last_vertex().map(|v| {
            let local = state.view.camera.geo_to_screen(v, viewport);
            [local.x, local.y]
        })
    };
    let Some(anchor) = anchor else {
        return;
    };

    let text_color = ui.visuals().strong_text_color();
    let sub_color = ui.visuals().text_color();
    let text_galley = (!content.text.is_empty()).then(|| {
        painter.layout_no_wrap(
            content.text.clone(),
            egui::FontId::proportional(TOOLTIP_FONT_SIZE),
            text_color,
        )
    });
    let sub_galley = (!content.subtext.is_empty()).then(|| {
        painter.layout_no_wrap(
            content.subtext.clone(),
            egui::FontId::proportional(LABEL_FONT_SIZE),
            sub_color,
        )
    });

    let text_size = text_galley.as_ref().map_or(egui::Vec2::ZERO, |g| g.size());
    let sub_size = sub_galley.as_ref().map_or(egui::Vec2::ZERO, |g| g.size());
    let size = [
        text_size.x.max(sub_size.x) + 2.0 * TEXT_PADDING_PX,
        text_size.y + sub_size.y + 2.0 * TEXT_PADDING_PX,
    ];

    let placed = place_tooltip(anchor, size, [viewport.x, viewport.y]);
    let rect = egui::Rect::from_min_size(
        response.rect.min + egui::Vec2::new(placed.x, placed.y),
        egui::Vec2::new(placed.w, placed.h),
    );

    painter.rect_filled(
        rect,
        egui::CornerRadius::same(4),
        ui.visuals().extreme_bg_color.gamma_multiply(0.85),
    );

    let mut cursor_y = rect.min.y + TEXT_PADDING_PX;
    if let Some(galley) = text_galley {
        let h = galley.size().y;
        painter.galley(
            egui::pos2(rect.min.x + TEXT_PADDING_PX, cursor_y),
            galley,
            text_color,
        );
        cursor_y += h;
    }
    if let Some(galley) = sub_galley {
        painter.galley(
            egui::pos2(rect.min.x + TEXT_PADDING_PX, cursor_y),
            galley,
            sub_color,
        );
    }
}

/// Zeichnet Text mit halbtransparentem Hintergrund zentriert um `center`.
fn draw_text_box(
    painter: &egui::Painter,
    ui: &egui::Ui,
    center: egui::Pos2,
    text: &str,
    font_size: f32,
    color: egui::Color32,
) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(font_size),
        color,
    );
    let rect = egui::Rect::from_center_size(
        center,
        galley.size() + egui::Vec2::splat(2.0 * TEXT_PADDING_PX),
    );
    painter.rect_filled(
        rect,
        egui::CornerRadius::same(3),
        ui.visuals().extreme_bg_color.gamma_multiply(0.75),
    );
    painter.galley(rect.min + egui::Vec2::splat(TEXT_PADDING_PX), galley, color);
}

/// Konvertiert eine RGBA-Options-Farbe in egui-Farbe.
fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}
