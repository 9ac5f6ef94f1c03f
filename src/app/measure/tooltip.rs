//! Tooltip-Texte der Mess-Session.
//!
//! Drei Aufforderungs-Stufen: starten → fortsetzen → abschließen.
//! Nach Abschluss bleibt nur die Gesamtdistanz stehen.

use super::session::MeasureSession;
use crate::core::geo::LatLng;

/// Aufforderung vor dem ersten Vertex.
const TOOLTIP_START: &str = "Click to start drawing line.";
/// Aufforderung solange genau ein Vertex gesetzt ist.
const TOOLTIP_CONTINUE: &str = "Click to continue drawing line.";
/// Aufforderung sobald die Linie abgeschlossen werden kann.
const TOOLTIP_FINISH: &str = "Click last point to finish line.";

/// Tooltip-Inhalt: Hauptzeile + optionale Distanz-Unterzeile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipText {
    /// Aufforderungs-Zeile (leer nach Abschluss der Zeichnung)
    pub text: String,
    /// Formatierte laufende bzw. finale Distanz (leer vor dem ersten Segmentansatz)
    pub subtext: String,
}

impl TooltipText {
    /// Gibt `true` zurück, wenn der Tooltip nichts anzuzeigen hat.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.subtext.is_empty()
    }
}

/// Baut den Tooltip-Inhalt für den aktuellen Sessionszustand.
///
/// Während des Zeichnens enthält die Unterzeile die laufende Gesamtdistanz bis
/// zum Cursor (sofern bekannt); nach Abschluss die finale Gesamtdistanz.
pub fn tooltip_text(session: &MeasureSession, cursor: Option<LatLng>) -> TooltipText {
    if !session.is_drawing() {
        return TooltipText {
            text: String::new(),
            subtext: session.format_distance(session.total_distance_m()),
        };
    }

    let running = cursor
        .map(|c| session.running_distance_m(c))
        .unwrap_or_else(|| session.total_distance_m());

    match session.vertices().len() {
        0 => TooltipText {
            text: TOOLTIP_START.to_string(),
            subtext: String::new(),
        },
        1 => TooltipText {
            text: TOOLTIP_CONTINUE.to_string(),
            subtext: session.format_distance(running),
        },
        _ => TooltipText {
            text: TOOLTIP_FINISH.to_string(),
            subtext: session.format_distance(running),
        },
    }
}
