//! Zustandsmaschine einer Mess-Session.

use super::labeler::{SegmentLabel, SegmentLabeler};
use crate::core::geo::{haversine_distance, LatLng};
use crate::shared::MeasureOptions;

/// Phase einer Mess-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Zeichnung läuft — Klicks hängen Vertices an
    #[default]
    Drawing,
    /// Zeichnung abgeschlossen — Polylinie und Gesamtdistanz bleiben stehen
    Finished,
}

/// Eine Mess-Session besitzt ihre Vertex-Sequenz exklusiv: append-only während
/// des Zeichnens, vollständig verworfen bei Neustart. Kein Zustand wird über
/// Sessions hinweg geteilt.
pub struct MeasureSession {
    /// Alle bestätigten Vertices in Klick-Reihenfolge
    vertices: Vec<LatLng>,
    /// Abgeleitete Segment-Labels (nur wenn aktiviert)
    labels: Vec<SegmentLabel>,
    /// Summe aller fertigen Segment-Distanzen in Metern
    total_m: f64,
    phase: SessionPhase,
    labeler: SegmentLabeler,
    show_segment_labels: bool,
}

impl MeasureSession {
    /// Startet eine frische Session mit den übergebenen Optionen.
    pub fn new(options: &MeasureOptions) -> Self {
        Self {
            vertices: Vec::new(),
            labels: Vec::new(),
            total_m: 0.0,
            phase: SessionPhase::Drawing,
            labeler: SegmentLabeler::new(options),
            show_segment_labels: options.show_segment_labels,
        }
    }

    /// Verwirft Vertices, Labels und Gesamtdistanz und beginnt eine neue Zeichnung.
    pub fn start_shape(&mut self) {
        self.vertices.clear();
        self.labels.clear();
        self.total_m = 0.0;
        self.phase = SessionPhase::Drawing;
    }

    /// Hängt einen Vertex an. Existiert ein Vorgänger, wird das fertige Segment
    /// vermessen, zur Gesamtdistanz addiert und ggf. beschriftet.
    ///
    /// Gibt die Distanz des fertigen Segments zurück, `None` beim ersten Vertex
    /// oder wenn die Zeichnung bereits abgeschlossen ist.
    pub fn add_vertex(&mut self, p: LatLng) -> Option<f64> {
        if self.phase != SessionPhase::Drawing {
            return None;
        }

        let prev = self.vertices.last().copied();
        self.vertices.push(p);
        let prev = prev?;

        let distance = self.labeler.segment_distance(prev, p);
        self.total_m += distance;

        if self.show_segment_labels {
            if let Some(label) = self.labeler.label_for_segment(prev, p) {
                self.labels.push(label);
            }
        }

        Some(distance)
    }

    /// Beendet die Zeichnung; Polylinie und Messergebnis bleiben sichtbar.
    pub fn finish_shape(&mut self) {
        if self.vertices.len() >= 2 {
            self.phase = SessionPhase::Finished;
        }
    }

    /// Übernimmt geänderte Optionen und berechnet alle Labels neu
    /// (z.B. nach Einheiten-Wechsel mitten in der Session).
    pub fn set_options(&mut self, options: &MeasureOptions) {
        self.labeler = SegmentLabeler::new(options);
        self.show_segment_labels = options.show_segment_labels;

        self.labels.clear();
        if self.show_segment_labels {
            for pair in self.vertices.windows(2) {
                if let Some(label) = self.labeler.label_for_segment(pair[0], pair[1]) {
                    self.labels.push(label);
                }
            }
        }
    }

    /// Alle Vertices der laufenden bzw. abgeschlossenen Zeichnung.
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    /// Alle abgeleiteten Segment-Labels.
    pub fn labels(&self) -> &[SegmentLabel] {
        &self.labels
    }

    /// Letzter gesetzter Vertex.
    pub fn last_vertex(&self) -> Option<LatLng> {
        self.vertices.last().copied()
    }

    /// Summe aller fertigen Segment-Distanzen in Metern.
    pub fn total_distance_m(&self) -> f64 {
        self.total_m
    }

    /// Laufende Distanz inklusive des angefangenen Segments bis zum Cursor.
    /// Nach Abschluss der Zeichnung zählt nur noch die Gesamtdistanz.
    pub fn running_distance_m(&self, cursor: LatLng) -> f64 {
        match (self.phase, self.vertices.last()) {
            (SessionPhase::Drawing, Some(&last)) => self.total_m + haversine_distance(last, cursor),
            _ => self.total_m,
        }
    }

    /// Läuft die Zeichnung noch?
    pub fn is_drawing(&self) -> bool {
        self.phase == SessionPhase::Drawing
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Formatiert eine Distanz gemäß der Session-Einheiten.
    pub fn format_distance(&self, meters: f64) -> String {
        self.labeler.format(meters)
    }
}
