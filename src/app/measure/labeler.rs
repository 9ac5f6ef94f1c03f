//! Segment-Labeler: Distanz, Label-Position und Text für fertige Segmente.

use crate::core::geo::{haversine_distance, LatLng};
use crate::shared::format::readable_distance;
use crate::shared::segment_geometry::point_along_segment;
use crate::shared::MeasureOptions;

/// Abgeleitetes Segment-Label — wird bei jedem fertigen Segment neu berechnet,
/// nie gespeichert über die Session hinaus.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLabel {
    /// Position des Labels auf halber Strecke des Segments
    pub position: LatLng,
    /// Anzeigetext (formatierte Distanz)
    pub text: String,
}

/// Berechnet Distanz und Label für jeweils ein fertiges Segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentLabeler {
    use_metric: bool,
    use_feet: bool,
}

impl SegmentLabeler {
    /// Erstellt einen Labeler mit den Einheiten-Optionen der Session.
    pub fn new(options: &MeasureOptions) -> Self {
        Self {
            use_metric: options.use_metric,
            use_feet: options.use_feet,
        }
    }

    /// Großkreis-Distanz des Segments (prev, next) in Metern.
    pub fn segment_distance(&self, prev: LatLng, next: LatLng) -> f64 {
        haversine_distance(prev, next)
    }

    /// Label in der Segment-Mitte: die Position liegt auf halber Strecke,
    /// der Text ist die Distanz vom vorherigen Vertex bis zur Label-Position.
    ///
    /// `None` bei degenerierter Geometrie (Segment der Länge 0 oder numerisch
    /// unplatzierbar) — das Segment bleibt dann unbeschriftet.
    pub fn label_for_segment(&self, prev: LatLng, next: LatLng) -> Option<SegmentLabel> {
        let half = self.segment_distance(prev, next) / 2.0;
        let position = point_along_segment(prev, next, half)?;

        Some(SegmentLabel {
            position,
            text: self.format(half),
        })
    }

    /// Formatiert eine Distanz gemäß der Einheiten-Optionen.
    pub fn format(&self, meters: f64) -> String {
        readable_distance(meters, self.use_metric, self.use_feet)
    }
}
