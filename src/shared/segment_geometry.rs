//! Reine Geometrie für die Label-Platzierung entlang eines Segments.
//!
//! Layer-neutral: kann von `measure`, `ui` und Tests importiert werden,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::geo::{haversine_distance, LatLng};

/// Platziert einen Punkt `target_m` Meter entlang der Strecke von `prev` nach `next`.
///
/// Planare Näherung über ein rechtwinkliges Referenz-Dreieck mit achsenparallelen
/// Katheten: der Eckpunkt `(next.lat, prev.lng)` spannt die Breitengrad-Kathete auf,
/// die zweite Kathete folgt aus dem Satz des Pythagoras. Beide Katheten werden auf
/// die Ziel-Distanz skaliert und über die Koordinaten-Deltas in die Grad-Ebene
/// zurückprojiziert. Nur für kurze Segmente brauchbar — die Erdkrümmung wird
/// vernachlässigt, keine echte Großkreis-Interpolation.
///
/// `None` wenn das Segment die Länge 0 hat oder die Konstruktion numerisch keine
/// gültige Koordinate liefert; das Segment bleibt dann unbeschriftet.
pub fn point_along_segment(prev: LatLng, next: LatLng, target_m: f64) -> Option<LatLng> {
    let origin_hyp = haversine_distance(prev, next);
    if origin_hyp <= 0.0 {
        return None;
    }

    let corner = LatLng::new(next.lat, prev.lng);
    let origin_cath_a = haversine_distance(prev, corner);

    let sin = origin_cath_a / origin_hyp;
    let new_cath_a = target_m * sin;
    // sin kann durch Rundung minimal über 1 liegen — der Radikand würde negativ
    let radicand = target_m * target_m - new_cath_a * new_cath_a;
    if radicand < 0.0 {
        return None;
    }
    let new_cath_b = radicand.sqrt();

    let origin_cath_b = (origin_hyp * origin_hyp - origin_cath_a * origin_cath_a)
        .max(0.0)
        .sqrt();

    // Achsenparallele Segmente: eine Referenz-Kathete ist 0, ihr Beitrag entfällt
    // statt durch 0/0 zu teilen.
    let d_lat = if origin_cath_a > f64::EPSILON {
        new_cath_a * (next.lat - prev.lat) / origin_cath_a
    } else {
        0.0
    };
    let d_lng = if origin_cath_b > f64::EPSILON {
        new_cath_b * (next.lng - prev.lng) / origin_cath_b
    } else {
        0.0
    };

    let result = LatLng::new(prev.lat + d_lat, prev.lng + d_lng);
    if result.lat.is_finite() && result.lng.is_finite() {
        Some(result)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint_along_equator() {
        let prev = LatLng::new(0.0, 0.0);
        let next = LatLng::new(0.0, 1.0);
        let d = haversine_distance(prev, next);

        let mid = point_along_segment(prev, next, d / 2.0).expect("Platzierung erwartet");
        assert_relative_eq!(mid.lng, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.lat, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_along_meridian() {
        let prev = LatLng::new(10.0, 5.0);
        let next = LatLng::new(12.0, 5.0);
        let d = haversine_distance(prev, next);

        let mid = point_along_segment(prev, next, d / 2.0).expect("Platzierung erwartet");
        assert_relative_eq!(mid.lat, 11.0, epsilon = 1e-6);
        assert_relative_eq!(mid.lng, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_diagonal_segment_stays_between_endpoints() {
        let prev = LatLng::new(48.0, 11.0);
        let next = LatLng::new(48.1, 11.1);
        let d = haversine_distance(prev, next);

        let mid = point_along_segment(prev, next, d / 2.0).expect("Platzierung erwartet");
        assert!(mid.lat > prev.lat && mid.lat < next.lat);
        assert!(mid.lng > prev.lng && mid.lng < next.lng);
    }

    #[test]
    fn test_degenerate_segment_yields_none() {
        let p = LatLng::new(7.0, 7.0);
        assert_eq!(point_along_segment(p, p, 100.0), None);
    }

    #[test]
    fn test_full_distance_lands_near_endpoint() {
        let prev = LatLng::new(50.0, 8.0);
        let next = LatLng::new(50.02, 8.03);
        let d = haversine_distance(prev, next);

        let end = point_along_segment(prev, next, d).expect("Platzierung erwartet");
        assert_relative_eq!(end.lat, next.lat, epsilon = 1e-4);
        assert_relative_eq!(end.lng, next.lng, epsilon = 1e-4);
    }
}
