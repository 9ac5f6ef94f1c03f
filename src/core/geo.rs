//! Geographische Primitiven: Koordinaten und Großkreis-Distanz.

use glam::DVec2;

/// Erdradius in Metern (Kugelmodell).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Geographische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Koordinate aus Breiten- und Längengrad.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Koordinate als Vektor der Grad-Ebene (x = Längengrad, y = Breitengrad).
    pub fn to_degree_plane(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Koordinate aus einem Vektor der Grad-Ebene.
    pub fn from_degree_plane(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }
}

/// Großkreis-Distanz zwischen zwei Koordinaten in Metern (Haversine).
///
/// Total über alle endlichen Eingaben: identische Punkte liefern 0,
/// Antipoden den halben Erdumfang. Symmetrisch in beiden Argumenten.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rundungsfehler können h minimal über 1 treiben — asin bliebe sonst NaN
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
