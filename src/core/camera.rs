//! 2D-Kamera über der Grad-Ebene für Pan und Zoom.
//!
//! Äquirektanguläre Sicht: x = Längengrad, y = Breitengrad. Keine
//! Kachel-Projektion — das Tool rendert nur die Mess-Geometrie.

use glam::{DVec2, Vec2};

use super::geo::LatLng;

/// 2D-Kamera mit Pan und Zoom über Längen-/Breitengrad
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kamera-Zentrum in der Grad-Ebene (x = Längengrad, y = Breitengrad)
    pub center: DVec2,
    /// Zoom-Level (1.0 = volle Längengrad-Spanne sichtbar)
    pub zoom: f64,
}

impl MapCamera {
    /// Sichtbare halbe Längengrad-Spanne bei Zoom 1.0.
    pub const BASE_EXTENT_DEG: f64 = 180.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.5;
    /// Maximaler Zoom-Faktor (Straßen-Niveau).
    pub const ZOOM_MAX: f64 = 1_000_000.0;

    /// Erstellt eine neue Kamera über dem Null-Meridian.
    pub fn new() -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf eine Koordinate.
    pub fn look_at(&mut self, target: LatLng) {
        self.center = target.to_degree_plane();
    }

    /// Verschiebt die Kamera um ein Grad-Delta (Pan).
    pub fn pan(&mut self, delta_deg: DVec2) {
        self.center += delta_deg;
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt um `factor` und hält dabei `focus` an derselben Bildschirmposition.
    pub fn zoom_towards(&mut self, factor: f64, focus: LatLng) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let applied = self.zoom / old_zoom;
        let focus = focus.to_degree_plane();
        self.center = focus + (self.center - focus) / applied;
    }

    /// Konvertiert Screen-Koordinaten (Pixel, Ursprung links oben) zu einer
    /// geographischen Koordinate. Berücksichtigt Zoom und Aspekt-Ratio;
    /// Screen-Y wächst nach unten, Breitengrad nach oben.
    pub fn screen_to_geo(&self, screen_pos: Vec2, screen_size: Vec2) -> LatLng {
        let ndc_x = (screen_pos.x / screen_size.x) as f64 * 2.0 - 1.0;
        let ndc_y = (screen_pos.y / screen_size.y) as f64 * 2.0 - 1.0;
        let aspect = (screen_size.x / screen_size.y) as f64;

        LatLng::from_degree_plane(DVec2::new(
            self.center.x + ndc_x * Self::BASE_EXTENT_DEG * aspect / self.zoom,
            self.center.y - ndc_y * Self::BASE_EXTENT_DEG / self.zoom,
        ))
    }

    /// Konvertiert eine geographische Koordinate zu Screen-Koordinaten (Pixel).
    pub fn geo_to_screen(&self, pos: LatLng, screen_size: Vec2) -> Vec2 {
        let p = pos.to_degree_plane();
        let aspect = (screen_size.x / screen_size.y) as f64;

        let ndc_x = (p.x - self.center.x) * self.zoom / (Self::BASE_EXTENT_DEG * aspect);
        let ndc_y = -(p.y - self.center.y) * self.zoom / Self::BASE_EXTENT_DEG;

        Vec2::new(
            ((ndc_x + 1.0) / 2.0) as f32 * screen_size.x,
            ((ndc_y + 1.0) / 2.0) as f32 * screen_size.y,
        )
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Grad.
    pub fn degrees_per_pixel(&self, viewport_height: f32) -> f64 {
        let vh = viewport_height.max(1.0) as f64;
        2.0 * Self::BASE_EXTENT_DEG / (self.zoom * vh)
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = MapCamera::new();
        camera.pan(DVec2::new(10.0, 5.0));
        assert_relative_eq!(camera.center.x, 10.0);
        assert_relative_eq!(camera.center.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_clamped() {
        let mut camera = MapCamera::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1e-9);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn test_screen_center_maps_to_camera_center() {
        let mut camera = MapCamera::new();
        camera.look_at(LatLng::new(48.0, 11.0));
        let screen_size = Vec2::new(800.0, 600.0);

        let geo = camera.screen_to_geo(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(geo.lat, 48.0, epsilon = 1e-9);
        assert_relative_eq!(geo.lng, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_geo_roundtrip() {
        let mut camera = MapCamera::new();
        camera.look_at(LatLng::new(52.5, 13.4));
        camera.zoom = 5000.0;
        let screen_size = Vec2::new(1280.0, 720.0);

        let screen = Vec2::new(413.0, 222.0);
        let geo = camera.screen_to_geo(screen, screen_size);
        let back = camera.geo_to_screen(geo, screen_size);
        assert_relative_eq!(back.x, screen.x, epsilon = 0.01);
        assert_relative_eq!(back.y, screen.y, epsilon = 0.01);
    }

    #[test]
    fn test_screen_y_down_means_lat_down() {
        let camera = MapCamera::new();
        let screen_size = Vec2::new(800.0, 600.0);

        let upper = camera.screen_to_geo(Vec2::new(400.0, 100.0), screen_size);
        let lower = camera.screen_to_geo(Vec2::new(400.0, 500.0), screen_size);
        assert!(upper.lat > lower.lat);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_position() {
        let mut camera = MapCamera::new();
        camera.look_at(LatLng::new(48.0, 11.0));
        camera.zoom = 100.0;
        let screen_size = Vec2::new(800.0, 600.0);

        let focus_screen = Vec2::new(600.0, 150.0);
        let focus = camera.screen_to_geo(focus_screen, screen_size);
        camera.zoom_towards(2.0, focus);

        let after = camera.geo_to_screen(focus, screen_size);
        assert_relative_eq!(after.x, focus_screen.x, epsilon = 0.01);
        assert_relative_eq!(after.y, focus_screen.y, epsilon = 0.01);
    }

    #[test]
    fn test_degrees_per_pixel_halves_with_double_zoom() {
        let mut camera = MapCamera::new();
        let dpp1 = camera.degrees_per_pixel(600.0);
        camera.zoom = 2.0;
        let dpp2 = camera.degrees_per_pixel(600.0);
        assert_relative_eq!(dpp2, dpp1 / 2.0);
    }
}
