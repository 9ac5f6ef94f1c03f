//! Core-Domänentypen: geographische Koordinaten und Karten-Kamera.

pub mod camera;
pub mod geo;

pub use camera::MapCamera;
pub use geo::{haversine_distance, LatLng, EARTH_RADIUS_M};
