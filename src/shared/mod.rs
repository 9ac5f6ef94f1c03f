//! Geteilte Typen und reine Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, Formatierung und Geometrie, die zwischen `app`
//! und `ui` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod format;
pub mod options;
pub mod segment_geometry;

pub use format::readable_distance;
pub use options::MeasureOptions;
pub use options::{CAMERA_SCROLL_ZOOM_STEP, CAMERA_ZOOM_STEP, FINISH_SNAP_RADIUS_PX};
pub use segment_geometry::point_along_segment;
