//! Map-Measure-Tool Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, MeasureSession, SegmentLabel, SessionPhase,
    TooltipText,
};
pub use core::{haversine_distance, LatLng, MapCamera, EARTH_RADIUS_M};
pub use shared::{point_along_segment, readable_distance, MeasureOptions};
