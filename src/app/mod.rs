//! Application-Layer: Controller, State, Events und Mess-Session.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod measure;
pub mod state;

pub use crate::core::MapCamera;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use measure::{MeasureSession, SegmentLabel, SessionPhase, TooltipText};
pub use state::{AppState, UiState, ViewState};
