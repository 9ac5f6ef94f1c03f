//! Application State — zentrale Datenhaltung.

use super::measure::MeasureSession;
use super::CommandLog;
use crate::core::{LatLng, MapCamera};
use crate::shared::MeasureOptions;

/// Kamera- und Viewport-Zustand.
pub struct ViewState {
    /// Kamera über der Grad-Ebene
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            camera: MapCamera::new(),
            viewport_size: [1280.0, 720.0],
        }
    }
}

/// UI-Zustand: Dialoge und Cursor.
#[derive(Default)]
pub struct UiState {
    /// Ob der Options-Dialog sichtbar ist
    pub show_options_dialog: bool,
    /// Letzte bekannte Cursor-Position (geographisch)
    pub pointer_geo: Option<LatLng>,
    /// Letzte bekannte Cursor-Position (Pixel im Viewport)
    pub pointer_screen: Option<[f32; 2]>,
}

/// Zentraler Anwendungszustand.
///
/// Die Mess-Session ist `Some` solange das Tool aktiv ist — es gibt genau
/// eine aktive Session, explizit hier gehalten statt als globaler
/// Handler-Singleton.
#[derive(Default)]
pub struct AppState {
    /// Aktive Mess-Session (None = Tool aus)
    pub session: Option<MeasureSession>,
    /// Laufzeit-Optionen
    pub options: MeasureOptions,
    /// Kamera und Viewport
    pub view: ViewState,
    /// Dialoge und Cursor
    pub ui: UiState,
    /// Log aller ausgeführten Commands
    pub command_log: CommandLog,
    /// Signalisiert der UI-Schleife das Beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Standardzustand (Tool aus, Standard-Optionen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Ist das Mess-Tool aktiv?
    pub fn measure_enabled(&self) -> bool {
        self.session.is_some()
    }
}
