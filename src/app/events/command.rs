use crate::core::LatLng;
use crate::shared::MeasureOptions;

/// Mutierende Commands — werden vom Controller ausgeführt.
/// Entstehen ausschließlich über das Intent→Command Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Mess-Tool aktivieren (frische Session) bzw. deaktivieren
    ToggleMeasure,
    /// Aktuelle Zeichnung verwerfen und neue beginnen
    RestartShape,
    /// Vertex an die laufende Zeichnung anhängen
    AddVertex { geo_pos: LatLng },
    /// Laufende Zeichnung abschließen
    FinishShape,
    /// Cursor-Position im State aktualisieren
    UpdatePointer {
        geo_pos: LatLng,
        screen_pos: [f32; 2],
    },
    /// Cursor-Position verwerfen (Pointer außerhalb des Viewports)
    ClearPointer,
    /// Kamera um Grad-Delta verschieben
    PanCamera { delta_deg: glam::DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    ZoomCamera {
        factor: f64,
        focus_geo: Option<LatLng>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Geänderte Optionen übernehmen (Session wird neu beschriftet)
    ApplyOptions { options: MeasureOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen als TOML neben der Binary speichern
    SaveOptions,
    /// Options-Dialog öffnen/schließen
    ToggleOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Anwendung beenden
    RequestExit,
}
