use crate::core::LatLng;
use crate::shared::MeasureOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Mess-Tool ein-/ausschalten (Control-Button)
    MeasureToggleRequested,
    /// Primär-Klick im Viewport — Vertex setzen oder Linie abschließen
    ViewportClicked {
        geo_pos: LatLng,
        screen_pos: [f32; 2],
    },
    /// Sekundär-Klick — abgeschlossene Messung entfernen und neu beginnen
    ShapeCancelRequested,
    /// Escape — laufende Zeichnung verwerfen
    DrawingAborted,
    /// Cursor bewegt — Tooltip und Gummiband nachführen
    PointerMoved {
        geo_pos: LatLng,
        screen_pos: [f32; 2],
    },
    /// Cursor hat den Viewport verlassen
    PointerLeft,
    /// Kamera um Grad-Delta verschieben
    CameraPan { delta_deg: glam::DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_geo: Option<LatLng>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Options-Dialog öffnen/schließen
    OptionsDialogToggled,
    /// Options-Dialog schließen (Optionen werden persistiert)
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: MeasureOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
