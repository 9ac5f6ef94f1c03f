//! Zentrale Konfiguration für das Mess-Tool.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Einheiten ───────────────────────────────────────────────────────

/// Metrische Anzeige (Meter/Kilometer) als Standard.
pub const USE_METRIC: bool = true;
/// Imperiale Anzeige in Fuß statt Meilen.
pub const USE_FEET: bool = false;

// ── Messung ─────────────────────────────────────────────────────────

/// Segment-Labels in der Segment-Mitte anzeigen.
pub const SHOW_SEGMENT_LABELS: bool = true;
/// Klick innerhalb dieses Pixel-Radius um den letzten Vertex schließt die Linie ab.
pub const FINISH_SNAP_RADIUS_PX: f32 = 10.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke der Mess-Polylinie in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;
/// Vertex-Radius in Pixeln.
pub const VERTEX_RADIUS_PX: f32 = 4.0;
/// Farbe der Mess-Polylinie (RGBA: Rot).
pub const LINE_COLOR: [f32; 4] = [0.95, 0.27, 0.12, 0.9];
/// Farbe der Vertex-Marker (RGBA: Weiß mit rotem Rand über der Linie).
pub const VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Textfarbe der Segment-Labels (RGBA).
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Toolbar-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Mess-Tools.
/// Wird als `map_measure_tool.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureOptions {
    // ── Einheiten ───────────────────────────────────────────────
    /// Metrische Anzeige (Meter/Kilometer)
    pub use_metric: bool,
    /// Imperiale Anzeige in Fuß statt Meilen
    pub use_feet: bool,

    // ── Messung ─────────────────────────────────────────────────
    /// Segment-Labels in der Segment-Mitte anzeigen
    pub show_segment_labels: bool,
    /// Pixel-Radius um den letzten Vertex, der die Linie abschließt
    #[serde(default = "default_finish_snap_radius_px")]
    pub finish_snap_radius_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke der Mess-Polylinie in Pixeln
    pub line_width_px: f32,
    /// Vertex-Radius in Pixeln
    pub vertex_radius_px: f32,
    /// Farbe der Mess-Polylinie (RGBA)
    pub line_color: [f32; 4],
    /// Farbe der Vertex-Marker (RGBA)
    pub vertex_color: [f32; 4],
    /// Textfarbe der Segment-Labels (RGBA)
    pub label_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Schritt bei Toolbar-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            use_metric: USE_METRIC,
            use_feet: USE_FEET,

            show_segment_labels: SHOW_SEGMENT_LABELS,
            finish_snap_radius_px: FINISH_SNAP_RADIUS_PX,

            line_width_px: LINE_WIDTH_PX,
            vertex_radius_px: VERTEX_RADIUS_PX,
            line_color: LINE_COLOR,
            vertex_color: VERTEX_COLOR,
            label_color: LABEL_COLOR,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `finish_snap_radius_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_finish_snap_radius_px() -> f32 {
    FINISH_SNAP_RADIUS_PX
}

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_measure_tool"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_measure_tool.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = MeasureOptions::default();
        assert!(opts.use_metric);
        assert!(!opts.use_feet);
        assert!(opts.show_segment_labels);
        assert_eq!(opts.finish_snap_radius_px, FINISH_SNAP_RADIUS_PX);
    }

    #[test]
    fn test_toml_roundtrip_preserves_units() {
        let mut opts = MeasureOptions::default();
        opts.use_metric = false;
        opts.use_feet = true;
        opts.show_segment_labels = false;

        let serialized = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let restored: MeasureOptions = toml::from_str(&serialized).expect("Parse erwartet");
        assert_eq!(restored, opts);
    }
}
