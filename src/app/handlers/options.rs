//! Handler für Optionen-Dialog und Options-Persistenz.

use crate::app::AppState;
use crate::shared::MeasureOptions;

/// Übernimmt geänderte Optionen; eine laufende Session wird mit den neuen
/// Einheiten neu beschriftet.
pub fn apply_options(state: &mut AppState, options: MeasureOptions) {
    state.options = options;
    if let Some(session) = &mut state.session {
        session.set_options(&state.options);
    }
}

/// Setzt alle Optionen auf die Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    apply_options(state, MeasureOptions::default());
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}

/// Speichert die Optionen als TOML neben der Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&MeasureOptions::config_path())
}

/// Öffnet bzw. schließt den Options-Dialog.
pub fn toggle_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = !state.ui.show_options_dialog;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}
