//! Handler für Laden, Entladen und Speichern von Maps.

use crate::app::use_cases;
use crate::app::use_cases::map_io::SaveError;
use crate::app::AppState;
use std::path::Path;

/// Lädt einen Map-Dump synchron.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::map_io::load_map(state, path)
}

/// Startet das Laden eines Map-Dumps im Hintergrund.
pub fn start_load(state: &mut AppState, path: &Path) {
    use_cases::map_io::start_map_load(state, path);
}

/// Entlädt eine Map.
pub fn unload(state: &mut AppState, map_id: &str) {
    use_cases::map_io::unload_map(state, map_id);
}

/// Entlädt alle Maps.
pub fn unload_all(state: &mut AppState) {
    use_cases::map_io::unload_all_maps(state);
}

/// Wechselt die aktive Map.
pub fn set_active(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    use_cases::map_io::set_active_map(state, map_id)
}

/// Speichert alle Maps. Fehlende Verweise öffnen den Speicherfehler-Dialog.
pub fn save_all(state: &mut AppState, dir: &Path) -> anyhow::Result<()> {
    match use_cases::map_io::save_all_maps(state, dir) {
        Ok(_) => {
            state.ui.save_failure = None;
            Ok(())
        }
        Err(error) => match error.downcast_ref::<SaveError>() {
            Some(save_error) => {
                let save_error = save_error.clone();
                use_cases::map_io::report_save_failure(state, &save_error);
                Ok(())
            }
            None => Err(error),
        },
    }
}

/// Selektiert die verweisende Entity des offenen Speicherfehlers.
pub fn select_save_failure_referrer(state: &mut AppState) {
    use_cases::map_io::select_save_failure_referrer(state);
}

/// Schließt den Speicherfehler-Dialog.
pub fn dismiss_save_failure(state: &mut AppState) {
    state.ui.save_failure = None;
}
