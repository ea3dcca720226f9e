//! Handler für Selection-Group-Operationen.
//!
//! Validierungsfehler landen als Statusmeldung beim Benutzer und brechen die
//! Command-Kette nicht ab. Schreibfehler des Dokuments werden weitergereicht.

use crate::app::selection_groups::{keybind_from_index, GroupError};
use crate::app::use_cases;
use crate::app::AppState;

/// Meldet einen Gruppen-Fehler: Validierung als Status, Persistenz als Fehler.
fn report(state: &mut AppState, error: GroupError) -> anyhow::Result<()> {
    match error {
        GroupError::Persist { .. } | GroupError::Serialize(_) => {
            state.ui.set_status(error.to_string());
            Err(error.into())
        }
        validation => {
            log::warn!("Selection-Group: {}", validation);
            state.ui.set_status(validation.to_string());
            Ok(())
        }
    }
}

/// Legt eine Gruppe aus der aktuellen Selektion an.
pub fn create(
    state: &mut AppState,
    name: &str,
    tags: Vec<String>,
    keybind: i32,
) -> anyhow::Result<()> {
    let result = keybind_from_index(keybind).and_then(|keybind| {
        use_cases::selection::create_group_from_selection(state, name, tags, keybind)
    });
    match result {
        Ok(_) => Ok(()),
        Err(error) => report(state, error),
    }
}

/// Ändert Name, Tags und Keybind einer Gruppe.
pub fn edit(
    state: &mut AppState,
    old_name: &str,
    new_name: &str,
    tags: Vec<String>,
    keybind: i32,
) -> anyhow::Result<()> {
    let result = keybind_from_index(keybind)
        .and_then(|keybind| state.groups.edit(old_name, new_name.trim(), tags, keybind));
    match result {
        Ok(()) => Ok(()),
        Err(error) => report(state, error),
    }
}

/// Merkt eine Gruppe zum Löschen vor und fragt nach.
pub fn request_delete(state: &mut AppState, name: String) -> anyhow::Result<()> {
    if state.groups.get(&name).is_none() {
        return report(state, GroupError::NotFound(name));
    }
    state.ui.set_status(format!(
        "You are about to delete selection group '{name}'. Are you sure?"
    ));
    state.ui.pending_group_delete = Some(name);
    Ok(())
}

/// Verwirft eine offene Lösch-Rückfrage.
pub fn cancel_delete(state: &mut AppState) {
    if let Some(name) = state.ui.pending_group_delete.take() {
        log::debug!("Löschen von Selection-Group '{}' abgebrochen", name);
    }
}

/// Löscht eine Gruppe.
pub fn delete(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    if state.ui.pending_group_delete.as_deref() == Some(name) {
        state.ui.pending_group_delete = None;
    }
    match state.groups.delete(name) {
        Ok(()) => Ok(()),
        Err(error) => report(state, error),
    }
}

/// Ruft eine Gruppe per Name ab.
pub fn recall(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    match use_cases::selection::recall_group_by_name(state, name) {
        Ok(_) => Ok(()),
        Err(error) => report(state, error),
    }
}

/// Ruft eine Gruppe per Keybind ab (unbekannter Keybind: No-op).
pub fn recall_by_keybind(state: &mut AppState, keybind: u8) {
    use_cases::selection::recall_group_by_keybind(state, keybind);
}
