//! Abrufen und Anlegen von Selection-Groups.

use super::helpers::replace_selection;
use crate::app::selection_groups::GroupError;
use crate::core::EntityRef;
use crate::AppState;

/// Ersetzt die Selektion durch die Entities einer Gruppe (über alle Maps).
///
/// Unbekannte Namen werden übersprungen. Liefert die Anzahl selektierter Entities.
fn recall(state: &mut AppState, names: &[String]) -> usize {
    let targets: Vec<EntityRef> = state.maps.find_by_names(names).collect();
    let count = targets.len();
    let frame = state.options.group_frame_selection;
    replace_selection(state, targets, frame);
    count
}

/// Ruft die Gruppe mit dem Keybind `keybind` ab. Unbekannter Keybind: No-op.
pub fn recall_group_by_keybind(state: &mut AppState, keybind: u8) -> usize {
    let Some(group) = state.groups.find_by_keybind(keybind) else {
        log::debug!("Keine Selection-Group auf Keybind {}", keybind);
        return 0;
    };
    let (name, names) = (group.name.clone(), group.selection.clone());
    let count = recall(state, &names);
    log::info!(
        "Selection-Group '{}' (Key {}) abgerufen: {} Entities",
        name,
        keybind,
        count
    );
    count
}

/// Ruft eine Gruppe per Name ab.
pub fn recall_group_by_name(state: &mut AppState, name: &str) -> Result<usize, GroupError> {
    let names = state
        .groups
        .get(name)
        .map(|group| group.selection.clone())
        .ok_or_else(|| GroupError::NotFound(name.to_string()))?;
    let count = recall(state, &names);
    log::info!("Selection-Group '{}' abgerufen: {} Entities", name, count);
    Ok(count)
}

/// Legt eine Gruppe aus der aktuellen Selektion an.
///
/// Ist `name` leer und `group_auto_creation` aktiv, wird der Name der ersten
/// selektierten Entity verwendet. Liefert den verwendeten Gruppennamen.
pub fn create_group_from_selection(
    state: &mut AppState,
    name: &str,
    tags: Vec<String>,
    keybind: Option<u8>,
) -> Result<String, GroupError> {
    let selected_names: Vec<String> = state
        .selection
        .entities()
        .filter_map(|entity_ref| state.maps.entity(entity_ref))
        .map(|entity| entity.name.clone())
        .collect();

    let name = match name.trim() {
        "" if state.options.group_auto_creation => {
            selected_names.first().cloned().unwrap_or_default()
        }
        trimmed => trimmed.to_string(),
    };

    state.groups.create(&name, tags, selected_names, keybind)?;
    Ok(name)
}
