//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EntityRef, FilterMode};

/// Selektiert eine Entity (ersetzend oder additiv).
pub fn select_entity(state: &mut AppState, entity: EntityRef, additive: bool) {
    use_cases::selection::select_entity(state, entity, additive);
}

/// Schaltet die Selektion einer Entity um.
pub fn toggle_entity(state: &mut AppState, entity: EntityRef) {
    use_cases::selection::toggle_entity(state, entity);
}

/// Selektiert den Container einer Map.
pub fn select_map_root(state: &mut AppState, map_id: &str, additive: bool) {
    use_cases::selection::select_map_root(state, map_id, additive);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Löscht das Sprungziel, nachdem der Content-Baum es angezeigt hat.
pub fn clear_goto_target(state: &mut AppState) {
    state.selection.clear_goto_target();
}

/// Übernimmt die Filter-Eingaben für Select-All.
pub fn set_select_all_filters(state: &mut AppState, inputs: Vec<String>) {
    state.ui.select_all.inputs = inputs;
}

/// Übernimmt den Verknüpfungsmodus für Select-All.
pub fn set_select_all_mode(state: &mut AppState, mode: FilterMode) {
    state.ui.select_all.mode = mode;
}

/// Select All by Configuration.
pub fn select_all_by_configuration(state: &mut AppState) {
    use_cases::selection::select_all_by_configuration(state);
}

/// Select All by Type.
pub fn select_all_by_kind(state: &mut AppState) {
    use_cases::selection::select_all_by_kind(state);
}

/// Select All by Model Name.
pub fn select_all_by_model_name(state: &mut AppState) {
    use_cases::selection::select_all_by_model_name(state);
}
