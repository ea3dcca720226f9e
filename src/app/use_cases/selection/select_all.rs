//! "Select All"-Varianten über die aktive Map.

use super::helpers::{clear_selection, collect_in_active_map, replace_selection};
use crate::core::{Entity, SelectionFilter};
use crate::AppState;
use std::collections::HashSet;

/// Selektiert alle Entities der aktiven Map, die die konfigurierten Filter erfüllen.
///
/// Liefert die Anzahl der selektierten Entities. Die bisherige Selektion wird
/// immer verworfen, auch wenn keine Map aktiv ist.
pub fn select_all_by_configuration(state: &mut AppState) -> usize {
    clear_selection(state);
    let filter = SelectionFilter::new(&state.ui.select_all.inputs, state.ui.select_all.mode);
    let Some(matches) = collect_in_active_map(state, |entity| filter.matches(entity)) else {
        log::warn!("Select All by Configuration: keine Map geladen");
        return 0;
    };

    let count = matches.len();
    replace_selection(state, matches, false);
    log::info!(
        "Select All by Configuration: {} Entities selektiert ({:?})",
        count,
        filter.mode()
    );
    count
}

/// Selektiert alle Entities der aktiven Map, deren Typ einem selektierten Typ entspricht.
pub fn select_all_by_kind(state: &mut AppState) -> usize {
    let kinds: HashSet<String> = selected_entities(state)
        .map(|entity| entity.kind.clone())
        .collect();
    if kinds.is_empty() {
        log::warn!("Select All by Type: keine Entity selektiert");
        state.ui.set_status("No object selected");
        return 0;
    }
    select_matching(state, "Type", |entity| kinds.contains(&entity.kind))
}

/// Selektiert alle Entities der aktiven Map mit einem selektierten Modellnamen.
pub fn select_all_by_model_name(state: &mut AppState) -> usize {
    let models: HashSet<String> = selected_entities(state)
        .filter_map(Entity::model_name)
        .map(str::to_string)
        .collect();
    if models.is_empty() {
        log::warn!("Select All by Model Name: keine Entity mit Modellnamen selektiert");
        state.ui.set_status("No object selected");
        return 0;
    }
    select_matching(state, "Model Name", |entity| {
        entity.model_name().is_some_and(|model| models.contains(model))
    })
}

fn selected_entities(state: &AppState) -> impl Iterator<Item = &Entity> {
    state
        .selection
        .entities()
        .filter_map(|entity_ref| state.maps.entity(entity_ref))
}

fn select_matching(
    state: &mut AppState,
    label: &str,
    predicate: impl FnMut(&Entity) -> bool,
) -> usize {
    let Some(matches) = collect_in_active_map(state, predicate) else {
        log::warn!("Select All by {}: keine Map geladen", label);
        return 0;
    };
    let count = matches.len();
    replace_selection(state, matches, false);
    log::info!("Select All by {}: {} Entities selektiert", label, count);
    count
}
