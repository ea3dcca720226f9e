//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::state::Selectable;
use crate::core::EntityRef;
use crate::AppState;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Selektiert genau eine Entity (bzw. fügt sie bei `additive` hinzu).
pub fn select_entity(state: &mut AppState, entity_ref: EntityRef, additive: bool) {
    if state.maps.entity(&entity_ref).is_none() {
        log::warn!("Selektion ignoriert: Entity {} existiert nicht", entity_ref);
        return;
    }
    if !additive {
        state.selection.clear();
    }
    state.selection.add(entity_ref);
}

/// Schaltet die Selektion einer Entity um.
pub fn toggle_entity(state: &mut AppState, entity_ref: EntityRef) {
    if state.maps.entity(&entity_ref).is_none() {
        log::warn!("Toggle ignoriert: Entity {} existiert nicht", entity_ref);
        return;
    }
    state.selection.toggle(entity_ref);
}

/// Selektiert den Container einer ganzen Map.
pub fn select_map_root(state: &mut AppState, map_id: &str, additive: bool) {
    if !state.maps.is_loaded(map_id) {
        log::warn!("Selektion ignoriert: Map {} ist nicht geladen", map_id);
        return;
    }
    if !additive {
        state.selection.clear();
    }
    state.selection.add(Selectable::MapRoot(map_id.to_string()));
}

/// Ersetzt die Selektion durch `targets` und setzt optional das Sprungziel.
pub(super) fn replace_selection(state: &mut AppState, targets: Vec<EntityRef>, frame: bool) {
    let first = targets.first().cloned();
    state.selection.replace(targets);
    if frame {
        if let Some(first) = first {
            state.selection.set_goto_target(first);
        }
    }
}

/// Alle Entities der aktiven Map, die `predicate` erfüllen.
pub(super) fn collect_in_active_map(
    state: &AppState,
    mut predicate: impl FnMut(&crate::core::Entity) -> bool,
) -> Option<Vec<EntityRef>> {
    let container = state.maps.active()?;
    Some(
        container
            .iter()
            .filter(|(_, entity)| predicate(entity))
            .map(|(id, _)| EntityRef::new(container.map_id(), id))
            .collect(),
    )
}
