//! Use-Case-Funktionen für Bearbeitungen der selektierten Entities.
//!
//! Jede Funktion baut eine Action aus der aktuellen Selektion und führt sie
//! über die History aus. Leere Selektion: No-op.

use crate::app::actions::{
    CompoundAction, DeleteEntitiesAction, DuplicateEntitiesAction, ReorderDirection, ReorderEntityAction,
    RotateEntitiesAction, ScrambleEntitiesAction, SetPropertyAction, SetVisibilityAction,
    TranslateEntitiesAction, VisibilityChange,
};
use crate::app::AppState;
use crate::core::{EntityRef, PropertyValue};
use glam::Vec3;

fn selected_targets(state: &AppState, operation: &str) -> Option<Vec<EntityRef>> {
    let targets = state.selection.entity_refs();
    if targets.is_empty() {
        log::debug!("{}: keine Entity selektiert", operation);
        None
    } else {
        Some(targets)
    }
}

/// Dupliziert die selektierten Entities; die Kopien werden selektiert.
pub fn duplicate_selected(state: &mut AppState) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Duplicate") else {
        return Ok(());
    };
    let count = targets.len();
    state.execute_action(Box::new(DuplicateEntitiesAction::new(targets)))?;
    log::info!("{} Entities dupliziert", count);
    Ok(())
}

/// Löscht die selektierten Entities.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Delete") else {
        return Ok(());
    };
    let count = targets.len();
    state.execute_action(Box::new(DeleteEntitiesAction::new(targets)))?;
    log::info!("{} Entities gelöscht", count);
    Ok(())
}

/// Verschiebt die erste selektierte Entity in der Container-Reihenfolge.
pub fn reorder_selected(state: &mut AppState, direction: ReorderDirection) -> anyhow::Result<()> {
    let Some(target) = state.selection.first_entity().cloned() else {
        log::debug!("Reorder: keine Entity selektiert");
        return Ok(());
    };
    state.execute_action(Box::new(ReorderEntityAction::new(target, direction)))
}

/// Rotiert die selektierten Entities um `delta` Grad.
pub fn rotate_selected(state: &mut AppState, delta: Vec3) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Rotate") else {
        return Ok(());
    };
    state.execute_action(Box::new(RotateEntitiesAction::new(targets, delta)))
}

/// Verschiebt die selektierten Entities um `offset`.
pub fn translate_selected(state: &mut AppState, offset: Vec3) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Translate") else {
        return Ok(());
    };
    state.execute_action(Box::new(TranslateEntitiesAction::new(targets, offset)))
}

/// Verschiebt und rotiert die selektierten Entities als ein History-Eintrag.
///
/// Null-Anteile werden ausgelassen. Sind beide null, passiert nichts.
pub fn transform_selected(state: &mut AppState, offset: Vec3, rotation: Vec3) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Transform") else {
        return Ok(());
    };
    let mut compound = CompoundAction::new("Transform");
    if offset != Vec3::ZERO {
        compound.push(Box::new(TranslateEntitiesAction::new(targets.clone(), offset)));
    }
    if rotation != Vec3::ZERO {
        compound.push(Box::new(RotateEntitiesAction::new(targets, rotation)));
    }
    if compound.is_empty() {
        log::debug!("Transform: weder Verschiebung noch Rotation");
        return Ok(());
    }
    state.execute_action(Box::new(compound))
}

/// Streut Position und Rotation der selektierten Entities zufällig.
pub fn scramble_selected(state: &mut AppState) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Scramble") else {
        return Ok(());
    };
    let action = ScrambleEntitiesAction::new(
        targets,
        state.options.scramble_position_range,
        state.options.scramble_rotation_range,
        &mut rand::rng(),
    );
    state.execute_action(Box::new(action))
}

/// Ändert die Editor-Sichtbarkeit der selektierten Entities.
pub fn set_visibility_selected(
    state: &mut AppState,
    change: VisibilityChange,
) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Visibility") else {
        return Ok(());
    };
    state.execute_action(Box::new(SetVisibilityAction::new(targets, change)))
}

/// Setzt eine Property auf allen selektierten Entities.
pub fn set_property_selected(
    state: &mut AppState,
    key: &str,
    value: PropertyValue,
) -> anyhow::Result<()> {
    let Some(targets) = selected_targets(state, "Set Property") else {
        return Ok(());
    };
    state.execute_action(Box::new(SetPropertyAction::new(targets, key, value)))
}
