//! Handler für Bearbeitungen der Selektion.

use crate::app::actions::{ReorderDirection, VisibilityChange};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PropertyValue;
use glam::Vec3;

/// Dupliziert die Selektion.
pub fn duplicate_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::duplicate_selected(state)
}

/// Löscht die Selektion.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::delete_selected(state)
}

/// Verschiebt die erste selektierte Entity in der Reihenfolge.
pub fn reorder_selected(state: &mut AppState, direction: ReorderDirection) -> anyhow::Result<()> {
    use_cases::editing::reorder_selected(state, direction)
}

/// Rotiert die Selektion.
pub fn rotate_selected(state: &mut AppState, delta: Vec3) -> anyhow::Result<()> {
    use_cases::editing::rotate_selected(state, delta)
}

/// Verschiebt die Selektion.
pub fn translate_selected(state: &mut AppState, offset: Vec3) -> anyhow::Result<()> {
    use_cases::editing::translate_selected(state, offset)
}

/// Verschiebt und rotiert die Selektion in einem Schritt.
pub fn transform_selected(state: &mut AppState, offset: Vec3, rotation: Vec3) -> anyhow::Result<()> {
    use_cases::editing::transform_selected(state, offset, rotation)
}

/// Streut die Selektion.
pub fn scramble_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::scramble_selected(state)
}

/// Ändert die Sichtbarkeit der Selektion.
pub fn set_visibility(state: &mut AppState, change: VisibilityChange) -> anyhow::Result<()> {
    use_cases::editing::set_visibility_selected(state, change)
}

/// Setzt eine Property auf der Selektion.
pub fn set_property(state: &mut AppState, key: &str, value: PropertyValue) -> anyhow::Result<()> {
    use_cases::editing::set_property_selected(state, key, value)
}
