//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    let description = state.history.undo_description();
    if state.undo()? {
        log::info!("Undo ausgeführt: {}", description.unwrap_or_default());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    Ok(())
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    let description = state.history.redo_description();
    if state.redo()? {
        log::info!("Redo ausgeführt: {}", description.unwrap_or_default());
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    Ok(())
}

/// Macht alle Schritte rückgängig.
pub fn undo_all(state: &mut AppState) -> anyhow::Result<()> {
    let steps = state.undo_all()?;
    log::info!("Undo All: {} Schritte rückgängig gemacht", steps);
    Ok(())
}
