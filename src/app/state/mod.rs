//! Application State: zentrale Datenhaltung des Editors.

mod app_state;
mod dialogs;
mod selection;

pub use app_state::AppState;
pub use dialogs::{SaveFailureDialog, SelectAllConfig, UiState};
pub use selection::{Selectable, SelectionState};
