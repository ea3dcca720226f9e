//! Application-Layer: Controller, State, Events, History und Use-Cases.

pub mod actions;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod selection_groups;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Maps, Selektion, Gruppen).
pub mod state;
pub mod update_gate;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{ActionContext, ActionHistory, EditAction};
pub use selection_groups::{GroupError, SelectionGroup, SelectionGroupStore};
pub use state::{AppState, Selectable, SelectionState, UiState};
pub use update_gate::{MapLoadJob, UpdateGate};
