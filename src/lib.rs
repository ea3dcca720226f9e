//! Smithbox Map-Editor Core Library.
//! Selektion, Selection-Groups und Undo/Redo als Library exportiert für Tests und Host.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActionHistory, AppCommand, AppController, AppIntent, AppState, EditAction, GroupError,
    Selectable, SelectionGroup, SelectionGroupStore, SelectionState, UiState,
};
pub use core::{
    Comparator, Entity, EntityDump, EntityId, EntityRef, FilterMode, MapBank, MapBankError,
    MapContainer, MapDump, PropertyValue, SelectionFilter,
};
pub use shared::EditorOptions;
