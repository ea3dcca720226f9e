//! Use-Case-Funktionen für Entity-Selektion.
//!
//! - `helpers` — Einzel-Selektion, Toggle, Map-Container, Leeren
//! - `select_all` — Select All by Configuration / Type / Model Name
//! - `groups` — Selection-Groups abrufen und anlegen

mod groups;
mod helpers;
mod select_all;

pub use groups::{create_group_from_selection, recall_group_by_keybind, recall_group_by_name};
pub use helpers::{clear_selection, select_entity, select_map_root, toggle_entity};
pub use select_all::{select_all_by_configuration, select_all_by_kind, select_all_by_model_name};
