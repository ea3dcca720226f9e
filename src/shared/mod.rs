//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app` und Host geteilt werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{KEYBIND_MAX, KEYBIND_MIN, SELECTION_GROUPS_FILE};
