//! Zentrale Konfiguration für den Map-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::FilterMode;
use serde::{Deserialize, Serialize};

// ── Selection-Groups ────────────────────────────────────────────────

/// Dateiname des Selection-Group-Dokuments im Projektverzeichnis.
pub const SELECTION_GROUPS_FILE: &str = "selection_groups.json";
/// Kleinster belegbarer Keybind-Index.
pub const KEYBIND_MIN: u8 = 0;
/// Größter belegbarer Keybind-Index.
pub const KEYBIND_MAX: u8 = 10;

// ── Scramble ────────────────────────────────────────────────────────

/// Maximaler Positionsversatz je Achse (Welteinheiten).
pub const SCRAMBLE_POSITION_RANGE: f32 = 1.0;
/// Maximaler Rotationsversatz je Achse (Grad).
pub const SCRAMBLE_ROTATION_RANGE: f32 = 45.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `smithbox_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Selection-Groups ────────────────────────────────────────
    /// Gruppe ohne Namens-Prompt anlegen (Name = erste selektierte Entity)
    #[serde(default)]
    pub group_auto_creation: bool,
    /// Nach dem Abrufen einer Gruppe auf die Selektion springen (Goto)
    #[serde(default = "default_true")]
    pub group_frame_selection: bool,
    /// Keybind-Hinweis im Gruppen-Label anzeigen
    #[serde(default = "default_true")]
    pub group_show_keybind: bool,
    /// Tags im Gruppen-Label anzeigen
    #[serde(default = "default_true")]
    pub group_show_tags: bool,
    /// Keybind-Shortcuts für Gruppen aktiv
    #[serde(default = "default_true")]
    pub group_shortcuts_enabled: bool,
    /// Löschen einer Gruppe erst nach Bestätigung ausführen
    #[serde(default = "default_true")]
    pub group_confirm_delete: bool,
    /// Dateiname des Gruppen-Dokuments (relativ zum Projektverzeichnis)
    #[serde(default = "default_selection_groups_file")]
    pub selection_groups_file: String,

    // ── Filter ──────────────────────────────────────────────────
    /// Voreingestellter Verknüpfungsmodus für "Select All by Configuration"
    #[serde(default)]
    pub default_filter_mode: FilterMode,

    // ── Scramble ────────────────────────────────────────────────
    /// Maximaler Positionsversatz je Achse
    #[serde(default = "default_scramble_position_range")]
    pub scramble_position_range: f32,
    /// Maximaler Rotationsversatz je Achse in Grad
    #[serde(default = "default_scramble_rotation_range")]
    pub scramble_rotation_range: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            group_auto_creation: false,
            group_frame_selection: true,
            group_show_keybind: true,
            group_show_tags: true,
            group_shortcuts_enabled: true,
            group_confirm_delete: true,
            selection_groups_file: SELECTION_GROUPS_FILE.to_string(),

            default_filter_mode: FilterMode::And,

            scramble_position_range: SCRAMBLE_POSITION_RANGE,
            scramble_rotation_range: SCRAMBLE_ROTATION_RANGE,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Serde-Default für `selection_groups_file` (Abwärtskompatibilität).
fn default_selection_groups_file() -> String {
    SELECTION_GROUPS_FILE.to_string()
}

fn default_scramble_position_range() -> f32 {
    SCRAMBLE_POSITION_RANGE
}

fn default_scramble_rotation_range() -> f32 {
    SCRAMBLE_ROTATION_RANGE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("smithbox_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("smithbox_map_editor.toml")
    }

    /// Pfad des Gruppen-Dokuments innerhalb eines Projektverzeichnisses.
    pub fn selection_groups_path(&self, project_dir: &std::path::Path) -> std::path::PathBuf {
        project_dir.join(&self.selection_groups_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = EditorOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.toml");
        std::fs::write(&path, "group_auto_creation = true\ndefault_filter_mode = \"Or\"\n").unwrap();

        let options = EditorOptions::load_from_file(&path);
        assert!(options.group_auto_creation);
        assert_eq!(options.default_filter_mode, FilterMode::Or);
        assert_eq!(options.selection_groups_file, SELECTION_GROUPS_FILE);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.toml");
        let options = EditorOptions {
            group_show_tags: false,
            scramble_rotation_range: 10.0,
            ..EditorOptions::default()
        };
        options.save_to_file(&path).unwrap();
        assert_eq!(EditorOptions::load_from_file(&path), options);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.toml");
        std::fs::write(&path, "group_auto_creation = [").unwrap();
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
