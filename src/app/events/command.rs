use crate::app::actions::{ReorderDirection, VisibilityChange};
use crate::core::{EntityRef, FilterMode, PropertyValue};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Maps ────────────────────────────────────────────────────
    /// Map-Dump synchron laden
    LoadMap { path: PathBuf },
    /// Map-Dump im Hintergrund laden
    StartMapLoad { path: PathBuf },
    /// Map entladen
    UnloadMap { map_id: String },
    /// Alle Maps entladen
    UnloadAllMaps,
    /// Aktive Map setzen
    SetActiveMap { map_id: String },
    /// Alle Maps speichern
    SaveAllMaps { dir: PathBuf },
    /// Verweisende Entity des Speicherfehlers selektieren
    SelectSaveFailureReferrer,
    /// Speicherfehler-Dialog schließen
    DismissSaveFailure,

    // ── Selektion ───────────────────────────────────────────────
    /// Genau diese Entity selektieren (bzw. hinzufügen)
    SelectEntity { entity: EntityRef, additive: bool },
    /// Selektion einer Entity umschalten
    ToggleEntitySelection { entity: EntityRef },
    /// Map-Container selektieren
    SelectMapRoot { map_id: String, additive: bool },
    /// Selektion aufheben
    ClearSelection,
    /// Sprungziel löschen
    ClearGotoTarget,
    /// Filter-Eingaben setzen
    SetSelectAllFilters { inputs: Vec<String> },
    /// Verknüpfungsmodus setzen
    SetSelectAllMode { mode: FilterMode },
    /// Select All by Configuration
    SelectAllByConfiguration,
    /// Select All by Type
    SelectAllByKind,
    /// Select All by Model Name
    SelectAllByModelName,

    // ── Selection-Groups ────────────────────────────────────────
    /// Gruppe aus Selektion anlegen
    CreateSelectionGroup {
        name: String,
        tags: Vec<String>,
        keybind: i32,
    },
    /// Gruppe ändern
    EditSelectionGroup {
        old_name: String,
        new_name: String,
        tags: Vec<String>,
        keybind: i32,
    },
    /// Lösch-Rückfrage für eine Gruppe öffnen
    RequestSelectionGroupDelete { name: String },
    /// Lösch-Rückfrage schließen
    CancelSelectionGroupDelete,
    /// Gruppe löschen
    DeleteSelectionGroup { name: String },
    /// Gruppe per Name abrufen
    RecallSelectionGroup { name: String },
    /// Gruppe per Keybind abrufen
    RecallSelectionGroupByKeybind { keybind: u8 },

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Selektion duplizieren
    DuplicateSelected,
    /// Selektion löschen
    DeleteSelected,
    /// Erste selektierte Entity verschieben
    ReorderSelected { direction: ReorderDirection },
    /// Selektion rotieren
    RotateSelected { delta: Vec3 },
    /// Selektion verschieben
    TranslateSelected { offset: Vec3 },
    /// Selektion verschieben und rotieren (ein Undo-Schritt)
    TransformSelected { offset: Vec3, rotation: Vec3 },
    /// Selektion streuen
    ScrambleSelected,
    /// Sichtbarkeit ändern
    SetVisibility { change: VisibilityChange },
    /// Property setzen
    SetProperty { key: String, value: PropertyValue },

    // ── History ─────────────────────────────────────────────────
    /// Undo
    Undo,
    /// Alles rückgängig
    UndoAll,
    /// Redo
    Redo,

    // ── Optionen & Anwendung ────────────────────────────────────
    /// Optionen übernehmen und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Statusmeldung entfernen
    DismissStatus,
    /// Anwendung beenden
    RequestExit,
}
