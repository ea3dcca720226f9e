use crate::app::actions::{ReorderDirection, VisibilityChange};
use crate::core::{EntityRef, FilterMode, PropertyValue};
use crate::shared::EditorOptions;
use glam::Vec3;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Maps ────────────────────────────────────────────────────
    /// Map-Dump laden (optional im Hintergrund)
    MapLoadRequested { path: PathBuf, background: bool },
    /// Map entladen
    MapUnloadRequested { map_id: String },
    /// Alle Maps entladen
    UnloadAllRequested,
    /// Aktive Map wechseln
    ActiveMapChanged { map_id: String },
    /// Alle Maps speichern
    SaveAllRequested { dir: PathBuf },
    /// Speicherfehler-Dialog: verweisende Entity selektieren
    SaveFailureSelectReferrerConfirmed,
    /// Speicherfehler-Dialog schließen
    SaveFailureDismissed,

    // ── Selektion ───────────────────────────────────────────────
    /// Entity im Content-Baum oder Viewport angeklickt (Ctrl = Toggle)
    EntityClicked { entity: EntityRef, ctrl: bool, shift: bool },
    /// Map-Container angeklickt
    MapRootClicked { map_id: String, shift: bool },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Content-Baum hat zum Sprungziel gescrollt
    GotoTargetReached,
    /// Filter-Eingaben für Select-All geändert
    SelectAllFiltersChanged { inputs: Vec<String> },
    /// Verknüpfungsmodus für Select-All geändert
    SelectAllModeChanged { mode: FilterMode },
    /// Select All by Configuration ausführen
    SelectAllByConfigurationRequested,
    /// Select All by Type ausführen
    SelectAllByKindRequested,
    /// Select All by Model Name ausführen
    SelectAllByModelNameRequested,

    // ── Selection-Groups ────────────────────────────────────────
    /// Gruppe aus aktueller Selektion anlegen (Tags komma-getrennt, Keybind -1 = keiner)
    GroupCreateRequested { name: String, tags: String, keybind: i32 },
    /// Gruppe ändern
    GroupEditRequested {
        old_name: String,
        new_name: String,
        tags: String,
        keybind: i32,
    },
    /// Gruppe löschen (je nach Option erst nach Rückfrage)
    GroupDeleteRequested { name: String },
    /// Offene Lösch-Rückfrage bestätigt
    GroupDeleteConfirmed,
    /// Offene Lösch-Rückfrage verworfen
    GroupDeleteCancelled,
    /// Gruppe im Tool-Fenster abrufen
    GroupSelectRequested { name: String },
    /// Gruppen-Shortcut gedrückt
    GroupShortcutPressed { keybind: u8 },

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Selektion duplizieren
    DuplicateRequested,
    /// Selektion löschen
    DeleteRequested,
    /// Erste selektierte Entity verschieben
    ReorderRequested { direction: ReorderDirection },
    /// Selektion rotieren (Grad)
    RotateRequested { delta: Vec3 },
    /// Selektion verschieben
    TranslateRequested { offset: Vec3 },
    /// Selektion verschieben und rotieren (Grad) als ein Schritt
    TransformRequested { offset: Vec3, rotation: Vec3 },
    /// Selektion zufällig streuen
    ScrambleRequested,
    /// Sichtbarkeit der Selektion ändern
    VisibilityChangeRequested { change: VisibilityChange },
    /// Property auf der Selektion setzen
    PropertyEditRequested { key: String, value: PropertyValue },

    // ── History ─────────────────────────────────────────────────
    /// Undo (Ctrl+Z)
    UndoRequested,
    /// Alles rückgängig
    UndoAllRequested,
    /// Redo (Ctrl+Y)
    RedoRequested,

    // ── Optionen & Anwendung ────────────────────────────────────
    /// Optionen übernehmen
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,
    /// Statusmeldung bestätigt
    StatusDismissed,
    /// Anwendung beenden
    ExitRequested,
}
