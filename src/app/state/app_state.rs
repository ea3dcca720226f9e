use crate::app::history::{ActionContext, ActionHistory, EditAction};
use crate::app::selection_groups::SelectionGroupStore;
use crate::app::update_gate::{MapLoadJob, UpdateGate};
use crate::app::CommandLog;
use crate::core::MapBank;
use crate::shared::EditorOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{SelectAllConfig, SelectionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Map-Container
    pub maps: MapBank,
    /// Selection-State
    pub selection: SelectionState,
    /// Undo/Redo-History (Action-basiert)
    pub history: ActionHistory,
    /// Selection-Groups des Projekts
    pub groups: SelectionGroupStore,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Projektverzeichnis (None = kein Projekt, Gruppen nur im Speicher)
    pub project_dir: Option<PathBuf>,
    /// Pausier-Schalter für den Update-Zyklus
    pub update_gate: Arc<UpdateGate>,
    /// Laufende Hintergrund-Ladevorgänge
    pub pending_loads: Vec<MapLoadJob>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State ohne Projekt
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen (ohne Projekt).
    pub fn with_options(options: EditorOptions) -> Self {
        let mut ui = UiState::new();
        ui.select_all = SelectAllConfig::new(options.default_filter_mode);
        Self {
            maps: MapBank::new(),
            selection: SelectionState::new(),
            history: ActionHistory::new(),
            groups: SelectionGroupStore::in_memory(),
            ui,
            command_log: CommandLog::new(),
            options,
            project_dir: None,
            update_gate: Arc::new(UpdateGate::new()),
            pending_loads: Vec::new(),
            should_exit: false,
        }
    }

    /// Erstellt einen App-State für ein Projektverzeichnis und lädt dessen Gruppen.
    pub fn open_project(project_dir: &Path, options: EditorOptions) -> Self {
        let groups_path = options.selection_groups_path(project_dir);
        let mut state = Self::with_options(options);
        state.groups = SelectionGroupStore::load(&groups_path);
        state.project_dir = Some(project_dir.to_path_buf());
        state
    }

    /// Führt eine Action aus und nimmt sie in die History auf.
    pub fn execute_action(&mut self, action: Box<dyn EditAction>) -> anyhow::Result<()> {
        let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
        self.history.execute(action, &mut ctx)
    }

    /// Einen Schritt rückgängig machen. `false` wenn nichts zu tun war.
    pub fn undo(&mut self) -> anyhow::Result<bool> {
        let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
        self.history.undo(&mut ctx)
    }

    /// Einen Schritt wiederholen. `false` wenn nichts zu tun war.
    pub fn redo(&mut self) -> anyhow::Result<bool> {
        let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
        self.history.redo(&mut ctx)
    }

    /// Alle Schritte rückgängig machen. Liefert die Anzahl.
    pub fn undo_all(&mut self) -> anyhow::Result<usize> {
        let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
        self.history.undo_all(&mut ctx)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Anzahl aller Entities über alle geladenen Maps (für Anzeige).
    pub fn entity_count(&self) -> usize {
        self.maps.containers().map(|container| container.len()).sum()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
