//! Application Controller für zentrale Event-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Maps ===
            AppCommand::LoadMap { path } => handlers::map_io::load(state, &path)?,
            AppCommand::StartMapLoad { path } => handlers::map_io::start_load(state, &path),
            AppCommand::UnloadMap { map_id } => handlers::map_io::unload(state, &map_id),
            AppCommand::UnloadAllMaps => handlers::map_io::unload_all(state),
            AppCommand::SetActiveMap { map_id } => handlers::map_io::set_active(state, &map_id)?,
            AppCommand::SaveAllMaps { dir } => handlers::map_io::save_all(state, &dir)?,
            AppCommand::SelectSaveFailureReferrer => {
                handlers::map_io::select_save_failure_referrer(state)
            }
            AppCommand::DismissSaveFailure => handlers::map_io::dismiss_save_failure(state),

            // === Selektion ===
            AppCommand::SelectEntity { entity, additive } => {
                handlers::selection::select_entity(state, entity, additive)
            }
            AppCommand::ToggleEntitySelection { entity } => {
                handlers::selection::toggle_entity(state, entity)
            }
            AppCommand::SelectMapRoot { map_id, additive } => {
                handlers::selection::select_map_root(state, &map_id, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ClearGotoTarget => handlers::selection::clear_goto_target(state),
            AppCommand::SetSelectAllFilters { inputs } => {
                handlers::selection::set_select_all_filters(state, inputs)
            }
            AppCommand::SetSelectAllMode { mode } => {
                handlers::selection::set_select_all_mode(state, mode)
            }
            AppCommand::SelectAllByConfiguration => {
                handlers::selection::select_all_by_configuration(state)
            }
            AppCommand::SelectAllByKind => handlers::selection::select_all_by_kind(state),
            AppCommand::SelectAllByModelName => {
                handlers::selection::select_all_by_model_name(state)
            }

            // === Selection-Groups ===
            AppCommand::CreateSelectionGroup {
                name,
                tags,
                keybind,
            } => handlers::groups::create(state, &name, tags, keybind)?,
            AppCommand::EditSelectionGroup {
                old_name,
                new_name,
                tags,
                keybind,
            } => handlers::groups::edit(state, &old_name, &new_name, tags, keybind)?,
            AppCommand::RequestSelectionGroupDelete { name } => {
                handlers::groups::request_delete(state, name)?
            }
            AppCommand::CancelSelectionGroupDelete => handlers::groups::cancel_delete(state),
            AppCommand::DeleteSelectionGroup { name } => handlers::groups::delete(state, &name)?,
            AppCommand::RecallSelectionGroup { name } => handlers::groups::recall(state, &name)?,
            AppCommand::RecallSelectionGroupByKeybind { keybind } => {
                handlers::groups::recall_by_keybind(state, keybind)
            }

            // === Bearbeitung ===
            AppCommand::DuplicateSelected => handlers::editing::duplicate_selected(state)?,
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state)?,
            AppCommand::ReorderSelected { direction } => {
                handlers::editing::reorder_selected(state, direction)?
            }
            AppCommand::RotateSelected { delta } => {
                handlers::editing::rotate_selected(state, delta)?
            }
            AppCommand::TranslateSelected { offset } => {
                handlers::editing::translate_selected(state, offset)?
            }
            AppCommand::TransformSelected { offset, rotation } => {
                handlers::editing::transform_selected(state, offset, rotation)?
            }
            AppCommand::ScrambleSelected => handlers::editing::scramble_selected(state)?,
            AppCommand::SetVisibility { change } => {
                handlers::editing::set_visibility(state, change)?
            }
            AppCommand::SetProperty { key, value } => {
                handlers::editing::set_property(state, &key, value)?
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state)?,
            AppCommand::UndoAll => handlers::history::undo_all(state)?,
            AppCommand::Redo => handlers::history::redo(state)?,

            // === Optionen & Anwendung ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissStatus => handlers::dialog::dismiss_status(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Ein Update-Zyklus: installiert fertig geladene Maps.
    ///
    /// Solange ein Ladevorgang läuft, kehrt die Funktion sofort zurück.
    /// Ein im Hintergrund aufgetretener Ladefehler wird beim ersten Update
    /// danach als Fehler zurückgegeben.
    pub fn update(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        if state.update_gate.is_paused() {
            return Ok(());
        }
        if let Some(error) = state.update_gate.take_error() {
            use_cases::map_io::install_finished_loads(state);
            return Err(error);
        }
        use_cases::map_io::install_finished_loads(state);
        Ok(())
    }
}
