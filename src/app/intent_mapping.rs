//! Mapping von UI-Intents auf mutierende App-Commands.

use super::selection_groups::parse_tag_list;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Maps ────────────────────────────────────────────────
        AppIntent::MapLoadRequested { path, background } => {
            if background {
                vec![AppCommand::StartMapLoad { path }]
            } else {
                vec![AppCommand::LoadMap { path }]
            }
        }
        AppIntent::MapUnloadRequested { map_id } => vec![AppCommand::UnloadMap { map_id }],
        AppIntent::UnloadAllRequested => vec![AppCommand::UnloadAllMaps],
        AppIntent::ActiveMapChanged { map_id } => vec![AppCommand::SetActiveMap { map_id }],
        AppIntent::SaveAllRequested { dir } => vec![AppCommand::SaveAllMaps { dir }],
        AppIntent::SaveFailureSelectReferrerConfirmed => {
            vec![AppCommand::SelectSaveFailureReferrer, AppCommand::DismissStatus]
        }
        AppIntent::SaveFailureDismissed => {
            vec![AppCommand::DismissSaveFailure, AppCommand::DismissStatus]
        }

        // ── Selektion ───────────────────────────────────────────
        AppIntent::EntityClicked { entity, ctrl, shift } => {
            if ctrl {
                vec![AppCommand::ToggleEntitySelection { entity }]
            } else {
                vec![AppCommand::SelectEntity {
                    entity,
                    additive: shift,
                }]
            }
        }
        AppIntent::MapRootClicked { map_id, shift } => vec![AppCommand::SelectMapRoot {
            map_id,
            additive: shift,
        }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::GotoTargetReached => vec![AppCommand::ClearGotoTarget],
        AppIntent::SelectAllFiltersChanged { inputs } => {
            vec![AppCommand::SetSelectAllFilters { inputs }]
        }
        AppIntent::SelectAllModeChanged { mode } => vec![AppCommand::SetSelectAllMode { mode }],
        AppIntent::SelectAllByConfigurationRequested => {
            vec![AppCommand::SelectAllByConfiguration]
        }
        AppIntent::SelectAllByKindRequested => vec![AppCommand::SelectAllByKind],
        AppIntent::SelectAllByModelNameRequested => vec![AppCommand::SelectAllByModelName],

        // ── Selection-Groups ────────────────────────────────────
        AppIntent::GroupCreateRequested {
            name,
            tags,
            keybind,
        } => vec![AppCommand::CreateSelectionGroup {
            name,
            tags: parse_tag_list(&tags),
            keybind,
        }],
        AppIntent::GroupEditRequested {
            old_name,
            new_name,
            tags,
            keybind,
        } => vec![AppCommand::EditSelectionGroup {
            old_name,
            new_name,
            tags: parse_tag_list(&tags),
            keybind,
        }],
        AppIntent::GroupDeleteRequested { name } => {
            if state.options.group_confirm_delete {
                vec![AppCommand::RequestSelectionGroupDelete { name }]
            } else {
                vec![AppCommand::DeleteSelectionGroup { name }]
            }
        }
        AppIntent::GroupDeleteConfirmed => match state.ui.pending_group_delete.clone() {
            Some(name) => vec![
                AppCommand::DismissStatus,
                AppCommand::DeleteSelectionGroup { name },
            ],
            None => vec![],
        },
        AppIntent::GroupDeleteCancelled => vec![
            AppCommand::CancelSelectionGroupDelete,
            AppCommand::DismissStatus,
        ],
        AppIntent::GroupSelectRequested { name } => {
            vec![AppCommand::RecallSelectionGroup { name }]
        }
        AppIntent::GroupShortcutPressed { keybind } => {
            if state.options.group_shortcuts_enabled {
                vec![AppCommand::RecallSelectionGroupByKeybind { keybind }]
            } else {
                vec![]
            }
        }

        // ── Bearbeitung ─────────────────────────────────────────
        AppIntent::DuplicateRequested => vec![AppCommand::DuplicateSelected],
        AppIntent::DeleteRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ReorderRequested { direction } => {
            vec![AppCommand::ReorderSelected { direction }]
        }
        AppIntent::RotateRequested { delta } => vec![AppCommand::RotateSelected { delta }],
        AppIntent::TranslateRequested { offset } => {
            vec![AppCommand::TranslateSelected { offset }]
        }
        AppIntent::TransformRequested { offset, rotation } => {
            vec![AppCommand::TransformSelected { offset, rotation }]
        }
        AppIntent::ScrambleRequested => vec![AppCommand::ScrambleSelected],
        AppIntent::VisibilityChangeRequested { change } => {
            vec![AppCommand::SetVisibility { change }]
        }
        AppIntent::PropertyEditRequested { key, value } => {
            vec![AppCommand::SetProperty { key, value }]
        }

        // ── History ─────────────────────────────────────────────
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::UndoAllRequested => vec![AppCommand::UndoAll],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // ── Optionen & Anwendung ────────────────────────────────
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusDismissed => vec![AppCommand::DismissStatus],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
