use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{EntityId, EntityRef};

use super::map_intent_to_commands;

fn entity() -> EntityRef {
    EntityRef::new("m10_00_00_00", EntityId(3))
}

#[test]
fn ctrl_click_maps_to_toggle() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::EntityClicked {
            entity: entity(),
            ctrl: true,
            shift: false,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ToggleEntitySelection { .. }));
}

#[test]
fn shift_click_maps_to_additive_select() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::EntityClicked {
            entity: entity(),
            ctrl: false,
            shift: true,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::SelectEntity { additive: true, .. }
    ));
}

#[test]
fn group_create_parses_tag_list() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GroupCreateRequested {
            name: "Boss1".into(),
            tags: "arena, phase2".into(),
            keybind: 1,
        },
    );

    match &commands[0] {
        AppCommand::CreateSelectionGroup {
            name,
            tags,
            keybind,
        } => {
            assert_eq!(name, "Boss1");
            assert_eq!(tags, &vec!["arena".to_string(), "phase2".to_string()]);
            assert_eq!(*keybind, 1);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn group_shortcut_respects_option() {
    let mut state = AppState::new();

    let commands =
        map_intent_to_commands(&state, AppIntent::GroupShortcutPressed { keybind: 4 });
    assert!(matches!(
        commands[0],
        AppCommand::RecallSelectionGroupByKeybind { keybind: 4 }
    ));

    state.options.group_shortcuts_enabled = false;
    let commands =
        map_intent_to_commands(&state, AppIntent::GroupShortcutPressed { keybind: 4 });
    assert!(commands.is_empty());
}

#[test]
fn background_load_maps_to_start_map_load() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapLoadRequested {
            path: "m10.json".into(),
            background: true,
        },
    );

    assert!(matches!(commands[0], AppCommand::StartMapLoad { .. }));
}

#[test]
fn save_failure_confirm_selects_referrer_then_dismisses_status() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveFailureSelectReferrerConfirmed);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SelectSaveFailureReferrer));
    assert!(matches!(commands[1], AppCommand::DismissStatus));
}

#[test]
fn group_delete_asks_for_confirmation_unless_disabled() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GroupDeleteRequested {
            name: "Boss1".into(),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::RequestSelectionGroupDelete { name }] if name == "Boss1"
    ));
    assert!(map_intent_to_commands(&state, AppIntent::GroupDeleteConfirmed).is_empty());

    state.ui.pending_group_delete = Some("Boss1".into());
    let commands = map_intent_to_commands(&state, AppIntent::GroupDeleteConfirmed);
    assert!(matches!(
        &commands[..],
        [AppCommand::DismissStatus, AppCommand::DeleteSelectionGroup { name }] if name == "Boss1"
    ));

    state.options.group_confirm_delete = false;
    let commands = map_intent_to_commands(
        &state,
        AppIntent::GroupDeleteRequested {
            name: "Boss1".into(),
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::DeleteSelectionGroup { name }] if name == "Boss1"
    ));
}
