use approx::assert_abs_diff_eq;
use smithbox_map_editor::app::actions::{ReorderDirection, VisibilityChange};
use smithbox_map_editor::{AppController, AppIntent, AppState, EntityRef, PropertyValue};
use std::path::PathBuf;

fn loaded_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("m10_00_00_00.json");
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapLoadRequested {
                path,
                background: false,
            },
        )
        .expect("Fixture sollte ladbar sein");
    state
}

fn entity_ref(state: &AppState, name: &str) -> EntityRef {
    let container = state.maps.active().expect("aktive Map erwartet");
    let id = container
        .find_by_name(name)
        .unwrap_or_else(|| panic!("Entity {name} fehlt"));
    EntityRef::new(container.map_id(), id)
}

fn has_entity(state: &AppState, name: &str) -> bool {
    state
        .maps
        .active()
        .is_some_and(|container| container.find_by_name(name).is_some())
}

fn vec3(state: &AppState, name: &str, key: &str) -> glam::Vec3 {
    state
        .maps
        .entity(&entity_ref(state, name))
        .and_then(|entity| entity.properties.get(key))
        .and_then(PropertyValue::as_vec3)
        .unwrap_or_else(|| panic!("{name}.{key} fehlt"))
}

fn names_in_order(state: &AppState) -> Vec<String> {
    state
        .maps
        .active()
        .map(|container| {
            container
                .iter()
                .map(|(_, entity)| entity.name.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn selected_names(state: &AppState) -> Vec<String> {
    state
        .selection
        .entities()
        .filter_map(|entity_ref| state.maps.entity(entity_ref))
        .map(|entity| entity.name.clone())
        .collect()
}

fn run(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn select(controller: &mut AppController, state: &mut AppState, name: &str) {
    let entity = entity_ref(state, name);
    run(
        controller,
        state,
        AppIntent::EntityClicked {
            entity,
            ctrl: false,
            shift: false,
        },
    );
}

#[test]
fn test_duplicate_then_rotate_undo_redo_round() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    select(&mut controller, &mut state, "c1000_0000");

    run(&mut controller, &mut state, AppIntent::DuplicateRequested);
    assert!(has_entity(&state, "c1000_0002"));
    assert_eq!(selected_names(&state), vec!["c1000_0002"]);
    let copy_ref = entity_ref(&state, "c1000_0002");

    run(
        &mut controller,
        &mut state,
        AppIntent::RotateRequested {
            delta: glam::Vec3::new(0.0, 300.0, 0.0),
        },
    );
    assert_abs_diff_eq!(vec3(&state, "c1000_0002", "Rotation").y, 30.0, epsilon = 1e-4);
    assert_abs_diff_eq!(vec3(&state, "c1000_0000", "Rotation").y, 90.0, epsilon = 1e-4);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_abs_diff_eq!(vec3(&state, "c1000_0002", "Rotation").y, 90.0, epsilon = 1e-4);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(!has_entity(&state, "c1000_0002"));
    assert_eq!(selected_names(&state), vec!["c1000_0000"]);
    assert!(!state.can_undo());

    run(&mut controller, &mut state, AppIntent::RedoRequested);
    run(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(entity_ref(&state, "c1000_0002"), copy_ref);
    assert_abs_diff_eq!(vec3(&state, "c1000_0002", "Rotation").y, 30.0, epsilon = 1e-4);
    assert!(!state.can_redo());
}

#[test]
fn test_delete_parent_detaches_child_and_undo_restores_tree() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let before = names_in_order(&state);
    let arena_ref = entity_ref(&state, "region_arena");
    select(&mut controller, &mut state, "region_arena");

    run(&mut controller, &mut state, AppIntent::DeleteRequested);
    assert!(!has_entity(&state, "region_arena"));
    assert!(state.selection.is_empty());
    let spawn = state
        .maps
        .entity(&entity_ref(&state, "region_spawn"))
        .expect("region_spawn");
    assert_eq!(spawn.parent, None);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(names_in_order(&state), before);
    assert_eq!(entity_ref(&state, "region_arena"), arena_ref);
    let spawn = state
        .maps
        .entity(&entity_ref(&state, "region_spawn"))
        .expect("region_spawn");
    assert_eq!(spawn.parent, Some(arena_ref.id));
    assert_eq!(selected_names(&state), vec!["region_arena"]);
}

#[test]
fn test_new_action_discards_redo_branch() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    select(&mut controller, &mut state, "o4100_0000");

    run(
        &mut controller,
        &mut state,
        AppIntent::TranslateRequested {
            offset: glam::Vec3::new(1.0, 0.0, 0.0),
        },
    );
    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    run(
        &mut controller,
        &mut state,
        AppIntent::TranslateRequested {
            offset: glam::Vec3::new(0.0, 0.0, 5.0),
        },
    );
    assert!(!state.can_redo());
    assert_eq!(state.history.len(), 1);
    let position = vec3(&state, "o4100_0000", "Position");
    assert_abs_diff_eq!(position.x, 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(position.z, 13.0, epsilon = 1e-5);
}

#[test]
fn test_undo_all_restores_initial_state() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let before = names_in_order(&state);
    select(&mut controller, &mut state, "c2000_0000");

    run(
        &mut controller,
        &mut state,
        AppIntent::ReorderRequested {
            direction: ReorderDirection::Top,
        },
    );
    assert_eq!(names_in_order(&state)[0], "c2000_0000");
    run(
        &mut controller,
        &mut state,
        AppIntent::PropertyEditRequested {
            key: "EntityID".into(),
            value: PropertyValue::Int(2001),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::VisibilityChangeRequested {
            change: VisibilityChange::Hide,
        },
    );
    assert_eq!(state.history.len(), 3);

    run(&mut controller, &mut state, AppIntent::UndoAllRequested);

    assert!(!state.can_undo());
    assert_eq!(state.history.len(), 3);
    assert_eq!(names_in_order(&state), before);
    let entity = state
        .maps
        .entity(&entity_ref(&state, "c2000_0000"))
        .expect("c2000_0000");
    assert_eq!(entity.properties.get("EntityID"), Some(&PropertyValue::Int(2000)));
    assert!(entity.editor_visible);
}

#[test]
fn test_scramble_stays_within_configured_ranges_and_undoes() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    select(&mut controller, &mut state, "c2000_0000");
    let position_before = vec3(&state, "c2000_0000", "Position");
    let rotation_before = vec3(&state, "c2000_0000", "Rotation");

    run(&mut controller, &mut state, AppIntent::ScrambleRequested);

    let position = vec3(&state, "c2000_0000", "Position");
    let rotation = vec3(&state, "c2000_0000", "Rotation");
    let range = state.options.scramble_position_range;
    assert!((position - position_before).abs().max_element() <= range + 1e-4);
    assert_abs_diff_eq!(rotation.x, rotation_before.x, epsilon = 1e-5);
    assert_abs_diff_eq!(rotation.z, rotation_before.z, epsilon = 1e-5);
    assert!((0.0..360.0).contains(&rotation.y));

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(vec3(&state, "c2000_0000", "Position"), position_before);
    assert_eq!(vec3(&state, "c2000_0000", "Rotation"), rotation_before);
}

#[test]
fn test_history_commands_on_empty_history_are_noops() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    run(&mut controller, &mut state, AppIntent::RedoRequested);
    run(&mut controller, &mut state, AppIntent::UndoAllRequested);

    assert!(state.history.is_empty());
    assert_eq!(state.command_log.len(), 3);
}

#[test]
fn test_editing_without_selection_records_nothing() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    run(&mut controller, &mut state, AppIntent::DuplicateRequested);
    run(&mut controller, &mut state, AppIntent::DeleteRequested);
    run(&mut controller, &mut state, AppIntent::ScrambleRequested);

    assert!(!state.can_undo());
    assert_eq!(state.entity_count(), 6);
}

#[test]
fn test_transform_is_single_undo_step() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    select(&mut controller, &mut state, "c1000_0000");

    run(
        &mut controller,
        &mut state,
        AppIntent::TransformRequested {
            offset: glam::Vec3::new(2.0, 0.0, -1.0),
            rotation: glam::Vec3::new(0.0, 45.0, 0.0),
        },
    );
    assert_eq!(state.history.len(), 1);
    assert_eq!(
        state.history.undo_description().as_deref(),
        Some("Transform")
    );
    let position = vec3(&state, "c1000_0000", "Position");
    assert_abs_diff_eq!(position.x, 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(position.z, -1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(vec3(&state, "c1000_0000", "Rotation").y, 135.0, epsilon = 1e-4);

    run(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(!state.can_undo());
    assert_eq!(vec3(&state, "c1000_0000", "Position"), glam::Vec3::ZERO);
    assert_abs_diff_eq!(vec3(&state, "c1000_0000", "Rotation").y, 90.0, epsilon = 1e-4);

    run(
        &mut controller,
        &mut state,
        AppIntent::TransformRequested {
            offset: glam::Vec3::ZERO,
            rotation: glam::Vec3::ZERO,
        },
    );
    assert!(!state.can_undo());
    assert!(state.can_redo());
}
