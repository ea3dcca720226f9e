use super::*;
use crate::shared::SELECTION_GROUPS_FILE;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn store_with_boss() -> SelectionGroupStore {
    let mut store = SelectionGroupStore::in_memory();
    store
        .create("Boss1", vec![], names(&["c5000_0000", "c5000_0001"]), Some(1))
        .unwrap();
    store
}

#[test]
fn create_appends_group() {
    let store = store_with_boss();
    assert_eq!(store.len(), 1);
    let group = store.get("Boss1").unwrap();
    assert_eq!(group.keybind, Some(1));
    assert_eq!(group.selection.len(), 2);
}

#[test]
fn create_validation_order() {
    let mut store = store_with_boss();

    // Leerer Name hat Vorrang vor leerer Selektion
    assert!(matches!(
        store.create("", vec![], vec![], None),
        Err(GroupError::EmptyName)
    ));
    // Doppelter Name hat Vorrang vor leerer Selektion
    assert!(matches!(
        store.create("Boss1", vec![], vec![], None),
        Err(GroupError::DuplicateName(_))
    ));
    assert!(matches!(
        store.create("Boss2", vec![], vec![], Some(1)),
        Err(GroupError::EmptySelection)
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn keybind_collision_leaves_store_unchanged() {
    let mut store = store_with_boss();
    let before = store.groups().to_vec();

    let result = store.create("Boss2", vec![], names(&["c5100_0000"]), Some(1));
    match result {
        Err(GroupError::KeybindTaken { keybind, owner }) => {
            assert_eq!(keybind, 1);
            assert_eq!(owner, "Boss1");
        }
        other => panic!("unerwartet: {other:?}"),
    }
    assert_eq!(store.groups(), before.as_slice());
}

#[test]
fn keybind_out_of_range_is_rejected() {
    let mut store = SelectionGroupStore::in_memory();
    assert!(matches!(
        store.create("Far", vec![], names(&["a"]), Some(11)),
        Err(GroupError::InvalidKeybind(11))
    ));
    assert!(matches!(keybind_from_index(-2), Err(GroupError::InvalidKeybind(-2))));
    assert_eq!(keybind_from_index(-1).unwrap(), None);
    assert_eq!(keybind_from_index(10).unwrap(), Some(10));
    assert_eq!(
        keybind_from_index(i32::from(KEYBIND_MIN)).unwrap(),
        Some(KEYBIND_MIN)
    );
    let past_end = i32::from(KEYBIND_MAX) + 1;
    assert!(matches!(
        keybind_from_index(past_end),
        Err(GroupError::InvalidKeybind(index)) if index == past_end
    ));
}

#[test]
fn edit_preserves_selection_and_moves_to_end() {
    let mut store = store_with_boss();
    store
        .create("Traps", vec![], names(&["o0001_0000"]), None)
        .unwrap();

    store
        .edit("Boss1", "Boss1 Arena", names(&["boss"]), Some(2))
        .unwrap();

    assert!(store.get("Boss1").is_none());
    let order: Vec<_> = store.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(order, vec!["Traps", "Boss1 Arena"]);
    let edited = store.get("Boss1 Arena").unwrap();
    assert_eq!(edited.selection, names(&["c5000_0000", "c5000_0001"]));
    assert_eq!(edited.keybind, Some(2));
    assert_eq!(edited.tags, names(&["boss"]));
}

#[test]
fn edit_may_keep_own_keybind_but_not_take_foreign() {
    let mut store = store_with_boss();
    store
        .create("Traps", vec![], names(&["o0001_0000"]), Some(3))
        .unwrap();

    store.edit("Boss1", "Boss1", vec![], Some(1)).unwrap();
    assert!(matches!(
        store.edit("Boss1", "Boss1", vec![], Some(3)),
        Err(GroupError::KeybindTaken { keybind: 3, .. })
    ));
    assert!(matches!(
        store.edit("Boss1", "Traps", vec![], None),
        Err(GroupError::DuplicateName(_))
    ));
    assert!(matches!(
        store.edit("Nope", "X", vec![], None),
        Err(GroupError::NotFound(_))
    ));
}

#[test]
fn delete_removes_by_name() {
    let mut store = store_with_boss();
    store.delete("Boss1").unwrap();
    assert!(store.is_empty());
    assert!(matches!(store.delete("Boss1"), Err(GroupError::NotFound(_))));
}

#[test]
fn search_matches_name_and_tags_case_insensitive() {
    let mut store = store_with_boss();
    store
        .create("Traps", names(&["Dungeon", "hazard"]), names(&["o1"]), None)
        .unwrap();

    let hits: Vec<_> = store.search("HAZ").map(|g| g.name.as_str()).collect();
    assert_eq!(hits, vec!["Traps"]);
    let hits: Vec<_> = store.search("boss").map(|g| g.name.as_str()).collect();
    assert_eq!(hits, vec!["Boss1"]);
    assert_eq!(store.search("  ").count(), 2);
}

#[test]
fn search_requires_every_plus_separated_term() {
    let mut store = SelectionGroupStore::in_memory();
    store
        .create("Boss1", names(&["boss", "phase2"]), names(&["c1000_0000"]), None)
        .unwrap();
    store
        .create("Boss2", names(&["boss"]), names(&["c2000_0000"]), None)
        .unwrap();
    store
        .create("Phase2 Adds", vec![], names(&["c1000_0001"]), None)
        .unwrap();

    let hits: Vec<_> = store.search("boss+phase2").map(|g| g.name.as_str()).collect();
    assert_eq!(hits, vec!["Boss1"]);
    let hits: Vec<_> = store.search(" PHASE2 + ").map(|g| g.name.as_str()).collect();
    assert_eq!(hits, vec!["Boss1", "Phase2 Adds"]);
    assert_eq!(store.search("boss+adds").count(), 0);
    assert_eq!(store.search("+").count(), 3);
}

#[test]
fn display_label_honours_options() {
    let group = SelectionGroup {
        name: "Boss1".into(),
        tags: names(&["arena", "phase2"]),
        selection: vec![],
        keybind: Some(1),
    };
    let mut options = EditorOptions::default();
    assert_eq!(
        SelectionGroupStore::display_label(&group, &options),
        "Boss1 [Key 1] { arena phase2 }"
    );
    options.group_show_keybind = false;
    options.group_show_tags = false;
    assert_eq!(SelectionGroupStore::display_label(&group, &options), "Boss1");
}

#[test]
fn parse_tag_list_trims_and_drops_empty() {
    assert_eq!(parse_tag_list(" a, b ,,c "), names(&["a", "b", "c"]));
    assert!(parse_tag_list("").is_empty());
}

#[test]
fn document_uses_pascal_case_and_minus_one() {
    let mut store = SelectionGroupStore::in_memory();
    store.create("Loose", vec![], names(&["x"]), None).unwrap();
    let document = SelectionGroupDocument {
        resources: store.groups().to_vec(),
    };
    let json = serde_json::to_value(&document).unwrap();
    let first = &json["Resources"][0];
    assert_eq!(first["Name"], "Loose");
    assert_eq!(first["SelectionGroupKeybind"], -1);
    assert_eq!(first["Selection"][0], "x");
}

#[test]
fn persist_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project").join(SELECTION_GROUPS_FILE);

    let mut store = SelectionGroupStore::load(&path);
    assert!(store.is_empty());
    store
        .create("Boss1", names(&["arena"]), names(&["c5000_0000"]), Some(1))
        .unwrap();
    store.create("Loose", vec![], names(&["x"]), None).unwrap();

    let reloaded = SelectionGroupStore::load(&path);
    assert_eq!(reloaded.groups(), store.groups());
}

#[test]
fn malformed_document_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SELECTION_GROUPS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(SelectionGroupStore::load(&path).is_empty());
}

#[test]
fn persist_failure_keeps_in_memory_change() {
    let dir = tempfile::tempdir().unwrap();
    // Ein Verzeichnis als Zielpfad lässt das Schreiben scheitern
    let path = dir.path().to_path_buf();
    let mut store = SelectionGroupStore::load(&path);

    let result = store.create("Boss1", vec![], names(&["c5000_0000"]), None);
    assert!(matches!(result, Err(GroupError::Persist { .. })));
    assert!(store.get("Boss1").is_some());
}
