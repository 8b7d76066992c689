use serde_json::{json, Map, Value};

use portfolio_ui::modal::ModalStack;

fn props(pairs: Vec<(&str, Value)>) -> Map<String, Value> {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    m
}

#[test]
fn reopening_a_name_keeps_one_entry_with_latest_props() {
    let stack = ModalStack::new();
    stack.open_modal("X", props(vec![("step", json!(1))]), true);
    stack.open_modal("Y", Map::new(), true);
    stack.open_modal("X", props(vec![("step", json!(2))]), false);

    let entries = stack.entries();
    let named_x: Vec<_> = entries.iter().filter(|m| m.name == "X").collect();
    assert_eq!(named_x.len(), 1);
    assert_eq!(named_x[0].props.get("step"), Some(&json!(2)));
    assert!(!named_x[0].close_on_click_outside);

    // The reopened entry moved to the top
    assert_eq!(stack.active_modal().map(|m| m.name), Some("X".to_string()));
    assert_eq!(stack.len(), 2);
}

#[test]
fn active_modal_tracks_the_top_of_the_stack() {
    let stack = ModalStack::new();
    assert!(stack.active_modal().is_none());

    stack.open_modal("projects", Map::new(), true);
    stack.open_modal("confirm-delete", Map::new(), true);
    assert_eq!(stack.active_modal().unwrap().name, "confirm-delete");

    let closed = stack.close_modal().unwrap();
    assert_eq!(closed.name, "confirm-delete");
    assert_eq!(stack.active_modal().unwrap().name, "projects");

    stack.close_modal();
    assert!(stack.active_modal().is_none());
    assert!(stack.is_empty());
}

#[test]
fn close_all_empties_the_stack() {
    let stack = ModalStack::new();
    stack.open_modal("a", Map::new(), true);
    stack.open_modal("b", Map::new(), true);
    assert!(stack.contains("a"));

    stack.close_all_modals();
    assert!(stack.is_empty());
    assert!(!stack.contains("a"));
    assert!(stack.close_modal().is_none());
}

#[test]
fn clones_share_the_same_stack() {
    let stack = ModalStack::new();
    let handle = stack.clone();
    handle.open_modal("shared", Map::new(), true);
    assert_eq!(stack.active_modal().unwrap().name, "shared");
}
