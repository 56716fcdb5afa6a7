use std::fs;

use egui::{pos2, vec2};
use pen_and_paper::element::{LineConfig, ShapeConfig, factory};
use pen_and_paper::state::{self, DEFAULT_BRUSH_SIZE};
use pen_and_paper::{Color, Document, Element, ItemRecord, PersistenceError};
use pretty_assertions::assert_eq;

fn document_with_rectangle() -> Document {
    let mut doc = Document::new();
    doc.set_viewport(vec2(320.0, 240.0));
    doc.settings_mut().color = Color::rgb(255, 0, 0);
    doc.settings_mut().set_brush_size(7);
    doc.begin_action();
    doc.add_fill(Color::rgb(255, 0, 0));
    doc
}

#[test]
fn test_save_then_load_restores_settings_and_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.pnp");

    let mut doc = document_with_rectangle();
    doc.save_as(&path).unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.current_file(), Some(path.as_path()));

    let mut loaded = Document::new();
    loaded.open(&path).unwrap();
    assert_eq!(loaded.settings().color.to_string(), "#ff0000");
    assert_eq!(loaded.settings().brush_size(), 7);

    let items: Vec<_> = loaded.canvas().elements().collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].element_type(), "rectangle");
    assert_eq!(items[0].coords(), vec![0.0, 0.0, 320.0, 240.0]);
}

#[test]
fn test_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.pnp");

    let mut doc = document_with_rectangle();
    doc.add_element(factory::create_stroke(pos2(1.0, 2.0), pos2(3.0, 4.0), Color::BLACK, 7.0));
    doc.save_as(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["color"], "#ff0000");
    assert_eq!(value["brush_size"], 7);
    assert_eq!(value["items"][0]["type"], "rectangle");
    assert_eq!(value["items"][0]["config"]["outline"], "#ff0000");
    assert_eq!(value["items"][1]["type"], "line");
    assert_eq!(value["items"][1]["config"]["width"], 7.0);
    assert_eq!(value["items"][1]["config"]["capstyle"], "round");
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse.pnp");
    fs::write(&path, r#"{"items": [{"type": "oval", "coords": [1, 1, 3, 3]}]}"#).unwrap();

    let mut doc = Document::new();
    doc.settings_mut().color = Color::rgb(1, 2, 3);
    doc.settings_mut().set_brush_size(30);
    doc.open(&path).unwrap();

    assert_eq!(doc.settings().color, Color::BLACK);
    assert_eq!(doc.settings().brush_size(), DEFAULT_BRUSH_SIZE);
    assert_eq!(doc.canvas().len(), 1);

    fs::write(&path, "{}").unwrap();
    doc.open(&path).unwrap();
    assert!(doc.canvas().is_empty());
}

#[test]
fn test_null_fields_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nulls.pnp");
    fs::write(&path, r#"{"items": null, "color": null, "brush_size": null}"#).unwrap();

    let mut doc = Document::new();
    doc.settings_mut().color = Color::rgb(9, 9, 9);
    doc.settings_mut().set_brush_size(20);
    doc.add_element(factory::create_dot(pos2(4.0, 4.0), 1.0, Color::BLACK));
    doc.open(&path).unwrap();

    assert!(doc.canvas().is_empty());
    assert_eq!(doc.settings().color, Color::BLACK);
    assert_eq!(doc.settings().brush_size(), DEFAULT_BRUSH_SIZE);

    fs::write(
        &path,
        r#"{"items": [
            {"type": "line", "coords": [0, 0, 6, 6], "config": null},
            {"type": "oval", "coords": [1, 1, 3, 3], "config": null}
        ]}"#,
    )
    .unwrap();
    doc.open(&path).unwrap();

    let items = doc.canvas().serialize();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0],
        ItemRecord::Line {
            coords: vec![0.0, 0.0, 6.0, 6.0],
            config: LineConfig::default(),
        }
    );
    assert_eq!(
        items[1],
        ItemRecord::Oval {
            coords: vec![1.0, 1.0, 3.0, 3.0],
            config: ShapeConfig::default(),
        }
    );
}

#[test]
fn test_open_clears_history_and_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.pnp");
    document_with_rectangle().save_as(&path).unwrap();

    let mut doc = Document::new();
    doc.begin_action();
    doc.add_element(factory::create_dot(pos2(4.0, 4.0), 1.0, Color::BLACK));
    assert!(doc.is_modified());

    doc.open(&path).unwrap();
    assert!(!doc.is_modified());
    assert!(!doc.history().can_undo());
    assert!(!doc.history().can_redo());
}

#[test]
fn test_malformed_json_leaves_document_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pnp");
    fs::write(&path, "{ not json").unwrap();

    let mut doc = document_with_rectangle();
    let err = doc.open(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Parse { .. }));
    assert!(!err.is_write_error());

    assert_eq!(doc.canvas().len(), 1);
    assert!(doc.is_modified());
    assert!(doc.history().can_undo());
    assert_eq!(doc.current_file(), None);
}

#[test]
fn test_wrong_field_types_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typed.pnp");

    for body in [
        r#"{"items": {}}"#,
        r#"{"brush_size": "large"}"#,
        r#"{"color": 12}"#,
        r#"{"items": [{"coords": [0, 0, 1, 1]}]}"#,
        r#"[1, 2, 3]"#,
    ] {
        fs::write(&path, body).unwrap();
        assert!(
            matches!(state::load(&path), Err(PersistenceError::Parse { .. })),
            "accepted {body}"
        );
    }
}

#[test]
fn test_invalid_items_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.pnp");
    fs::write(&path, r#"{"items": [{"type": "rectangle", "coords": [0, 0, 1]}]}"#).unwrap();

    let err = state::load(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Invalid { index: 0, .. }));
}

#[test]
fn test_unknown_items_are_skipped_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.pnp");
    fs::write(
        &path,
        r#"{"items": [
            {"type": "text", "coords": [5, 5], "config": {"text": "hi"}},
            {"type": "line", "coords": [0, 0, 4, 4, 8, 0]}
        ]}"#,
    )
    .unwrap();

    let mut doc = Document::new();
    doc.open(&path).unwrap();
    assert_eq!(doc.canvas().len(), 1);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = Document::new();
    let err = doc.open(&dir.path().join("nope.pnp")).unwrap_err();
    assert!(matches!(err, PersistenceError::Read { .. }));
}

#[test]
fn test_unwritable_path_keeps_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.pnp");

    let mut doc = document_with_rectangle();
    let err = doc.save_as(&path).unwrap_err();
    assert!(err.is_write_error());
    assert!(doc.is_modified());
    assert_eq!(doc.current_file(), None);
}

#[test]
fn test_out_of_range_brush_size_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.pnp");
    fs::write(&path, r#"{"brush_size": 500}"#).unwrap();

    let mut doc = Document::new();
    doc.open(&path).unwrap();
    assert_eq!(doc.settings().brush_size(), 50);
}
