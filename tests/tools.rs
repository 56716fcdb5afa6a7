use egui::{CursorIcon, pos2, vec2};
use pen_and_paper::element::factory;
use pen_and_paper::input::route_event;
use pen_and_paper::tools::EraserTool;
use pen_and_paper::{Color, Document, Element, InputEvent, Tool, ToolKind, ToolType};
use pretty_assertions::assert_eq;

fn document() -> Document {
    let mut doc = Document::new();
    doc.set_viewport(vec2(400.0, 300.0));
    doc
}

fn gesture(tool: &mut ToolType, doc: &mut Document, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    route_event(&InputEvent::PointerDown { position: pos2(first.0, first.1) }, tool, doc);
    for &(x, y) in rest {
        route_event(&InputEvent::PointerMove { position: pos2(x, y) }, tool, doc);
    }
    let last = points.last().unwrap();
    route_event(&InputEvent::PointerUp { position: pos2(last.0, last.1) }, tool, doc);
}

#[test]
fn test_pencil_draws_dot_then_segments() {
    let mut doc = document();
    doc.settings_mut().color = Color::rgb(0, 128, 0);
    doc.settings_mut().set_brush_size(6);
    let mut tool = ToolKind::Pencil.new_instance();

    gesture(&mut tool, &mut doc, &[(10.0, 10.0), (20.0, 10.0), (30.0, 15.0)]);

    let types: Vec<_> = doc.canvas().elements().map(|e| e.element_type()).collect();
    assert_eq!(types, vec!["oval", "line", "line"]);

    let coords: Vec<_> = doc.canvas().elements().map(|e| e.coords()).collect();
    assert_eq!(coords[0], vec![7.0, 7.0, 13.0, 13.0]);
    assert_eq!(coords[1], vec![10.0, 10.0, 20.0, 10.0]);
    assert_eq!(coords[2], vec![20.0, 10.0, 30.0, 15.0]);

    assert!(doc.is_modified());
    assert_eq!(doc.history().undo_stack().len(), 1);
}

#[test]
fn test_pencil_ignores_moves_without_press() {
    let mut doc = document();
    let mut tool = ToolKind::Pencil.new_instance();
    route_event(&InputEvent::PointerMove { position: pos2(5.0, 5.0) }, &mut tool, &mut doc);
    assert!(doc.canvas().is_empty());
    assert!(!doc.is_modified());
}

#[test]
fn test_one_snapshot_per_gesture() {
    let mut doc = document();
    let mut tool = ToolKind::Pencil.new_instance();

    gesture(&mut tool, &mut doc, &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
    gesture(&mut tool, &mut doc, &[(50.0, 50.0), (60.0, 60.0)]);
    assert_eq!(doc.history().undo_stack().len(), 2);

    // Undo removes the whole second stroke
    doc.undo();
    assert_eq!(doc.canvas().len(), 4);
    doc.undo();
    assert!(doc.canvas().is_empty());
}

#[test]
fn test_eraser_removes_overlapping_items() {
    let mut doc = document();
    doc.add_element(factory::create_dot(pos2(20.0, 20.0), 2.0, Color::BLACK));
    doc.add_element(factory::create_dot(pos2(200.0, 200.0), 2.0, Color::BLACK));
    let dir = tempfile::tempdir().unwrap();
    doc.save_as(&dir.path().join("a.pnp")).unwrap();
    assert!(!doc.is_modified());

    let mut tool = ToolKind::Eraser.new_instance();
    gesture(&mut tool, &mut doc, &[(100.0, 100.0), (22.0, 22.0)]);

    assert_eq!(doc.canvas().len(), 1);
    assert_eq!(doc.canvas().elements().next().unwrap().coords(), vec![198.0, 198.0, 202.0, 202.0]);
    assert!(doc.is_modified());
}

#[test]
fn test_eraser_missing_everything_keeps_document_clean() {
    let mut doc = document();
    doc.add_element(factory::create_dot(pos2(20.0, 20.0), 2.0, Color::BLACK));
    let dir = tempfile::tempdir().unwrap();
    doc.save_as(&dir.path().join("clean.pnp")).unwrap();

    let mut tool = ToolKind::Eraser.new_instance();
    gesture(&mut tool, &mut doc, &[(300.0, 250.0), (310.0, 260.0)]);

    assert_eq!(doc.canvas().len(), 1);
    assert!(!doc.is_modified());
    // The press still counts as a gesture
    assert_eq!(doc.history().undo_stack().len(), 1);
}

#[test]
fn test_eraser_footprint_scales_with_brush() {
    let area = EraserTool::footprint(pos2(50.0, 50.0), 5);
    assert_eq!(area.width(), 20.0);
    assert_eq!(area.center(), pos2(50.0, 50.0));
}

#[test]
fn test_fill_goes_behind_existing_items() {
    let mut doc = document();
    doc.add_element(factory::create_dot(pos2(20.0, 20.0), 2.0, Color::BLACK));
    doc.settings_mut().color = Color::rgb(255, 255, 0);

    let mut tool = ToolKind::Fill.new_instance();
    gesture(&mut tool, &mut doc, &[(100.0, 100.0)]);

    let items: Vec<_> = doc.canvas().elements().collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_fill());
    assert_eq!(items[0].coords(), vec![0.0, 0.0, 400.0, 300.0]);
    assert_eq!(items[1].element_type(), "oval");
    assert_eq!(doc.fill_percentage(), 100.0);
}

#[test]
fn test_fill_ignores_drag() {
    let mut doc = document();
    let mut tool = ToolKind::Fill.new_instance();
    gesture(&mut tool, &mut doc, &[(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)]);
    assert_eq!(doc.canvas().len(), 1);
    assert_eq!(doc.history().undo_stack().len(), 1);
}

#[test]
fn test_tool_cursors_and_names() {
    let cursors: Vec<_> = ToolKind::ALL
        .iter()
        .map(|kind| {
            let tool = kind.new_instance();
            assert_eq!(tool.name(), kind.label());
            assert_eq!(tool.kind(), *kind);
            tool.cursor()
        })
        .collect();
    assert_eq!(
        cursors,
        vec![CursorIcon::Crosshair, CursorIcon::Cell, CursorIcon::PointingHand]
    );
}

#[test]
fn test_switching_tools_drops_gesture() {
    let mut ui = pen_and_paper::UiState::new();
    let mut doc = document();

    route_event(&InputEvent::PointerDown { position: pos2(5.0, 5.0) }, &mut ui.tool, &mut doc);
    ui.select_tool(ToolKind::Eraser);
    ui.select_tool(ToolKind::Pencil);
    route_event(&InputEvent::PointerMove { position: pos2(9.0, 9.0) }, &mut ui.tool, &mut doc);

    // Only the initial dot; the fresh pencil never saw a press
    assert_eq!(doc.canvas().len(), 1);
    assert!(!ui.input.is_pressed());
}
