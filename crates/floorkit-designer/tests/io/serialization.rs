use floorkit_designer::interaction::{InputEvent, ToolMode};
use floorkit_designer::model::{OpeningKind, Point};
use floorkit_designer::serialization::PlanDocument;
use floorkit_designer::{PlanEditor, PlanError};
use proptest::prelude::*;

fn sample_editor() -> PlanEditor {
    let mut editor = PlanEditor::new();
    editor.set_snap_enabled(false);
    for (a, b) in [((0.0, 0.0), (400.0, 0.0)), ((400.0, 0.0), (400.0, 300.0))] {
        editor.dispatch(InputEvent::press(a.0, a.1));
        editor.dispatch(InputEvent::release(b.0, b.1));
    }
    editor.set_tool(ToolMode::Door);
    editor.dispatch(InputEvent::press(150.0, 20.0));
    editor.set_tool(ToolMode::Window);
    editor.dispatch(InputEvent::press(390.0, 150.0));
    editor.set_grid_size(0.25).unwrap();
    editor.set_scale(120.0).unwrap();
    editor
}

#[test]
fn test_export_import_round_trip() {
    let source = sample_editor();
    assert_eq!(source.store().wall_count(), 2);
    assert_eq!(source.store().opening_count(), 2);
    let json = source.export_plan_json().unwrap();

    let mut target = PlanEditor::new();
    target.import_plan_json(&json).unwrap();

    assert_eq!(target.export_plan(), source.export_plan());
    assert_eq!(target.settings(), source.settings());
    let kinds: Vec<_> = target.store().openings().map(|o| o.kind()).collect();
    assert_eq!(kinds, vec![OpeningKind::Door, OpeningKind::Window]);
}

#[test]
fn test_partial_import_only_changes_scale() {
    let mut editor = sample_editor();
    let before = editor.export_plan();

    editor.import_plan_json(r#"{"scale": 50}"#).unwrap();

    let after = editor.export_plan();
    assert_eq!(after.scale, Some(50.0));
    assert_eq!(after.grid_size, before.grid_size);
    assert_eq!(after.walls, before.walls);
    assert_eq!(after.openings, before.openings);
}

#[test]
fn test_import_replaces_listed_collections() {
    let mut editor = sample_editor();
    editor
        .import_plan_json(r#"{"walls": [{"id": "a", "x1": 0, "y1": 0, "x2": 0, "y2": 2}]}"#)
        .unwrap();
    assert_eq!(editor.store().wall_count(), 1);
    assert_eq!(editor.store().opening_count(), 2);
    let wall = editor.store().walls().next().unwrap();
    assert_eq!(wall.end(), Point::new(0.0, 2.0));
}

#[test]
fn test_malformed_import_leaves_state_untouched() {
    let mut editor = sample_editor();
    let before = editor.export_plan();

    let bad = [
        "",
        "[1, 2, 3]",
        r#"{"walls": [{"id": "a", "x1": 0}]}"#,
        r#"{"scale": "large"}"#,
        r#"{"scale": 0, "gridSize": 1}"#,
        r#"{"gridSize": 2, "walls": [{"id": "a", "x1": 0, "y1": 0, "x2": 0.01, "y2": 0}]}"#,
        r#"{"openings": [{"id": "x", "type": "door", "x": 0, "y": 0, "angle": 0, "length": 1},
                         {"id": "x", "type": "door", "x": 1, "y": 0, "angle": 0, "length": 1}]}"#,
    ];
    for json in bad {
        let err = editor.import_plan_json(json).unwrap_err();
        assert!(
            matches!(err, PlanError::MalformedDocument { .. }),
            "{json:?} gave {err}"
        );
        assert_eq!(editor.export_plan(), before, "{json:?} changed the plan");
    }
}

#[test]
fn test_import_drops_dangling_selection() {
    let mut editor = sample_editor();
    editor.set_tool(ToolMode::Select);
    editor.dispatch(InputEvent::press(300.0, 0.0));
    assert!(editor.selection().is_some());

    editor.import_plan_json(r#"{"gridSize": 1}"#).unwrap();
    assert!(editor.selection().is_some());

    editor.import_plan_json(r#"{"walls": []}"#).unwrap();
    assert!(editor.selection().is_none());
}

#[test]
fn test_exported_document_shape() {
    let json = sample_editor().export_plan_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["gridSize", "openings", "scale", "walls"]);
    let wall = &value["walls"][0];
    for key in ["id", "x1", "y1", "x2", "y2"] {
        assert!(wall.get(key).is_some(), "wall missing {key}");
    }
    assert_eq!(value["openings"][1]["type"], "window");
}

proptest! {
    #[test]
    fn prop_document_round_trip(
        walls in prop::collection::vec(
            (-50.0f64..50.0, -50.0f64..50.0, 0.1f64..20.0, -3.1f64..3.1),
            0..8,
        ),
        grid in 0.05f64..5.0,
        scale in 1.0f64..500.0,
    ) {
        let walls_json: Vec<String> = walls
            .iter()
            .enumerate()
            .map(|(i, (x, y, len, ang))| {
                format!(
                    r#"{{"id": "w{}", "x1": {}, "y1": {}, "x2": {}, "y2": {}}}"#,
                    i, x, y, x + len * ang.cos(), y + len * ang.sin()
                )
            })
            .collect();
        let json = format!(
            r#"{{"walls": [{}], "openings": [], "gridSize": {}, "scale": {}}}"#,
            walls_json.join(","), grid, scale
        );

        let mut first = PlanEditor::new();
        first.import_plan_json(&json).unwrap();
        let exported = first.export_plan();

        let mut second = PlanEditor::new();
        second.import_plan_json(&exported.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(second.export_plan(), exported);

        let reparsed = PlanDocument::from_json(&first.export_plan_json().unwrap()).unwrap();
        prop_assert_eq!(reparsed.walls.map(|w| w.len()), Some(walls.len()));
    }
}
