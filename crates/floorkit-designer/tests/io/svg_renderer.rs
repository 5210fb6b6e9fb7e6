use floorkit_designer::interaction::{InputEvent, ToolMode};
use floorkit_designer::svg_renderer::SvgStyle;
use floorkit_designer::PlanEditor;

fn plan_with_window() -> PlanEditor {
    let mut editor = PlanEditor::new();
    editor.set_snap_enabled(false);
    editor.set_viewport_size(600.0, 400.0).unwrap();
    editor.dispatch(InputEvent::press(100.0, 100.0));
    editor.dispatch(InputEvent::release(500.0, 100.0));
    editor.set_tool(ToolMode::Window);
    editor.dispatch(InputEvent::press(300.0, 110.0));
    editor
}

#[test]
fn test_svg_document_structure() {
    let svg = plan_with_window().export_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"600\" height=\"400\""));
    assert!(svg.contains("x1=\"100\" y1=\"100\" x2=\"500\" y2=\"100\" stroke=\"#333\""));
    assert!(svg.contains(">window</text>"));
    assert!(svg.contains("<text x=\"300\" y=\"90\""));
}

#[test]
fn test_grid_toggle() {
    let mut editor = plan_with_window();
    assert!(editor.export_svg().contains("id=\"grid\""));
    editor.set_show_grid(false);
    assert!(!editor.export_svg().contains("id=\"grid\""));
}

#[test]
fn test_grid_follows_pan() {
    let mut editor = PlanEditor::new();
    editor.set_viewport_size(100.0, 100.0).unwrap();
    editor.set_pan(floorkit_designer::ScreenPoint::new(25.0, 0.0));
    let svg = editor.export_svg();
    // vertical grid lines sit at 25 px + k * 50 px
    assert!(svg.contains("<line x1=\"25\" y1=\"0\" x2=\"25\""));
    assert!(svg.contains("<line x1=\"75\" y1=\"0\" x2=\"75\""));
}

#[test]
fn test_custom_style() {
    let mut editor = plan_with_window();
    editor.set_svg_style(SvgStyle {
        wall_stroke: "black".to_string(),
        ..SvgStyle::default()
    });
    let svg = editor.export_svg();
    assert!(svg.contains("stroke=\"black\""));
    assert!(!svg.contains("stroke=\"#333\""));
}

#[test]
fn test_tiny_imported_scale_renders_without_grid() {
    let mut editor = PlanEditor::new();
    editor
        .import_plan_json(
            r#"{"walls": [{"id": "a", "x1": 0, "y1": 0, "x2": 3, "y2": 0}], "scale": 1e-300}"#,
        )
        .unwrap();
    let svg = editor.export_svg();
    assert!(!svg.contains("id=\"grid\""));
    assert!(svg.contains("stroke=\"#333\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_huge_viewport_renders_without_grid() {
    let mut editor = plan_with_window();
    editor.set_viewport_size(1e300, 1e300).unwrap();
    let svg = editor.export_svg();
    assert!(!svg.contains("id=\"grid\""));
    assert!(svg.contains(">window</text>"));
}
