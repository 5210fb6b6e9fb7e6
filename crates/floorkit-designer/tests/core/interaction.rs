use floorkit_designer::entity_store::EntityStore;
use floorkit_designer::interaction::{
    reduce, Effect, Gesture, InputEvent, ReduceContext, ToolMode, ViewState,
};
use floorkit_designer::model::{
    EntityRef, OpeningKind, Point, ScreenPoint, Wall, WallId,
};

fn context(store: &EntityStore, snap_enabled: bool) -> ReduceContext<'_> {
    ReduceContext {
        store,
        grid_size: 0.5,
        scale: 100.0,
        snap_enabled,
    }
}

fn run(
    view: ViewState,
    events: &[InputEvent],
    ctx: &ReduceContext<'_>,
) -> (ViewState, Vec<Effect>) {
    let mut view = view;
    let mut effects = Vec::new();
    for event in events {
        let t = reduce(&view, event, ctx);
        view = t.view;
        effects.extend(t.effects);
    }
    (view, effects)
}

#[test]
fn test_short_drag_is_discarded() {
    // (1, 1) -> (1.02, 1) is 0.02 m long
    let store = EntityStore::new();
    let ctx = context(&store, false);
    let (view, effects) = run(
        ViewState::new(ToolMode::Wall),
        &[
            InputEvent::press(100.0, 100.0),
            InputEvent::moved(102.0, 100.0),
            InputEvent::release(102.0, 100.0),
        ],
        &ctx,
    );
    assert!(effects.is_empty());
    assert!(view.gesture.is_idle());
}

#[test]
fn test_snapped_drag_collapsing_to_a_point_is_discarded() {
    let store = EntityStore::new();
    let ctx = context(&store, true);
    let (_, effects) = run(
        ViewState::new(ToolMode::Wall),
        &[
            InputEvent::press(100.0, 100.0),
            InputEvent::moved(115.0, 110.0),
            InputEvent::release(115.0, 110.0),
        ],
        &ctx,
    );
    assert!(effects.is_empty());
}

#[test]
fn test_panned_view_offsets_world_points() {
    let store = EntityStore::new();
    let ctx = context(&store, false);
    let mut view = ViewState::new(ToolMode::Wall);
    view.pan = ScreenPoint::new(100.0, 100.0);
    let (_, effects) = run(
        view,
        &[InputEvent::press(100.0, 100.0), InputEvent::release(300.0, 100.0)],
        &ctx,
    );
    assert_eq!(
        effects,
        vec![Effect::CreateWall {
            start: Point::new(0.0, 0.0),
            end: Point::new(2.0, 0.0),
        }]
    );
}

#[test]
fn test_window_tool_attaches_to_nearest_wall() {
    let mut store = EntityStore::new();
    store.add_wall(
        Wall::with_id(WallId::from("w1"), Point::new(0.0, 0.0), Point::new(0.0, 4.0)).unwrap(),
    );
    let ctx = context(&store, false);
    let (_, effects) = run(
        ViewState::new(ToolMode::Window),
        &[InputEvent::press(-30.0, 150.0)],
        &ctx,
    );
    match effects.as_slice() {
        [Effect::CreateOpening {
            kind,
            anchor,
            angle,
            length,
        }] => {
            assert_eq!(*kind, OpeningKind::Window);
            assert!(anchor.x.abs() < 1e-12);
            assert!((anchor.y - 1.5).abs() < 1e-12);
            assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
            assert_eq!(*length, 0.9);
        }
        other => panic!("unexpected effects: {:?}", other),
    }
}

#[test]
fn test_select_clears_on_empty_space() {
    let mut store = EntityStore::new();
    store.add_wall(
        Wall::with_id(WallId::from("w1"), Point::new(0.0, 0.0), Point::new(4.0, 0.0)).unwrap(),
    );
    let ctx = context(&store, false);
    let (view, _) = run(
        ViewState::new(ToolMode::Select),
        &[InputEvent::press(100.0, 0.0)],
        &ctx,
    );
    assert_eq!(view.selection, Some(EntityRef::Wall(WallId::from("w1"))));

    let (view, effects) = run(view, &[InputEvent::press(100.0, 300.0)], &ctx);
    assert_eq!(view.selection, None);
    assert!(effects.is_empty());
}

#[test]
fn test_erase_on_empty_space_is_noop() {
    let store = EntityStore::new();
    let ctx = context(&store, false);
    let (view, effects) = run(
        ViewState::new(ToolMode::Erase),
        &[InputEvent::press(10.0, 10.0)],
        &ctx,
    );
    assert!(effects.is_empty());
    assert_eq!(view, ViewState::new(ToolMode::Erase));
}

#[test]
fn test_moves_without_gesture_change_nothing() {
    let store = EntityStore::new();
    let ctx = context(&store, true);
    let view = ViewState::new(ToolMode::Select);
    let (after, effects) = run(
        view.clone(),
        &[InputEvent::moved(10.0, 10.0), InputEvent::release(20.0, 20.0)],
        &ctx,
    );
    assert_eq!(after, view);
    assert!(effects.is_empty());
}

#[test]
fn test_leave_during_pan_restores_pan() {
    let store = EntityStore::new();
    let ctx = context(&store, false);
    let (view, _) = run(
        ViewState::new(ToolMode::Select),
        &[
            InputEvent::pan_press(0.0, 0.0),
            InputEvent::moved(40.0, 40.0),
            InputEvent::Leave,
        ],
        &ctx,
    );
    assert_eq!(view.gesture, Gesture::Idle);
    assert_eq!(view.pan, ScreenPoint::new(0.0, 0.0));
}

#[test]
fn test_set_tool_keeps_pan_gesture() {
    let store = EntityStore::new();
    let ctx = context(&store, false);
    let (view, _) = run(
        ViewState::new(ToolMode::Wall),
        &[
            InputEvent::pan_press(0.0, 0.0),
            InputEvent::SetTool {
                tool: ToolMode::Door,
            },
            InputEvent::moved(5.0, 0.0),
        ],
        &ctx,
    );
    assert_eq!(view.tool, ToolMode::Door);
    assert!(matches!(view.gesture, Gesture::Panning { .. }));
    assert_eq!(view.pan, ScreenPoint::new(5.0, 0.0));
}

#[test]
fn test_view_state_serializes() {
    let mut view = ViewState::new(ToolMode::Door);
    view.selection = Some(EntityRef::Wall(WallId::from("w1")));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["tool"], "door");
    assert_eq!(json["selection"]["type"], "wall");
    assert_eq!(json["selection"]["id"], "w1");
    assert_eq!(json["gesture"]["state"], "idle");

    let back: ViewState = serde_json::from_value(json).unwrap();
    assert_eq!(back, view);
}

#[test]
fn test_input_event_from_json() {
    let event: InputEvent =
        serde_json::from_str(r#"{"event": "press", "position": {"x": 1.0, "y": 2.0}}"#).unwrap();
    assert_eq!(event, InputEvent::press(1.0, 2.0));
}

#[test]
fn test_tool_names_parse_back() {
    for tool in ToolMode::ALL {
        assert_eq!(tool.to_string().parse::<ToolMode>(), Ok(tool));
        assert_eq!(tool.as_str().to_uppercase().parse::<ToolMode>(), Ok(tool));
    }
    let err = "lasso".parse::<ToolMode>().unwrap_err();
    assert!(err.contains("lasso"));
    assert!(err.contains("select, wall, door, window, erase"));
}
