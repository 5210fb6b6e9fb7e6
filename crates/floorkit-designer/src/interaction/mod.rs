//! Pointer interaction as a pure reducer.
//!
//! [`reduce`] maps the current [`ViewState`] and one [`InputEvent`] to the
//! next view state plus a list of store [`Effect`]s. It never touches the
//! store itself, which keeps the tool state machine testable without a
//! presentation layer.
//!
//! Wall drawing runs `Idle -> DrawingWall -> Idle`; pan drags run
//! `Idle -> Panning -> Idle`. A press while a gesture is active is ignored,
//! so at most one gesture exists per press-to-release cycle.

mod types;

pub use types::{
    Effect, Gesture, InputEvent, PointerButton, ReduceContext, ToolMode, Transition, ViewState,
};

use floorkit_core::constants::{DEFAULT_OPENING_LENGTH_M, MIN_WALL_LENGTH_M};

use crate::geometry::{find_nearest_wall, pick_entity};
use crate::model::{EntityRef, Point, ScreenPoint};
use crate::snap::snap_to_grid;

/// Advances the view state by one input event.
pub fn reduce(view: &ViewState, event: &InputEvent, ctx: &ReduceContext<'_>) -> Transition {
    match *event {
        InputEvent::Press { position, button } => on_press(view, position, button, ctx),
        InputEvent::Move { position } => on_move(view, position, ctx),
        InputEvent::Release { position } => on_release(view, position, ctx),
        InputEvent::Leave => on_leave(view),
        InputEvent::SetTool { tool } => on_set_tool(view, tool),
    }
}

/// Screen point to snapped world point.
fn world_point(view: &ViewState, screen: ScreenPoint, ctx: &ReduceContext<'_>) -> Point {
    let world = ctx.viewport(view).screen_to_world(screen);
    if ctx.snap_enabled {
        snap_to_grid(world, ctx.grid_size)
    } else {
        world
    }
}

fn on_press(
    view: &ViewState,
    position: ScreenPoint,
    button: PointerButton,
    ctx: &ReduceContext<'_>,
) -> Transition {
    if !view.gesture.is_idle() {
        tracing::debug!("Ignoring press while {:?} is active", view.gesture);
        return Transition::unchanged(view);
    }

    let mut next = view.clone();
    let mut effects = Vec::new();

    if button == PointerButton::Secondary {
        next.gesture = Gesture::Panning {
            origin: position,
            start_pan: view.pan,
        };
        return Transition {
            view: next,
            effects,
        };
    }

    let p = world_point(view, position, ctx);

    match view.tool {
        ToolMode::Select => {
            next.selection = pick_entity(p, ctx.store);
            tracing::debug!("Selection at {} -> {:?}", p, next.selection);
        }
        ToolMode::Wall => {
            next.gesture = Gesture::DrawingWall {
                origin: p,
                current: p,
            };
        }
        ToolMode::Erase => {
            if let Some(target) = pick_entity(p, ctx.store) {
                if next.selection.as_ref() == Some(&target) {
                    next.selection = None;
                }
                effects.push(match target {
                    EntityRef::Wall(id) => Effect::RemoveWall(id),
                    EntityRef::Opening(id) => Effect::RemoveOpening(id),
                });
            }
        }
        ToolMode::Door | ToolMode::Window => {
            let kind = match view.tool.opening_kind() {
                Some(kind) => kind,
                None => return Transition::unchanged(view),
            };
            match find_nearest_wall(p, ctx.store) {
                Some(hit) => effects.push(Effect::CreateOpening {
                    kind,
                    anchor: hit.projection,
                    angle: hit.angle,
                    length: DEFAULT_OPENING_LENGTH_M,
                }),
                None => tracing::debug!("No wall near {} for {}", p, kind),
            }
        }
    }

    Transition {
        view: next,
        effects,
    }
}

fn on_move(view: &ViewState, position: ScreenPoint, ctx: &ReduceContext<'_>) -> Transition {
    let mut next = view.clone();
    match view.gesture {
        Gesture::Idle => return Transition::unchanged(view),
        Gesture::DrawingWall { origin, .. } => {
            next.gesture = Gesture::DrawingWall {
                origin,
                current: world_point(view, position, ctx),
            };
        }
        Gesture::Panning { origin, start_pan } => {
            next.pan = ScreenPoint::new(
                start_pan.x + (position.x - origin.x),
                start_pan.y + (position.y - origin.y),
            );
        }
    }
    Transition {
        view: next,
        effects: Vec::new(),
    }
}

fn on_release(view: &ViewState, position: ScreenPoint, ctx: &ReduceContext<'_>) -> Transition {
    let mut next = view.clone();
    let mut effects = Vec::new();
    match view.gesture {
        Gesture::Idle => return Transition::unchanged(view),
        Gesture::DrawingWall { origin, .. } => {
            let end = world_point(view, position, ctx);
            let length = origin.distance_to(&end);
            if length > MIN_WALL_LENGTH_M {
                effects.push(Effect::CreateWall { start: origin, end });
            } else {
                tracing::debug!(
                    "Discarding draft wall of {:.3} m (minimum {:.2} m)",
                    length,
                    MIN_WALL_LENGTH_M
                );
            }
        }
        Gesture::Panning { .. } => {}
    }
    next.gesture = Gesture::Idle;
    Transition {
        view: next,
        effects,
    }
}

fn on_leave(view: &ViewState) -> Transition {
    if view.gesture.is_idle() {
        return Transition::unchanged(view);
    }
    tracing::debug!("Abandoning {:?}", view.gesture);
    let mut next = view.clone();
    if let Gesture::Panning { start_pan, .. } = view.gesture {
        next.pan = start_pan;
    }
    next.gesture = Gesture::Idle;
    Transition {
        view: next,
        effects: Vec::new(),
    }
}

fn on_set_tool(view: &ViewState, tool: ToolMode) -> Transition {
    let mut next = view.clone();
    next.tool = tool;
    if matches!(view.gesture, Gesture::DrawingWall { .. }) {
        next.gesture = Gesture::Idle;
    }
    Transition {
        view: next,
        effects: Vec::new(),
    }
}
