//! Keyboard motion controller.
//!
//! Reads the shared [`InputState`] and rebuilds every
//! [`MotionState`]'s direction and running latch. Direction keys add unit
//! vectors without normalizing, so a diagonal is √2 long and opposite keys
//! cancel out. Up is negative y, matching screen coordinates.
//!
//! The run latch follows two checks evaluated in order:
//! - run button held and any direction held → `running = true`
//! - run button released this frame → `running = false`
//!
//! Holding the run button with no direction leaves the latch as it was.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::motion::{MotionIntent, MotionState, RunEdge};
use crate::events::motion::RunToggledEvent;
use crate::resources::input::InputState;

const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };

/// Reduce an input snapshot to the frame's motion intent.
pub fn motion_intent(input: &InputState) -> MotionIntent {
    let mut direction = Vector2 { x: 0.0, y: 0.0 };
    if input.left_held() {
        direction += LEFT;
    }
    if input.right_held() {
        direction += RIGHT;
    }
    if input.up_held() {
        direction += UP;
    }
    if input.down_held() {
        direction += DOWN;
    }

    let mut run = RunEdge::Keep;
    if input.action_run.active && input.any_direction_held() {
        run = RunEdge::Engage;
    }
    if input.action_run.just_released {
        run = RunEdge::Release;
    }

    MotionIntent { direction, run }
}

/// Apply this frame's input to every `MotionState`.
pub fn motion_controller(
    mut query: Query<(Entity, &mut MotionState)>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    let intent = motion_intent(&input);
    for (entity, mut motion) in query.iter_mut() {
        if motion.apply_intent(intent) {
            commands.trigger(RunToggledEvent {
                entity,
                running: motion.running,
            });
        }
    }
}
