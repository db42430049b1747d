//! Time update functions.
//!
//! [`update_world_time`] advances the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame.
//! [`fixed_ticks`] converts that frame's delta into a number of physics ticks
//! using the [`FixedStep`] accumulator.
use bevy_ecs::prelude::*;

use crate::resources::fixedstep::FixedStep;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Number of physics ticks due this frame.
///
/// Without a [`FixedStep`] resource physics runs exactly once per frame and
/// `fixed_delta` follows the frame delta.
pub fn fixed_ticks(world: &mut World) -> u32 {
    let delta = world.resource::<WorldTime>().delta;
    let (ticks, step) = match world.get_resource_mut::<FixedStep>() {
        Some(mut fixed) => (fixed.ticks(delta), fixed.step),
        None => (1, delta),
    };
    world.resource_mut::<WorldTime>().fixed_delta = step;
    ticks
}
