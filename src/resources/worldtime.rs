//! Simulation time resource.
//!
//! `delta` is the scaled variable frame time used by logic systems.
//! `fixed_delta` is the length of one physics step and is what
//! [`crate::systems::movement::movement`] integrates with.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub fixed_delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            fixed_delta: 1.0 / 50.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_fixed_delta(mut self, fixed_delta: f32) -> Self {
        self.fixed_delta = fixed_delta;
        self
    }
}
