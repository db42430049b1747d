//! World-space position component.
//!
//! [`MapPosition`] holds the kinematic body's position in world units. It is
//! advanced by [`crate::systems::movement::movement`] on every fixed step and
//! scaled to pixels only when drawn.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
