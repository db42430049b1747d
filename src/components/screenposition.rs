//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. The stamina bar uses it so it stays fixed on screen
//! while the player moves.
//!
//! For world-space entities, see
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Screen-space top-left corner of a UI element.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
