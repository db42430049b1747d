//! Player marker component.

use bevy_ecs::prelude::Component;

/// Tag for the entity driven by keyboard input. The render system draws it
/// as a square `size` world units wide.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}
