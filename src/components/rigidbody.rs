//! Kinematic body component.
//!
//! The [`RigidBody`] is the physics body the motion controller drives. Each
//! fixed step the movement system writes `direction * speed` into
//! `velocity` and integrates it into the entity's
//! [`MapPosition`](super::mapposition::MapPosition).
//!
//! The `frozen` flag keeps the body in place while still letting input and
//! stamina logic run (e.g. during a pause overlay).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing the velocity applied on the last fixed step.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Velocity in world units per second.
    pub velocity: Vector2,
    /// When true, the movement system leaves the position untouched.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            frozen: false,
        }
    }

    /// Freeze the rigid body, preventing movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body, allowing movement system to update it.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Displacement produced by `velocity` over `delta` seconds.
    pub fn displacement(&self, delta: f32) -> Vector2 {
        self.velocity.scale_by(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::default();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }

    #[test]
    fn test_displacement_scales_velocity() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 6.0, y: -2.0 };
        let d = rb.displacement(0.5);
        assert!(approx_eq(d.x, 3.0));
        assert!(approx_eq(d.y, -1.0));
    }
}
