//! Keyboard-driven motion state.
//!
//! [`MotionState`] is what the motion controller produces each frame and
//! what the stamina gauge and the movement system consume:
//! - `direction` is rebuilt from the held direction keys every frame
//! - `running` latches while the run button is held together with a
//!   direction key, and clears on the frame the run button is released
//! - `speed` is owned by the stamina gauge, which switches it between the
//!   base and run speeds
//!
//! See [`crate::systems::motioncontroller`] for how input becomes a
//! [`MotionIntent`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default walking speed in world units per second.
pub const DEFAULT_BASE_SPEED: f32 = 2.0;

/// How a frame's input affects the `running` latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEdge {
    /// Run button and at least one direction key are held.
    Engage,
    /// Run button was released this frame.
    Release,
    /// Leave `running` as it was.
    Keep,
}

/// Input for one frame, already reduced to what motion cares about.
#[derive(Debug, Clone, Copy)]
pub struct MotionIntent {
    /// Sum of the unit vectors of every held direction. Not normalized.
    pub direction: Vector2,
    pub run: RunEdge,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct MotionState {
    /// Current speed in world units per second.
    pub speed: f32,
    /// Direction requested this frame; zero when no direction key is held.
    pub direction: Vector2,
    /// Whether the player is asking to run.
    pub running: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_SPEED)
    }
}

impl MotionState {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: Vector2 { x: 0.0, y: 0.0 },
            running: false,
        }
    }

    /// True when any direction is requested.
    pub fn is_moving(&self) -> bool {
        self.direction.x != 0.0 || self.direction.y != 0.0
    }

    /// Velocity the body should move with for the current direction and speed.
    pub fn velocity(&self) -> Vector2 {
        self.direction.scale_by(self.speed)
    }

    /// Apply a frame's intent. Returns `true` if `running` changed.
    pub fn apply_intent(&mut self, intent: MotionIntent) -> bool {
        self.direction = intent.direction;
        let was_running = self.running;
        match intent.run {
            RunEdge::Engage => self.running = true,
            RunEdge::Release => self.running = false,
            RunEdge::Keep => {}
        }
        was_running != self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(x: f32, y: f32, run: RunEdge) -> MotionIntent {
        MotionIntent {
            direction: Vector2 { x, y },
            run,
        }
    }

    #[test]
    fn test_default_walks_at_base_speed() {
        let motion = MotionState::default();
        assert_eq!(motion.speed, DEFAULT_BASE_SPEED);
        assert!(!motion.running);
        assert!(!motion.is_moving());
    }

    #[test]
    fn test_apply_intent_engage_and_release() {
        let mut motion = MotionState::default();
        assert!(motion.apply_intent(intent(1.0, 0.0, RunEdge::Engage)));
        assert!(motion.running);
        assert!(motion.is_moving());

        // Keep does not touch the latch even when direction goes to zero.
        assert!(!motion.apply_intent(intent(0.0, 0.0, RunEdge::Keep)));
        assert!(motion.running);
        assert!(!motion.is_moving());

        assert!(motion.apply_intent(intent(0.0, 0.0, RunEdge::Release)));
        assert!(!motion.running);
    }

    #[test]
    fn test_release_when_not_running_reports_no_change() {
        let mut motion = MotionState::default();
        assert!(!motion.apply_intent(intent(0.0, 1.0, RunEdge::Release)));
        assert!(!motion.running);
    }

    #[test]
    fn test_velocity_is_direction_times_speed() {
        let mut motion = MotionState::new(6.0);
        motion.direction = Vector2 { x: -1.0, y: 1.0 };
        let v = motion.velocity();
        assert_eq!(v.x, -6.0);
        assert_eq!(v.y, 6.0);
    }
}
