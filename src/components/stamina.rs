//! Stamina gauge component.
//!
//! A [`StaminaGauge`] gates the run speed of one player entity. Each frame
//! [`StaminaGauge::step`] evaluates four checks in a fixed order:
//!
//! 1. **Draining** – running with a direction held: `current -= dt`, run speed
//! 2. **Regenerating** – not running and `current <= duration`:
//!    `current += dt / regen_divisor`, base speed
//! 3. **Exhausted** – `current <= 0`: `can_run = false`, base speed forced
//! 4. **Replenished** – `current > 0`: `can_run = true`
//!
//! Checks 1 and 2 are exclusive. Checks 3 and 4 run afterwards on every
//! frame, so an exhausted gauge overrides the run speed set by check 1 in
//! the same frame.
//!
//! `current` has no upper clamp: a regenerating step that starts just
//! below `duration` may leave it slightly above, which shows up as a fill
//! ratio above 1.0.
//!
//! Draining only consults `can_run` when `gate_on_can_run` is set. By
//! default it is not, so a running player keeps draining into negative
//! stamina while the speed stays at base.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::motion::{DEFAULT_BASE_SPEED, MotionState};

pub const DEFAULT_STAMINA_DURATION: f32 = 5.0;
pub const DEFAULT_RUN_SPEED: f32 = 6.0;
/// Regeneration runs this many times slower than draining.
pub const DEFAULT_REGEN_DIVISOR: f32 = 5.0;

/// Change of the `can_run` flag produced by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaTransition {
    /// `can_run` went from true to false.
    Exhausted,
    /// `can_run` went from false to true.
    Replenished,
}

/// Outcome of one [`StaminaGauge::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaminaStep {
    /// New fill ratio, when draining or regenerating touched `current`.
    pub fill: Option<f32>,
    pub transition: Option<StaminaTransition>,
}

#[derive(Component, Clone, Debug)]
pub struct StaminaGauge {
    /// Remaining stamina in seconds of running.
    pub current: f32,
    /// Maximum stamina in seconds.
    pub duration: f32,
    /// True whenever `current > 0`.
    pub can_run: bool,
    pub base_speed: f32,
    pub run_speed: f32,
    pub regen_divisor: f32,
    /// Require `can_run` before draining.
    pub gate_on_can_run: bool,
    /// Entity carrying the [`MotionState`] this gauge drives.
    pub player: Entity,
    /// Entity carrying the [`FillBar`](super::fillbar::FillBar) to update.
    pub bar: Option<Entity>,
    /// Last fill ratio written, kept even without a bar.
    pub last_fill: f32,
}

impl StaminaGauge {
    /// Create a full gauge for `player` with the default speeds.
    pub fn new(player: Entity, duration: f32) -> Self {
        Self {
            current: duration,
            duration,
            can_run: true,
            base_speed: DEFAULT_BASE_SPEED,
            run_speed: DEFAULT_RUN_SPEED,
            regen_divisor: DEFAULT_REGEN_DIVISOR,
            gate_on_can_run: false,
            player,
            bar: None,
            last_fill: 1.0,
        }
    }

    pub fn with_speeds(mut self, base_speed: f32, run_speed: f32) -> Self {
        self.base_speed = base_speed;
        self.run_speed = run_speed;
        self
    }

    pub fn with_regen_divisor(mut self, regen_divisor: f32) -> Self {
        self.regen_divisor = regen_divisor;
        self
    }

    pub fn with_bar(mut self, bar: Entity) -> Self {
        self.bar = Some(bar);
        self
    }

    pub fn gated_on_can_run(mut self, gate: bool) -> Self {
        self.gate_on_can_run = gate;
        self
    }

    /// Start from a given amount of stamina instead of full.
    pub fn with_current(mut self, current: f32) -> Self {
        self.current = current;
        self.can_run = current > 0.0;
        self.last_fill = self.fill_ratio();
        self
    }

    /// `current / duration`, unclamped.
    pub fn fill_ratio(&self) -> f32 {
        self.current / self.duration
    }

    /// Advance the gauge by `dt` seconds against the player's motion.
    ///
    /// Writes `motion.speed` and never touches `direction` or `running`.
    pub fn step(&mut self, motion: &mut MotionState, dt: f32) -> StaminaStep {
        let was_able = self.can_run;
        let mut fill = None;

        let drain_allowed = !self.gate_on_can_run || self.can_run;
        if motion.running && drain_allowed && motion.is_moving() {
            self.current -= dt;
            motion.speed = self.run_speed;
            fill = Some(self.fill_ratio());
        } else if !motion.running && self.current <= self.duration {
            self.current += dt / self.regen_divisor;
            motion.speed = self.base_speed;
            fill = Some(self.fill_ratio());
        }

        if self.current <= 0.0 {
            self.can_run = false;
            motion.speed = self.base_speed;
        } else if self.current > 0.0 {
            self.can_run = true;
        }

        if let Some(f) = fill {
            self.last_fill = f;
        }

        let transition = match (was_able, self.can_run) {
            (true, false) => Some(StaminaTransition::Exhausted),
            (false, true) => Some(StaminaTransition::Replenished),
            _ => None,
        };

        StaminaStep { fill, transition }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn gauge() -> StaminaGauge {
        StaminaGauge::new(Entity::PLACEHOLDER, DEFAULT_STAMINA_DURATION)
    }

    fn running_right() -> MotionState {
        let mut motion = MotionState::default();
        motion.running = true;
        motion.direction = Vector2 { x: 1.0, y: 0.0 };
        motion
    }

    #[test]
    fn test_new_gauge_is_full() {
        let g = gauge();
        assert!(approx_eq(g.current, 5.0));
        assert!(g.can_run);
        assert!(approx_eq(g.fill_ratio(), 1.0));
        assert!(approx_eq(g.last_fill, 1.0));
    }

    #[test]
    fn test_drain_one_second() {
        let mut g = gauge();
        let mut motion = running_right();
        let step = g.step(&mut motion, 1.0);

        assert!(approx_eq(g.current, 4.0));
        assert!(approx_eq(motion.speed, 6.0));
        assert!(approx_eq(step.fill.unwrap(), 0.8));
        assert_eq!(step.transition, None);
    }

    #[test]
    fn test_regenerate_five_seconds() {
        let mut g = gauge().with_current(4.0);
        let mut motion = MotionState::new(6.0);
        let step = g.step(&mut motion, 5.0);

        assert!(approx_eq(g.current, 5.0));
        assert!(approx_eq(motion.speed, 2.0));
        assert!(approx_eq(step.fill.unwrap(), 1.0));
    }

    #[test]
    fn test_exhausted_overrides_run_speed_same_frame() {
        let mut g = gauge().with_current(1.0);
        let mut motion = running_right();
        let step = g.step(&mut motion, 1.0);

        assert!(approx_eq(g.current, 0.0));
        assert!(!g.can_run);
        assert!(motion.running);
        assert!(approx_eq(motion.speed, 2.0));
        assert_eq!(step.transition, Some(StaminaTransition::Exhausted));
    }

    #[test]
    fn test_draining_ignores_can_run_by_default() {
        let mut g = gauge().with_current(0.0);
        assert!(!g.can_run);
        let mut motion = running_right();
        g.step(&mut motion, 0.5);

        assert!(approx_eq(g.current, -0.5));
        assert!(approx_eq(motion.speed, 2.0));
    }

    #[test]
    fn test_gate_on_can_run_stops_draining() {
        let mut g = gauge().with_current(0.0).gated_on_can_run(true);
        let mut motion = running_right();
        motion.speed = 6.0;
        let step = g.step(&mut motion, 0.5);

        assert!(approx_eq(g.current, 0.0));
        assert_eq!(step.fill, None);
        // Exhausted check still forces base speed.
        assert!(approx_eq(motion.speed, 2.0));
    }

    #[test]
    fn test_running_without_direction_leaves_everything() {
        let mut g = gauge().with_current(3.0);
        let mut motion = MotionState::new(6.0);
        motion.running = true;
        let step = g.step(&mut motion, 1.0);

        assert!(approx_eq(g.current, 3.0));
        assert!(approx_eq(motion.speed, 6.0));
        assert_eq!(step.fill, None);
    }

    #[test]
    fn test_regeneration_is_unclamped() {
        let mut g = gauge().with_current(4.9);
        let mut motion = MotionState::default();
        g.step(&mut motion, 1.0);

        assert!(approx_eq(g.current, 5.1));
        assert!(g.fill_ratio() > 1.0);

        // Above duration nothing regenerates any more.
        let step = g.step(&mut motion, 1.0);
        assert!(approx_eq(g.current, 5.1));
        assert_eq!(step.fill, None);
    }

    #[test]
    fn test_replenished_after_regenerating_from_zero() {
        let mut g = gauge().with_current(0.0);
        let mut motion = MotionState::default();
        let step = g.step(&mut motion, 0.5);

        assert!(g.can_run);
        assert!(approx_eq(g.current, 0.1));
        assert_eq!(step.transition, Some(StaminaTransition::Replenished));
    }

    #[test]
    fn test_regeneration_five_times_slower_than_drain() {
        let mut g = gauge();
        let mut motion = running_right();
        g.step(&mut motion, 1.5);
        assert!(approx_eq(g.fill_ratio(), 0.7));

        motion.running = false;
        g.step(&mut motion, 7.5);
        assert!(approx_eq(g.fill_ratio(), 1.0));
    }
}
