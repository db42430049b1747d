//! Fixed physics step accumulator.
//!
//! Logic runs once per rendered frame with a variable delta; movement runs
//! at a fixed rate. [`FixedStep`] accumulates frame time and reports how many
//! physics ticks are due.
use bevy_ecs::prelude::Resource;

/// Upper bound on physics ticks run in a single frame. Time beyond that is
/// dropped so a long stall cannot snowball into ever longer frames.
pub const MAX_FIXED_TICKS: u32 = 5;

#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedStep {
    /// Seconds per physics tick.
    pub step: f32,
    /// Unconsumed time carried to the next frame.
    pub accumulator: f32,
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Build from a tick rate in Hz.
    pub fn from_hz(hz: u32) -> Self {
        Self::new(1.0 / hz.max(1) as f32)
    }

    /// Add `dt` seconds and return how many ticks to run now.
    pub fn ticks(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_FIXED_TICKS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_FIXED_TICKS && self.accumulator >= self.step {
            self.accumulator %= self.step;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut fixed = FixedStep::new(0.5);
        assert_eq!(fixed.ticks(0.25), 0);
        assert_eq!(fixed.ticks(0.25), 1);
        assert_eq!(fixed.accumulator, 0.0);
    }

    #[test]
    fn test_several_ticks_in_one_long_frame() {
        let mut fixed = FixedStep::new(0.25);
        assert_eq!(fixed.ticks(0.75), 3);
    }

    #[test]
    fn test_caps_ticks_and_drops_backlog() {
        let mut fixed = FixedStep::new(0.25);
        assert_eq!(fixed.ticks(10.0), MAX_FIXED_TICKS);
        assert!(fixed.accumulator < fixed.step);
    }

    #[test]
    fn test_from_hz_guards_zero() {
        let fixed = FixedStep::from_hz(0);
        assert_eq!(fixed.step, 1.0);
        let fixed = FixedStep::from_hz(50);
        assert!((fixed.step - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut fixed = FixedStep::new(0.5);
        assert_eq!(fixed.ticks(-1.0), 0);
        assert_eq!(fixed.accumulator, 0.0);
    }
}
