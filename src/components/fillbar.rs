//! UI fill bar component.
//!
//! A [`FillBar`] is the on-screen stamina indicator. The stamina system
//! writes `fill`; the render system draws `width * fill` of it. `fill` is
//! stored unclamped so a value above 1.0 is visible to callers, while
//! drawing clamps it to the bar's frame.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct FillBar {
    /// Fill ratio, nominally `0.0..=1.0`.
    pub fill: f32,
    /// Bar width in pixels when full.
    pub width: f32,
    /// Bar height in pixels.
    pub height: f32,
}

impl FillBar {
    /// Create a full bar of the given pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            fill: 1.0,
            width,
            height,
        }
    }

    /// Width in pixels of the filled part, clamped to the bar frame.
    pub fn filled_width(&self) -> f32 {
        self.width * self.fill.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bar_is_full() {
        let bar = FillBar::new(200.0, 12.0);
        assert_eq!(bar.fill, 1.0);
        assert_eq!(bar.filled_width(), 200.0);
    }

    #[test]
    fn test_filled_width_clamps_overfill_and_underflow() {
        let mut bar = FillBar::new(100.0, 10.0);
        bar.fill = 1.25;
        assert_eq!(bar.filled_width(), 100.0);
        bar.fill = -0.1;
        assert_eq!(bar.filled_width(), 0.0);
        bar.fill = 0.5;
        assert_eq!(bar.filled_width(), 50.0);
    }
}
