//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. WASD and the arrow
//! keys both steer; the right mouse button is the run modifier.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Physical control a [`BoolState`] is polled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBinding {
    Key(KeyboardKey),
    Mouse(MouseButton),
}

#[derive(Debug, Clone, Copy)]
/// Boolean button state with an associated binding.
pub struct BoolState {
    /// Whether the control is currently held this frame.
    pub active: bool,
    /// Whether the control was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the control was just released this frame.
    pub just_released: bool,

    /// The key or mouse button bound to this action.
    pub binding: InputBinding,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(InputBinding::Key(KeyboardKey::KEY_NULL))
    }
}

impl BoolState {
    /// Idle state for a binding.
    pub fn bound(binding: InputBinding) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            binding,
        }
    }

    /// Overwrite all three flags with this frame's poll.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // WASD
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    /// Run modifier.
    pub action_run: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        use InputBinding::{Key, Mouse};
        Self {
            maindirection_up: BoolState::bound(Key(KeyboardKey::KEY_W)),
            maindirection_left: BoolState::bound(Key(KeyboardKey::KEY_A)),
            maindirection_down: BoolState::bound(Key(KeyboardKey::KEY_S)),
            maindirection_right: BoolState::bound(Key(KeyboardKey::KEY_D)),
            secondarydirection_up: BoolState::bound(Key(KeyboardKey::KEY_UP)),
            secondarydirection_down: BoolState::bound(Key(KeyboardKey::KEY_DOWN)),
            secondarydirection_left: BoolState::bound(Key(KeyboardKey::KEY_LEFT)),
            secondarydirection_right: BoolState::bound(Key(KeyboardKey::KEY_RIGHT)),
            action_run: BoolState::bound(Mouse(MouseButton::MOUSE_BUTTON_RIGHT)),
            mode_debug: BoolState::bound(Key(KeyboardKey::KEY_F11)),
        }
    }
}

impl InputState {
    pub fn up_held(&self) -> bool {
        self.maindirection_up.active || self.secondarydirection_up.active
    }

    pub fn down_held(&self) -> bool {
        self.maindirection_down.active || self.secondarydirection_down.active
    }

    pub fn left_held(&self) -> bool {
        self.maindirection_left.active || self.secondarydirection_left.active
    }

    pub fn right_held(&self) -> bool {
        self.maindirection_right.active || self.secondarydirection_right.active
    }

    /// True if any of the eight direction keys is held.
    pub fn any_direction_held(&self) -> bool {
        self.up_held() || self.down_held() || self.left_held() || self.right_held()
    }

    /// Mutable access to every binding, in a fixed order, for polling.
    pub fn bindings_mut(&mut self) -> [&mut BoolState; 10] {
        [
            &mut self.maindirection_up,
            &mut self.maindirection_left,
            &mut self.maindirection_down,
            &mut self.maindirection_right,
            &mut self.secondarydirection_up,
            &mut self.secondarydirection_down,
            &mut self.secondarydirection_left,
            &mut self.secondarydirection_right,
            &mut self.action_run,
            &mut self.mode_debug,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.binding, InputBinding::Key(KeyboardKey::KEY_NULL));
    }

    #[test]
    fn test_inputstate_default_bindings() {
        let input = InputState::default();
        assert_eq!(
            input.maindirection_up.binding,
            InputBinding::Key(KeyboardKey::KEY_W)
        );
        assert_eq!(
            input.maindirection_left.binding,
            InputBinding::Key(KeyboardKey::KEY_A)
        );
        assert_eq!(
            input.secondarydirection_right.binding,
            InputBinding::Key(KeyboardKey::KEY_RIGHT)
        );
        assert_eq!(
            input.action_run.binding,
            InputBinding::Mouse(MouseButton::MOUSE_BUTTON_RIGHT)
        );
    }

    #[test]
    fn test_inputstate_default_nothing_held() {
        let mut input = InputState::default();
        assert!(!input.any_direction_held());
        assert!(input.bindings_mut().iter().all(|b| !b.active));
    }

    #[test]
    fn test_either_key_of_a_pair_counts_as_held() {
        let mut input = InputState::default();
        input.secondarydirection_left.active = true;
        assert!(input.left_held());
        assert!(input.any_direction_held());

        input.secondarydirection_left.active = false;
        input.maindirection_left.active = true;
        assert!(input.left_held());
        assert!(!input.right_held());
    }

    #[test]
    fn test_run_modifier_alone_is_not_a_direction() {
        let mut input = InputState::default();
        input.action_run.active = true;
        assert!(!input.any_direction_held());
    }
}
