//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Only the
//! debug toggle is turned into an event; gameplay systems read the resource.
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputBinding, InputState};

/// `(down, pressed, released)` for a binding this frame.
fn poll(rl: &raylib::RaylibHandle, binding: InputBinding) -> (bool, bool, bool) {
    match binding {
        InputBinding::Key(key) => (
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        ),
        InputBinding::Mouse(button) => (
            rl.is_mouse_button_down(button),
            rl.is_mouse_button_pressed(button),
            rl.is_mouse_button_released(button),
        ),
    }
}

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.bindings_mut() {
        let (down, pressed, released) = poll(&rl, state.binding);
        state.update(down, pressed, released);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
