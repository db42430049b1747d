//! Game systems.
//!
//! Submodules overview
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`motioncontroller`] – turn input into direction and the running latch
//! - [`movement`] – integrate body positions on the fixed step
//! - [`render`] – draw the player, bars and debug overlay using Raylib
//! - [`stamina`] – drain/regenerate stamina and set player speed
//! - [`time`] – update simulation time and count fixed steps

pub mod input;
pub mod motioncontroller;
pub mod movement;
pub mod render;
pub mod stamina;
pub mod time;
