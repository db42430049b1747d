//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `fixedstep` – accumulator deciding how many physics ticks run per frame
//! - `gameconfig` – INI-backed window, speed, stamina and physics settings
//! - `input` – per-frame keyboard/mouse state of the controls the game uses
//! - `worldtime` – simulation time, frame delta and fixed delta
pub mod debugmode;
pub mod fixedstep;
pub mod gameconfig;
pub mod input;
pub mod worldtime;
