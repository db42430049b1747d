//! Event types and observers.
//!
//! Submodules:
//! - [`motion`] – the running latch of a player changed
//! - [`stamina`] – a stamina gauge became exhausted or replenished
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod motion;
pub mod stamina;
pub mod switchdebug;
