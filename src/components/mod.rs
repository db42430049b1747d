//! ECS components for entities.
//!
//! Submodules overview:
//! - [`fillbar`] – on-screen bar showing a fill ratio
//! - [`mapposition`] – world-space position of a body
//! - [`motion`] – direction, speed and running latch produced from input
//! - [`player`] – marker for the keyboard-driven entity
//! - [`rigidbody`] – kinematic body moved on the fixed step
//! - [`screenposition`] – screen-space position for UI elements
//! - [`stamina`] – stamina gauge gating the run speed

pub mod fillbar;
pub mod mapposition;
pub mod motion;
pub mod player;
pub mod rigidbody;
pub mod screenposition;
pub mod stamina;
