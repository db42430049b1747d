//! Stamina transition events.
//!
//! [`StaminaEvent`] is triggered by
//! [`stamina_system`](crate::systems::stamina::stamina_system) only on the
//! frame a gauge's `can_run` flag flips. Per-frame drain and regeneration do
//! not emit anything.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::stamina::StaminaTransition;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaminaEvent {
    /// Entity carrying the gauge.
    pub gauge: Entity,
    /// Player entity the gauge drives.
    pub player: Entity,
    pub transition: StaminaTransition,
}

/// Observer that logs stamina transitions.
pub fn stamina_event_observer(trigger: On<StaminaEvent>) {
    let event = trigger.event();
    match event.transition {
        StaminaTransition::Exhausted => {
            info!("Stamina exhausted for {:?}, running disabled", event.player)
        }
        StaminaTransition::Replenished => {
            info!("Stamina replenished for {:?}, running enabled", event.player)
        }
    }
}
