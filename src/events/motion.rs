//! Run toggle events.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Triggered by the motion controller when an entity's `running` latch
/// changes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToggledEvent {
    pub entity: Entity,
    pub running: bool,
}

pub fn run_toggled_observer(trigger: On<RunToggledEvent>) {
    let event = trigger.event();
    debug!("{:?} running = {}", event.entity, event.running);
}
