//! Stamina gauge system.
//!
//! Steps every [`StaminaGauge`] once per frame with the variable frame delta,
//! writes the resulting fill ratio into the gauge's [`FillBar`] and triggers
//! a [`StaminaEvent`] when `can_run` flips.
//!
//! A gauge whose player (or bar, when one is set) no longer exists is a
//! broken scene; the system returns an error and the schedule's error
//! handler aborts.

use std::fmt;

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;

use crate::components::fillbar::FillBar;
use crate::components::motion::MotionState;
use crate::components::stamina::StaminaGauge;
use crate::events::stamina::StaminaEvent;
use crate::resources::worldtime::WorldTime;

/// A gauge points at an entity that lacks the component it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeTargetError {
    MissingPlayer { gauge: Entity, player: Entity },
    MissingBar { gauge: Entity, bar: Entity },
}

impl fmt::Display for GaugeTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeTargetError::MissingPlayer { gauge, player } => write!(
                f,
                "stamina gauge {:?} targets {:?}, which has no MotionState",
                gauge, player
            ),
            GaugeTargetError::MissingBar { gauge, bar } => write!(
                f,
                "stamina gauge {:?} targets bar {:?}, which has no FillBar",
                gauge, bar
            ),
        }
    }
}

impl std::error::Error for GaugeTargetError {}

pub fn stamina_system(
    time: Res<WorldTime>,
    mut gauges: Query<(Entity, &mut StaminaGauge)>,
    mut motions: Query<&mut MotionState>,
    mut bars: Query<&mut FillBar>,
    mut commands: Commands,
) -> Result<(), BevyError> {
    for (entity, mut gauge) in gauges.iter_mut() {
        let player = gauge.player;
        let mut motion = motions
            .get_mut(player)
            .map_err(|_| GaugeTargetError::MissingPlayer {
                gauge: entity,
                player,
            })?;

        let step = gauge.step(&mut motion, time.delta);

        if let (Some(fill), Some(bar_entity)) = (step.fill, gauge.bar) {
            let mut bar = bars
                .get_mut(bar_entity)
                .map_err(|_| GaugeTargetError::MissingBar {
                    gauge: entity,
                    bar: bar_entity,
                })?;
            bar.fill = fill;
        }

        if let Some(transition) = step.transition {
            commands.trigger(StaminaEvent {
                gauge: entity,
                player,
                transition,
            });
        }
    }
    Ok(())
}
