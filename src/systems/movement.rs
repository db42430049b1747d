//! Fixed-step movement integration.
//!
//! Runs once per physics tick. Every entity with a [`MotionState`] must also
//! carry a [`RigidBody`] and a [`MapPosition`]; the body's velocity is set to
//! `direction * speed` and integrated over
//! [`WorldTime::fixed_delta`](crate::resources::worldtime::WorldTime).

use std::fmt;

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::motion::MotionState;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// A moving entity has no body to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingBodyError {
    pub entity: Entity,
}

impl fmt::Display for MissingBodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} has a MotionState but no RigidBody/MapPosition",
            self.entity
        )
    }
}

impl std::error::Error for MissingBodyError {}

pub fn movement(
    time: Res<WorldTime>,
    mut query: Query<(
        Entity,
        &MotionState,
        Option<&mut RigidBody>,
        Option<&mut MapPosition>,
    )>,
) -> Result<(), BevyError> {
    for (entity, motion, body, position) in query.iter_mut() {
        let (Some(mut body), Some(mut position)) = (body, position) else {
            return Err(MissingBodyError { entity }.into());
        };
        body.velocity = motion.velocity();
        if body.frozen {
            continue;
        }
        let delta = body.displacement(time.fixed_delta);
        position.pos = position.pos + delta;
    }
    Ok(())
}
