//! Scene setup and schedules.
//!
//! [`setup_world`] inserts the resources and observers the game needs and
//! spawns the scene: a player body, a stamina bar in the top-left corner and
//! a stamina gauge wired to both. [`logic_schedule`] and
//! [`physics_schedule`] hold the per-frame and per-fixed-step systems; the
//! binary adds input polling and rendering around them.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::fillbar::FillBar;
use crate::components::mapposition::MapPosition;
use crate::components::motion::MotionState;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::stamina::StaminaGauge;
use crate::events::motion::run_toggled_observer;
use crate::events::stamina::stamina_event_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::fixedstep::FixedStep;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::motioncontroller::motion_controller;
use crate::systems::movement::movement;
use crate::systems::stamina::stamina_system;

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 14.0;
const BAR_MARGIN: f32 = 16.0;

/// Entities created by [`spawn_scene`].
#[derive(Debug, Clone, Copy)]
pub struct SceneEntities {
    pub player: Entity,
    pub bar: Entity,
    pub gauge: Entity,
}

/// Insert resources and observers, then spawn the scene.
pub fn setup_world(world: &mut World, config: GameConfig) -> SceneEntities {
    let fixed = FixedStep::from_hz(config.fixed_hz);
    world.insert_resource(
        WorldTime::default()
            .with_time_scale(1.0)
            .with_fixed_delta(fixed.step),
    );
    world.insert_resource(fixed);
    world.insert_resource(InputState::default());
    world.insert_resource(config);

    world.spawn(Observer::new(stamina_event_observer));
    world.spawn(Observer::new(run_toggled_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers events.
    world.flush();

    spawn_scene(world)
}

/// Spawn player, bar and gauge using the [`GameConfig`] resource, or
/// defaults when it is absent.
pub fn spawn_scene(world: &mut World) -> SceneEntities {
    let config = world
        .get_resource::<GameConfig>()
        .cloned()
        .unwrap_or_default();

    let player = world
        .spawn((
            Player::default(),
            MotionState::new(config.base_speed),
            RigidBody::new(),
            MapPosition::default(),
        ))
        .id();

    let bar = world
        .spawn((
            FillBar::new(BAR_WIDTH, BAR_HEIGHT),
            ScreenPosition::new(BAR_MARGIN, BAR_MARGIN),
        ))
        .id();

    let gauge = world
        .spawn(
            StaminaGauge::new(player, config.stamina_duration)
                .with_speeds(config.base_speed, config.run_speed)
                .with_regen_divisor(config.regen_divisor)
                .gated_on_can_run(config.gate_on_can_run)
                .with_bar(bar),
        )
        .id();

    info!(
        "Scene spawned: player {:?}, bar {:?}, gauge {:?} ({}s stamina)",
        player, bar, gauge, config.stamina_duration
    );

    SceneEntities { player, bar, gauge }
}

/// Per-frame logic: motion controller, then stamina.
pub fn logic_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((motion_controller, stamina_system).chain());
    schedule
}

/// Per-fixed-step physics.
pub fn physics_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule
}
