//! Sprint gauge main entry point.
//!
//! A top-down 2D walker with a stamina-limited run, written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Controls
//!
//! - WASD or arrow keys to walk
//! - hold the right mouse button while walking to run
//! - F11 toggles the debug overlay
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or the `--config` path), falling back to defaults
//! 2. Initialize the raylib window and the ECS world
//! 3. Each frame: poll input, run logic (motion, stamina), run as many fixed
//!    physics steps as are due, then render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use sprintgauge::game;
use sprintgauge::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use sprintgauge::systems::input::update_input_state;
use sprintgauge::systems::motioncontroller::motion_controller;
use sprintgauge::systems::render::render_system;
use sprintgauge::systems::time::{fixed_ticks, update_world_time};

/// Sprint gauge
#[derive(Parser)]
#[command(version, about = "Walk with WASD/arrows, hold the right mouse button to run.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);

    if cli.write_default_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", cli.config.display());
        return;
    }

    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Sprint Gauge");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup_world(&mut world, config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut logic = game::logic_schedule();
    logic.add_systems(update_input_state.before(motion_controller));
    let mut physics = game::physics_schedule();
    let mut render = Schedule::default();
    render.add_systems(render_system);

    logic
        .initialize(&mut world)
        .expect("Failed to initialize logic schedule");

    info!("Entering main loop");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        logic.run(&mut world);

        for _ in 0..fixed_ticks(&mut world) {
            physics.run(&mut world);
        }

        render.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
