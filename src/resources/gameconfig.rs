//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 450
//! target_fps = 60
//! vsync = true
//!
//! [player]
//! base_speed = 2.0
//! run_speed = 6.0
//! pixels_per_unit = 32.0
//!
//! [stamina]
//! duration = 5.0
//! regen_divisor = 5.0
//! gate_on_can_run = false
//!
//! [physics]
//! fixed_hz = 50
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::motion::DEFAULT_BASE_SPEED;
use crate::components::stamina::{
    DEFAULT_REGEN_DIVISOR, DEFAULT_RUN_SPEED, DEFAULT_STAMINA_DURATION,
};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_PIXELS_PER_UNIT: f32 = 32.0;
const DEFAULT_FIXED_HZ: u32 = 50;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Window settings, player speeds, stamina tuning and the physics rate.
/// Values missing from the file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Walking speed in world units per second.
    pub base_speed: f32,
    /// Running speed in world units per second.
    pub run_speed: f32,
    /// Pixels drawn per world unit.
    pub pixels_per_unit: f32,
    /// Seconds of running on a full gauge.
    pub stamina_duration: f32,
    /// Regeneration is this many times slower than draining.
    pub regen_divisor: f32,
    /// Refuse to drain (and so to run) while the gauge is exhausted.
    pub gate_on_can_run: bool,
    /// Physics ticks per second.
    pub fixed_hz: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            base_speed: DEFAULT_BASE_SPEED,
            run_speed: DEFAULT_RUN_SPEED,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            stamina_duration: DEFAULT_STAMINA_DURATION,
            regen_divisor: DEFAULT_REGEN_DIVISOR,
            gate_on_can_run: false,
            fixed_hz: DEFAULT_FIXED_HZ,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, speed={}/{}, stamina={}s, fixed_hz={}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.base_speed,
            self.run_speed,
            self.stamina_duration,
            self.fixed_hz
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [window] section
        if let Some(width) = config.getuint("window", "width")? {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height")? {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync")? {
            self.vsync = vsync;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "base_speed")? {
            self.base_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("player", "run_speed")? {
            self.run_speed = speed as f32;
        }
        if let Some(ppu) = config.getfloat("player", "pixels_per_unit")? {
            self.pixels_per_unit = ppu as f32;
        }

        // [stamina] section
        if let Some(duration) = config.getfloat("stamina", "duration")? {
            if duration <= 0.0 {
                return Err(format!("stamina duration must be positive, got {}", duration));
            }
            self.stamina_duration = duration as f32;
        }
        if let Some(divisor) = config.getfloat("stamina", "regen_divisor")? {
            if divisor <= 0.0 {
                return Err(format!("regen_divisor must be positive, got {}", divisor));
            }
            self.regen_divisor = divisor as f32;
        }
        if let Some(gate) = config.getbool("stamina", "gate_on_can_run")? {
            self.gate_on_can_run = gate;
        }

        // [physics] section
        if let Some(hz) = config.getuint("physics", "fixed_hz")? {
            self.fixed_hz = hz as u32;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [player] section
        config.set("player", "base_speed", Some(self.base_speed.to_string()));
        config.set("player", "run_speed", Some(self.run_speed.to_string()));
        config.set(
            "player",
            "pixels_per_unit",
            Some(self.pixels_per_unit.to_string()),
        );

        // [stamina] section
        config.set(
            "stamina",
            "duration",
            Some(self.stamina_duration.to_string()),
        );
        config.set(
            "stamina",
            "regen_divisor",
            Some(self.regen_divisor.to_string()),
        );
        config.set(
            "stamina",
            "gate_on_can_run",
            Some(self.gate_on_can_run.to_string()),
        );

        // [physics] section
        config.set("physics", "fixed_hz", Some(self.fixed_hz.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gameplay_constants() {
        let config = GameConfig::new();
        assert_eq!(config.base_speed, 2.0);
        assert_eq!(config.run_speed, 6.0);
        assert_eq!(config.stamina_duration, 5.0);
        assert_eq!(config.regen_divisor, 5.0);
        assert!(!config.gate_on_can_run);
        assert_eq!(config.window_size(), (800, 450));
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[player]\nrun_speed = 8.5\n\n[stamina]\nduration = 3\ngate_on_can_run = true\n",
            )
            .unwrap();
        assert_eq!(config.run_speed, 8.5);
        assert_eq!(config.stamina_duration, 3.0);
        assert!(config.gate_on_can_run);
        // untouched
        assert_eq!(config.base_speed, 2.0);
        assert_eq!(config.fixed_hz, 50);
    }

    #[test]
    fn test_load_from_str_rejects_bad_values() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[window]\nwidth = wide\n").is_err());
        assert!(config.load_from_str("[stamina]\nduration = 0\n").is_err());
        assert!(config.load_from_str("[stamina]\nregen_divisor = -1\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut config = GameConfig::with_path("/nonexistent/dir/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.stamina_duration, 5.0);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "sprintgauge_config_test_{}.ini",
            std::process::id()
        ));
        let mut saved = GameConfig::with_path(&path);
        saved.run_speed = 7.0;
        saved.fixed_hz = 30;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.run_speed, 7.0);
        assert_eq!(loaded.fixed_hz, 30);
        assert_eq!(loaded.window_width, saved.window_width);
    }
}
