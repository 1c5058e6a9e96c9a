use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

pub const CONFIG_FILE: &str = "fireworks_config.toml";

static CONFIG: OnceLock<Mutex<FireworksConfig>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get a copy of the current configuration, loading it from
/// [`CONFIG_FILE`] on first use. Falls back to defaults when the file is
/// missing or broken.
pub fn get_config() -> FireworksConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = FireworksConfig::load_from_file(CONFIG_FILE).unwrap_or_else(|e| {
            log::warn!("Using default fireworks config: {e}");
            FireworksConfig::default()
        });
        Mutex::new(config)
    });
    lock(config_mutex).clone()
}

pub fn reload_config() -> Result<(), ConfigError> {
    let new_config = FireworksConfig::load_from_file(CONFIG_FILE)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *lock(config_mutex) = new_config;
    Ok(())
}

fn lock(config: &Mutex<FireworksConfig>) -> std::sync::MutexGuard<'_, FireworksConfig> {
    // the guarded value is plain data, a poisoned lock still holds a usable copy
    config.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    pub show: ShowConfig,
    pub explosion: ExplosionConfig,
    pub emitter: EmitterConfig,
    pub launch: LaunchConfig,
    pub bounds: BoundsConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    pub seed: u64,
    pub number_of_fireworks: usize,
    pub bursts_per_firework: usize,
    pub burst_size: f64,
    /// Total emitter duration in seconds.
    pub lifetime: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub minimum_size: f64,
    pub maximum_size: f64,
    pub minimum_life: f64,
    pub maximum_life: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub speed: f64,
    pub particle_pixel_size: f64,
    pub sphere_radius: f64,
    pub emission_rate: f64,
    pub looping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    /// Emitter origin in the launch frame, meters east/north/up.
    pub emitter_location: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in the launch frame.
    pub offset: [f64; 3],
    /// Free-flight speed in meters per second.
    pub move_speed: f32,
    /// Longest fly-to duration in seconds.
    pub flight_duration: f32,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            seed: RANDOM_SEED,
            number_of_fireworks: NUMBER_OF_FIREWORKS,
            bursts_per_firework: BURSTS_PER_FIREWORK,
            burst_size: BURST_SIZE,
            lifetime: FIREWORK_LIFETIME,
        }
    }
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            minimum_size: MINIMUM_EXPLOSION_SIZE,
            maximum_size: MAXIMUM_EXPLOSION_SIZE,
            minimum_life: MINIMUM_PARTICLE_LIFE,
            maximum_life: MAXIMUM_PARTICLE_LIFE,
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            speed: PARTICLE_SPEED,
            particle_pixel_size: PARTICLE_PIXEL_SIZE,
            sphere_radius: EMITTER_SPHERE_RADIUS,
            emission_rate: 0.0,
            looping: true,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            longitude: LAUNCH_LONGITUDE,
            latitude: LAUNCH_LATITUDE,
            height: 0.0,
            emitter_location: EMITTER_INITIAL_LOCATION,
        }
    }
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            x: OFFSET_BOUNDS[0],
            y: OFFSET_BOUNDS[1],
            z: OFFSET_BOUNDS[2],
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: CAMERA_OFFSET,
            move_speed: 50.0,
            flight_duration: 3.0,
        }
    }
}

impl BoundsConfig {
    pub fn x_range(&self) -> Range<f64> {
        self.x[0]..self.x[1]
    }

    pub fn y_range(&self) -> Range<f64> {
        self.y[0]..self.y[1]
    }

    pub fn z_range(&self) -> Range<f64> {
        self.z[0]..self.z[1]
    }
}

impl FireworksConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
