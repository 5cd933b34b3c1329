//! Game settings
//!
//! Loaded once at startup from an optional JSON file. Missing fields take
//! their defaults; an unreadable or invalid file falls back to defaults.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CLOUD_HEIGHT_DIVISOR, COIN_SIZE_DIVISOR, TARGET_FPS};

/// Problems with a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("viewport {width}x{height} too small (minimum {min_width}x{min_height})")]
    InvalidViewport {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("fps must be positive")]
    InvalidFps,
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in world pixels
    pub width: u32,
    pub height: u32,
    /// Simulation steps per second
    pub fps: u32,
    /// RNG seed (None = from the clock at startup)
    pub seed: Option<u64>,
    /// Show the intro title before the game
    pub intro: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: TARGET_FPS,
            seed: None,
            intro: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Check that the viewport yields non-zero entity sizes
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width < COIN_SIZE_DIVISOR || self.height < CLOUD_HEIGHT_DIVISOR {
            return Err(SettingsError::InvalidViewport {
                width: self.width,
                height: self.height,
                min_width: COIN_SIZE_DIVISOR,
                min_height: CLOUD_HEIGHT_DIVISOR,
            });
        }
        if self.fps == 0 {
            return Err(SettingsError::InvalidFps);
        }
        Ok(())
    }

    /// Wall time per simulation step
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Configured seed, or one taken from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
