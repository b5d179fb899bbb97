//! Startup configuration.
//!
//! Loaded from TOML; any missing section falls back to its default.
//! Only the framerate changes after startup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::scheduler::MAX_FRAMERATE;
use crate::domain::Rgb;
use crate::error::ConfigError;

/// Largest side length the canvas texture supports
pub const MAX_GRID_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub framerate: FramerateConfig,
    pub simulation: SimulationConfig,
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square grid
    pub size: usize,
    /// On-screen pixels per cell
    pub pixel_size: f32,
    /// Color drawn for dead cells
    pub dead_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramerateConfig {
    pub min: u32,
    pub max: u32,
    /// Slider notch size
    pub step: u32,
    pub initial: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Compute generations with rayon
    pub parallel: bool,
    /// Live-cell probability for the Random button
    pub random_density: f64,
}

/// Brush colors offered by the picker; the first one is selected at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 75,
            pixel_size: 10.0,
            dead_color: "#ffffff".to_string(),
        }
    }
}

impl Default for FramerateConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 121,
            step: 15,
            initial: 1,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            random_density: 0.3,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let colors = [
            "#000000", "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4",
            "#46f0f0",
        ];
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.grid.size == 0 || self.grid.size > MAX_GRID_SIZE {
            return invalid("grid.size must be between 1 and 4096");
        }
        if self.grid.pixel_size.is_nan() || self.grid.pixel_size <= 0.0 {
            return invalid("grid.pixel_size must be > 0");
        }
        if self.framerate.min == 0 {
            return invalid("framerate.min must be >= 1");
        }
        if self.framerate.min > self.framerate.max {
            return invalid("framerate.min cannot exceed framerate.max");
        }
        if self.framerate.max > MAX_FRAMERATE {
            return invalid("framerate.max cannot exceed 1000");
        }
        if self.framerate.step == 0 {
            return invalid("framerate.step must be > 0");
        }
        if !(0.0..=1.0).contains(&self.simulation.random_density) {
            return invalid("simulation.random_density must be between 0 and 1");
        }
        if self.palette.colors.is_empty() {
            return invalid("palette.colors cannot be empty");
        }
        self.dead_color()?;
        self.brush_palette()?;
        Ok(())
    }

    pub fn dead_color(&self) -> Result<Rgb, ConfigError> {
        Ok(self.grid.dead_color.parse()?)
    }

    pub fn brush_palette(&self) -> Result<Vec<Rgb>, ConfigError> {
        self.palette
            .colors
            .iter()
            .map(|c| c.parse::<Rgb>().map_err(ConfigError::from))
            .collect()
    }
}
