// Domain layer - cells, colors, the colorized rule
pub mod domain;

// Application layer - stepping loop and simulation facade
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, DEAD, GridStore, Rgb};
pub use application::{Simulation, StepScheduler};
pub use config::AppConfig;
pub use error::{ColorError, ConfigError};
