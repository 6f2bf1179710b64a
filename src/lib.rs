// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Generation stepping and coordination
pub mod application;

// Infrastructure layer - Terminal output
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::Simulation;
pub use error::LifeError;
