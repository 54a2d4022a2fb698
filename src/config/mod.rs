//! Configuration loading and management for the engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: the scheduling settings the generator honors and the
//! defaults the pay calculator falls back on.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Lunch break: {} minutes", config.scheduling().lunch_break_duration_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationDefaults, EngineConfig, SchedulingSettings};
