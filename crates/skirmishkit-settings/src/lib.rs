//! SkirmishKit Settings Crate
//!
//! Loads and saves the configuration file that drives an export run.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, PartToggles, MIN_SEGMENTS};
pub use error::{SettingsError, SettingsResult};
