//! Configuration file for a SkirmishKit run
//!
//! One file carries the parameters of every part kind plus the export
//! options. Sections that are missing from the file fall back to the part
//! defaults, so a config naming a single value is valid.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use skirmishkit_designer::{BunkerParams, FlatRoofParams, HatchParams};
use std::path::{Path, PathBuf};

/// Fewest polygon segments a round feature may use
pub const MIN_SEGMENTS: usize = 3;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Which parts an export run writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartToggles {
    pub bunker: bool,
    pub roof: bool,
    pub hatch: bool,
}

impl Default for PartToggles {
    fn default() -> Self {
        Self {
            bunker: true,
            roof: true,
            hatch: false,
        }
    }
}

/// Export options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory STL files are written to
    pub output_directory: PathBuf,
    /// File names are `<file_stem>-<part>.stl`
    pub file_stem: String,
    pub parts: PartToggles,
    /// Size the roof to sit on the configured bunker
    pub roof_on_bunker: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            file_stem: "skirmish".to_string(),
            parts: PartToggles::default(),
            roof_on_bunker: true,
        }
    }
}

impl ExportSettings {
    /// Output path for one part
    pub fn path_for(&self, part: &str) -> PathBuf {
        self.output_directory
            .join(format!("{}-{}.stl", self.file_stem, part.to_lowercase()))
    }
}

/// Complete run configuration
///
/// Aggregates all part sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub bunker: BunkerParams,
    pub roof: FlatRoofParams,
    pub hatch: HatchParams,
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location (`<config dir>/skirmishkit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("skirmishkit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| SettingsError::LoadError("no config directory on this platform".into()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Roof parameters to build
    ///
    /// With `roof_on_bunker` set, the footprint, wall and panel fields are
    /// taken from the bunker so the hatches line up with its interior.
    pub fn effective_roof(&self) -> FlatRoofParams {
        if !self.export.roof_on_bunker {
            return self.roof.clone();
        }
        let fitted = self.bunker.matching_roof();
        FlatRoofParams {
            length: fitted.length,
            width: fitted.width,
            inset: fitted.inset,
            wall_width: fitted.wall_width,
            panel_length: fitted.panel_length,
            panel_padding: fitted.panel_padding,
            interior: fitted.interior,
            ..self.roof.clone()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.export.file_stem.trim().is_empty() {
            return Err(SettingsError::invalid(
                "export.file_stem",
                "must not be empty",
            ));
        }

        for (section, segments) in [
            ("bunker", self.bunker.segments),
            ("roof", self.roof.segments),
            ("hatch", self.hatch.segments),
        ] {
            if segments < MIN_SEGMENTS {
                return Err(SettingsError::invalid(
                    format!("{section}.segments"),
                    format!("must be at least {MIN_SEGMENTS}, got {segments}"),
                ));
            }
        }

        self.bunker
            .validate()
            .map_err(|e| SettingsError::part("bunker", e))?;
        self.effective_roof()
            .validate()
            .map_err(|e| SettingsError::part("roof", e))?;
        self.hatch
            .validate()
            .map_err(|e| SettingsError::part("hatch", e))?;

        Ok(())
    }
}
