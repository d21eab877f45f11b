//! # SkirmishKit
//!
//! Parametric terrain pieces for tabletop wargaming, built with
//! constructive solid geometry and exported as STL:
//! - Sloped bunkers with cut or detailed arch panels along every wall
//! - Flat roofs with tiles, hatches, hatch cuts and magnet holes
//! - Stand-alone hatches
//!
//! ## Architecture
//!
//! SkirmishKit is organized as a workspace with multiple crates:
//!
//! 1. **skirmishkit-core** - Solid kernel, primitives, placements, errors
//! 2. **skirmishkit-designer** - Perimeter layout engine and the part builders
//! 3. **skirmishkit-settings** - Configuration files and export options
//! 4. **skirmishkit** - STL export and the command line binary

pub mod export;

pub use skirmishkit_core::{
    BuildError, ConfigError, Error, GeometryError, Placement, Shape, Solid,
};
pub use skirmishkit_designer::{
    Bunker, BunkerParams, FlatRoof, FlatRoofParams, Hatch, HatchParams, KeepList, Part,
    PartBuilder, SeriesLayout, SeriesParams, SlotId,
};
pub use skirmishkit_settings::{Config, ExportSettings, SettingsError};

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// One STL file written by [`export_parts`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedPart {
    pub name: &'static str,
    pub path: PathBuf,
    pub triangles: usize,
}

/// Prepare, build and write one part
fn export_part<B: PartBuilder>(
    mut part: Part<B>,
    export: &ExportSettings,
) -> anyhow::Result<ExportedPart> {
    let name = part.name();
    part.make()
        .with_context(|| format!("Failed to prepare {name}"))?;
    let shape = part
        .build()
        .with_context(|| format!("Failed to build {name}"))?;
    let path = export.path_for(name);
    let triangles = export::write_stl_file(shape, name, &path)?;
    info!("{} -> {} ({} triangles)", name, path.display(), triangles);
    Ok(ExportedPart {
        name,
        path,
        triangles,
    })
}

/// Build every part enabled in `config` and write it as STL
pub fn export_parts(config: &Config) -> anyhow::Result<Vec<ExportedPart>> {
    let export = &config.export;
    let mut written = Vec::new();
    if export.parts.bunker {
        written.push(export_part(Bunker::new(config.bunker.clone()), export)?);
    }
    if export.parts.roof {
        written.push(export_part(FlatRoof::new(config.effective_roof()), export)?);
    }
    if export.parts.hatch {
        written.push(export_part(Hatch::new(config.hatch.clone()), export)?);
    }
    if written.is_empty() {
        tracing::warn!("No parts enabled in [export.parts]; nothing written");
    }
    Ok(written)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
