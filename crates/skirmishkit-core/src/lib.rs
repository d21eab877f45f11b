//! # SkirmishKit Core
//!
//! Core types shared by the SkirmishKit crates:
//! - the error taxonomy used by every part builder
//! - the geometry kernel adapter (the [`Solid`] trait over `csgrs`)
//! - primitive solids and rigid transforms

pub mod error;
pub mod geometry;

pub use error::{BuildError, ConfigError, Error, GeometryError, Result};
pub use geometry::{fuse_all, Bounds, Placement, Shape, Solid};

/// Default number of segments used to approximate curves
pub const DEFAULT_SEGMENTS: usize = 24;
