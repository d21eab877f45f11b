//! Error handling for SkirmishKit
//!
//! Provides the error taxonomy shared by every part builder:
//! - Configuration errors (invalid or inconsistent parameters)
//! - Build errors (two-phase protocol violations)
//! - Geometry errors (degenerate primitive input)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised while validating a part's parameters. Always fatal for the part
/// being prepared.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Edge treatment mode is not `chamfer` or `fillet`
    #[error("Unrecognized edge treatment '{mode}' (expected 'chamfer' or 'fillet')")]
    UnknownEdgeTreatment {
        /// The mode string that was supplied.
        mode: String,
    },

    /// A feature dimension equals or exceeds the body dimension it modifies
    #[error("{feature} {size} >= {housing} {housing_size}")]
    FeatureTooLarge {
        /// Name of the feature parameter (e.g. `roof_chamfer`).
        feature: String,
        /// Size of the feature.
        size: f64,
        /// Name of the housing dimension (e.g. `roof height`).
        housing: String,
        /// Size of the housing dimension.
        housing_size: f64,
    },

    /// A parameter holds a value outside its valid range
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The parameter name.
        name: String,
        /// Why the value is rejected.
        reason: String,
    },

    /// Body dimensions are zero, negative or not finite
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Build error type
///
/// Represents violations of the make-then-build protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `build` was called before `make`
    #[error("Make has not been called for {part}")]
    NotPrepared {
        /// The part kind that was being built.
        part: String,
    },
}

/// Geometry error type
///
/// Raised when a primitive is asked to build a degenerate solid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A loft ring has fewer than three points
    #[error("Profile ring {index} has {count} points, at least 3 required")]
    RingTooSmall {
        /// Index of the offending ring.
        index: usize,
        /// Number of points it holds.
        count: usize,
    },

    /// Loft rings do not share the same point count
    #[error("Profile rings differ in size: expected {expected}, got {actual}")]
    RingMismatch {
        /// Point count of the first ring.
        expected: usize,
        /// Point count of the offending ring.
        actual: usize,
    },

    /// A loft needs at least two rings
    #[error("A loft needs at least two rings, got {0}")]
    TooFewRings(usize),
}

/// Main error type for SkirmishKit
///
/// A unified error type wrapping every layer. This is the error returned by
/// the part builders' public API.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Build sequencing error
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a sequencing error
    pub fn is_not_prepared(&self) -> bool {
        matches!(self, Error::Build(BuildError::NotPrepared { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
