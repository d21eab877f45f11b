//! # Dimension Calculator
//!
//! Pure arithmetic deriving working spans and offsets from raw part
//! parameters. Nothing here touches geometry.

use skirmishkit_core::ConfigError;

/// Distance a decorative slot is shifted off the tile center
pub const SLOT_TRANSLATION_RATIO: f64 = 0.143;

/// Slot thickness relative to the tile size
pub const SLOT_RADIUS_RATIO: f64 = 0.095;

/// Fraction trimmed off the tile size for mid length slots (≈66.7% remain)
pub const SLOT_MID_CUT_RATIO: f64 = 0.333;

/// Fraction trimmed off the tile size for short slots (≈33.3% remain)
pub const SLOT_SHORT_CUT_RATIO: f64 = 0.666;

/// Usable span along one axis after removing inset and chamfer on both ends
pub fn usable_span(raw: f64, inset: f64, chamfer: f64) -> f64 {
    raw - 2.0 * inset - 2.0 * chamfer
}

/// Z offset for a feature of height `feature` sitting flush on a body of height `body`
pub fn flush_offset(body: f64, feature: f64) -> f64 {
    body / 2.0 + feature / 2.0
}

/// Z offset for a feature of height `feature` recessed into the top of `body`
pub fn recessed_offset(body: f64, feature: f64) -> f64 {
    body - flush_offset(body, feature)
}

/// Distance from center to a corner feature of `radius`, kept `feature_inset` from the edge
pub fn corner_offset(span: f64, inset: f64, radius: f64, feature_inset: f64) -> f64 {
    (span - inset * 2.0) / 2.0 - radius - feature_inset
}

/// The four quadrant mirrors of `(x, y)`: +x+y, -x+y, -x-y, +x-y
pub fn quadrant_points(x: f64, y: f64) -> [(f64, f64); 4] {
    [(x, y), (-x, y), (-x, -y), (x, -y)]
}

/// Number of whole pitches fitting in `span`, never negative
pub fn instance_count(span: f64, pitch: f64) -> usize {
    if pitch <= 0.0 || span <= 0.0 || !span.is_finite() {
        return 0;
    }
    (span / pitch).floor() as usize
}

/// Fail when `size` would meet or exceed the `housing_size` it is cut from
pub fn ensure_fits(
    feature: &str,
    size: f64,
    housing: &str,
    housing_size: f64,
) -> Result<(), ConfigError> {
    if size >= housing_size {
        return Err(ConfigError::FeatureTooLarge {
            feature: feature.to_string(),
            size,
            housing: housing.to_string(),
            housing_size,
        });
    }
    Ok(())
}

/// Fail unless `value` is finite and strictly positive
pub fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::invalid(
            name,
            format!("must be positive and finite, got {value}"),
        ));
    }
    Ok(())
}

/// Fail unless `value` is finite and not negative
pub fn ensure_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            name,
            format!("must be zero or positive, got {value}"),
        ));
    }
    Ok(())
}

/// Decorative slot sizes cut into a roof tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSlots {
    /// Offset of the inner slot pair from the tile center (per axis)
    pub translation: f64,
    /// Slot thickness
    pub radius: f64,
    /// Length of the two slots flanking the center slot
    pub length_md: f64,
    /// Length of the two outermost slots
    pub length_sm: f64,
}

impl TileSlots {
    /// Slot sizes for a tile of `tile_size`
    pub fn for_tile(tile_size: f64) -> Self {
        Self {
            translation: tile_size * SLOT_TRANSLATION_RATIO,
            radius: tile_size * SLOT_RADIUS_RATIO,
            length_md: tile_size - tile_size * SLOT_MID_CUT_RATIO,
            length_sm: tile_size - tile_size * SLOT_SHORT_CUT_RATIO,
        }
    }
}
