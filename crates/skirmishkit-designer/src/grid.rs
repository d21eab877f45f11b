//! # Rectangular Grid Helper
//!
//! Lays non-rotated copies of a template on a centered rectangular grid.
//! Rows step along X, columns step along Y.

use nalgebra::Vector3;
use skirmishkit_core::{fuse_all, ConfigError, Solid};
use tracing::debug;

/// Parameters for a centered grid of copies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Number of copies along X
    pub rows: usize,
    /// Number of copies along Y
    pub columns: usize,
    /// Center-to-center spacing along X
    pub row_spacing: f64,
    /// Center-to-center spacing along Y
    pub column_spacing: f64,
}

impl GridParams {
    pub fn new(rows: usize, columns: usize, row_spacing: f64, column_spacing: f64) -> Self {
        debug_assert!(
            row_spacing.is_finite(),
            "row_spacing must be finite, got {row_spacing}"
        );
        debug_assert!(
            column_spacing.is_finite(),
            "column_spacing must be finite, got {column_spacing}"
        );
        Self {
            rows,
            columns,
            row_spacing,
            column_spacing,
        }
    }

    /// Square grid with the same pitch on both axes
    pub fn square(rows: usize, columns: usize, pitch: f64) -> Self {
        Self::new(rows, columns, pitch, pitch)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_spacing < 0.0 || self.column_spacing < 0.0 {
            return Err(ConfigError::invalid(
                "grid spacing",
                format!(
                    "must not be negative, got {} x {}",
                    self.row_spacing, self.column_spacing
                ),
            ));
        }
        Ok(())
    }

    /// Get total number of copies
    pub fn total_copies(&self) -> usize {
        self.rows * self.columns
    }

    /// Offset of cell (`row`, `column`) from the grid center
    pub fn get_offset(&self, row: usize, column: usize) -> Option<(f64, f64)> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        let x = (row as f64 - (self.rows as f64 - 1.0) / 2.0) * self.row_spacing;
        let y = (column as f64 - (self.columns as f64 - 1.0) / 2.0) * self.column_spacing;
        Some((x, y))
    }

    /// Every cell offset, row-major
    pub fn offsets(&self) -> Vec<(f64, f64)> {
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |column| (row, column)))
            .filter_map(|(row, column)| self.get_offset(row, column))
            .collect()
    }
}

/// Union one translated copy of `template` per grid cell
///
/// An empty grid (zero rows or columns) yields an empty solid.
pub fn make_grid<S: Solid>(template: &S, params: &GridParams) -> Result<S, ConfigError> {
    params.validate()?;
    let offsets = params.offsets();
    debug!(
        "grid: {} x {} = {} cell(s)",
        params.rows,
        params.columns,
        offsets.len()
    );
    let copies: Vec<S> = offsets
        .iter()
        .map(|&(x, y)| template.translated(Vector3::new(x, y, 0.0)))
        .collect();
    Ok(fuse_all(&copies))
}
