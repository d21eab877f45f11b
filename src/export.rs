//! STL output for built parts

use anyhow::{Context, Result};
use skirmishkit_core::Shape;
use std::path::Path;
use tracing::debug;

/// Bytes in a binary STL header, before the triangle count
const HEADER_LEN: usize = 80;

/// Encode a shape as binary STL
pub fn write_stl(shape: &Shape, name: &str) -> Result<Vec<u8>> {
    shape
        .to_stl_binary(name)
        .with_context(|| format!("Failed to encode {name} as STL"))
}

/// Triangle count recorded in a binary STL buffer
pub fn triangle_count(stl: &[u8]) -> Option<usize> {
    let count: [u8; 4] = stl.get(HEADER_LEN..HEADER_LEN + 4)?.try_into().ok()?;
    Some(u32::from_le_bytes(count) as usize)
}

/// Write a binary STL file, returning the triangle count
pub fn write_stl_file(shape: &Shape, name: &str, path: &Path) -> Result<usize> {
    let stl = write_stl(shape, name)?;
    let count = triangle_count(&stl).context("STL output has no triangle count")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, &stl).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} triangles to {}", count, path.display());
    Ok(count)
}
