//! # Profile Composer
//!
//! Builds single component templates (roof tiles, hatch cut-outs, wall
//! panels) from primitives. Nothing here places anything: every template is
//! centered on the origin and handed to a layout as-is.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use skirmishkit_core::geometry::{chamfered_block, cuboid, pointed_arch, slot};
use skirmishkit_core::{fuse_all, GeometryError, Shape, Solid, DEFAULT_SEGMENTS};

use crate::dimensions::TileSlots;

/// Drop of the innermost arch below the panel center
const INNER_ARCH_DROP: f64 = 1.5;

/// Square roof tile with five diagonal slots cut through it
///
/// The longest slot runs corner to corner through the center, flanked by two
/// mid-length slots and two short ones further out.
pub fn roof_tile(size: f64, height: f64, segments: usize) -> Result<Shape, GeometryError> {
    let slots = TileSlots::for_tile(size);
    let tile = cuboid(size, size, height)?;

    let cutter = |length: f64, offset: f64| -> Result<Shape, GeometryError> {
        Ok(slot(length, slots.radius, height * 2.0, segments)?
            .rotated_about(Vector3::z(), Point3::origin(), 45.0)
            .translated(Vector3::new(offset, offset, -height)))
    };

    let t = slots.translation;
    let cutters = [
        cutter(size, 0.0)?,
        cutter(slots.length_md, -t)?,
        cutter(slots.length_md, t)?,
        cutter(slots.length_sm, -2.0 * t)?,
        cutter(slots.length_sm, 2.0 * t)?,
    ];

    Ok(tile.cut(&fuse_all(&cutters)))
}

/// Block cut under a hatch: chamfered vertical edges and top/bottom faces
///
/// Unlike the other templates it stands on z = 0, so a roof only has to drop
/// it to its own underside.
pub fn hatch_cut(
    length: f64,
    width: f64,
    height: f64,
    corner_chamfer: f64,
    face_chamfer: f64,
) -> Result<Shape, GeometryError> {
    Ok(
        chamfered_block(length, width, height, corner_chamfer, face_chamfer)?
            .translated(Vector3::new(0.0, 0.0, height / 2.0)),
    )
}

/// Sizes of a decorated wall panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelProfile {
    /// Length along the wall
    pub length: f64,
    /// Depth into the wall
    pub width: f64,
    /// Panel height
    pub height: f64,
    /// Extra height of the outer arch above the panel
    pub arch_padding_top: f64,
    /// Extra length of the outer arch beyond the panel
    pub arch_padding_sides: f64,
    /// Jamb height of the arches above the panel center
    pub arch_inner_height: f64,
    /// How much lower the inner arches are than the outer one
    pub inner_arch_top: f64,
    /// How much narrower the inner arches are than the outer one
    pub inner_arch_sides: f64,
    pub segments: usize,
}

impl Default for PanelProfile {
    fn default() -> Self {
        Self {
            length: 28.0,
            width: 6.0,
            height: 71.0,
            arch_padding_top: 3.0,
            arch_padding_sides: 3.0,
            arch_inner_height: 6.0,
            inner_arch_top: 5.0,
            inner_arch_sides: 4.0,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Plain box used to recess a panel into a wall
pub fn cut_panel(profile: &PanelProfile) -> Result<Shape, GeometryError> {
    cuboid(profile.length, profile.width, profile.height)
}

/// Layered pointed-arch panel
///
/// The front half (local -Y) carries the arch relief; the back half is a
/// plate with a smaller arch recess. An arch window runs through both.
pub fn arch_panel(profile: &PanelProfile) -> Result<Shape, GeometryError> {
    let p = profile;
    let (l, w, h) = (p.length, p.width, p.height);
    let jamb = h / 2.0 + p.arch_inner_height;

    let outline = cuboid(l, w, h)?;
    let arch = pointed_arch(
        l + p.arch_padding_sides,
        w / 2.0,
        h + p.arch_padding_top,
        jamb,
        p.segments,
    )?
    .translated(Vector3::new(0.0, -w / 4.0, 0.0));
    let window = pointed_arch(
        l + p.arch_padding_sides - p.inner_arch_sides,
        w,
        h + p.arch_padding_top - p.inner_arch_top,
        jamb - p.inner_arch_sides,
        p.segments,
    )?;
    let recess = pointed_arch(
        l - p.inner_arch_sides,
        w / 2.0,
        h - p.inner_arch_top,
        jamb - p.inner_arch_sides,
        p.segments,
    )?
    .translated(Vector3::new(0.0, w / 4.0, -INNER_ARCH_DROP));
    let back = cuboid(l, w / 2.0, h)?.translated(Vector3::new(0.0, w / 4.0, 0.0));

    let detail = back.fuse(&arch);
    let inside = back.cut(&recess);
    Ok(outline.intersect(&detail).cut(&window).fuse(&inside))
}
