//! # Geometry Module
//!
//! Adapter over the `csgrs` CSG kernel.
//!
//! - [`solid`]: the [`Solid`] seam (booleans, rigid transforms, bounds)
//! - [`primitives`]: boxes, cylinders, extruded sketches and ring lofts
//! - [`transform`]: rotation helpers and slot placements

pub mod primitives;
pub mod solid;
pub mod transform;

pub use primitives::{
    chamfered_block, chamfered_cuboid, cuboid, cylinder, filleted_cuboid, loft, pointed_arch,
    slot, Section,
};
pub use solid::{fuse_all, Bounds, Shape, Solid};
pub use transform::{rotation_about, Placement};
