//! # Primitive Solids
//!
//! Boxes and cylinders come straight from the `csgrs` mesh constructors.
//! Slots, octagonal blocks and pointed arches are 2D sketches extruded into
//! prisms. Tapered bodies (chamfered and filleted slabs) are stacks of
//! rectangle rings bridged band by band with [`Sketch::loft`].
//!
//! Unless stated otherwise, primitives are centered on the origin.

use csgrs::mesh::polygon::Polygon;
use csgrs::mesh::vertex::Vertex;
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::{Point3, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::trace;

use super::solid::{Shape, Solid};
use crate::error::GeometryError;

/// A closed ring of a loft
pub type Section = Vec<Point3<f64>>;

fn ring(section: &[Point3<f64>]) -> Polygon<()> {
    let vertices = section
        .iter()
        .map(|p| Vertex::new(*p, Vector3::z()))
        .collect();
    Polygon::new(vertices, None)
}

/// Stitch `sections` into a closed solid
///
/// Rings are listed bottom to top and wind counter-clockwise seen from +Z.
/// Each neighbouring pair becomes one [`Sketch::loft`] band; only the
/// outermost caps are kept so the bands share their seams.
pub fn loft(sections: &[Section]) -> Result<Shape, GeometryError> {
    if sections.len() < 2 {
        return Err(GeometryError::TooFewRings(sections.len()));
    }
    let count = sections[0].len();
    for (index, section) in sections.iter().enumerate() {
        if section.len() < 3 {
            return Err(GeometryError::RingTooSmall {
                index,
                count: section.len(),
            });
        }
        if section.len() != count {
            return Err(GeometryError::RingMismatch {
                expected: count,
                actual: section.len(),
            });
        }
    }
    trace!("loft: {} rings of {} points", sections.len(), count);

    let rings: Vec<Polygon<()>> = sections.iter().map(|s| ring(s)).collect();
    let last = rings.len() - 2;
    let mut polygons = Vec::with_capacity(2 + count * (rings.len() - 1));
    for (index, pair) in rings.windows(2).enumerate() {
        let band = Sketch::loft(&pair[0], &pair[1], true).map_err(|_| {
            GeometryError::RingMismatch {
                expected: count,
                actual: pair[1].vertices.len(),
            }
        })?;
        // bottom cap, top cap, then one side face per edge
        let mut faces = band.polygons.into_iter();
        let bottom = faces.next();
        let top = faces.next();
        if index == 0 {
            polygons.extend(bottom);
        }
        if index == last {
            polygons.extend(top);
        }
        polygons.extend(faces);
    }

    Ok(Shape::from_polygons(&polygons, None))
}

/// Rectangle ring at height `z`, counter-clockwise seen from +Z
pub fn rect_section(half_length: f64, half_width: f64, z: f64) -> Section {
    vec![
        Point3::new(-half_length, -half_width, z),
        Point3::new(half_length, -half_width, z),
        Point3::new(half_length, half_width, z),
        Point3::new(-half_length, half_width, z),
    ]
}

/// Extrude a counter-clockwise outline upwards, centered on z = 0
fn prism(outline: &[[f64; 2]], height: f64) -> Shape {
    Sketch::polygon(outline, None)
        .renormalize()
        .extrude(height)
        .translate(0.0, 0.0, -height / 2.0)
}

/// Box of `length` × `width` × `height`
pub fn cuboid(length: f64, width: f64, height: f64) -> Result<Shape, GeometryError> {
    Ok(Shape::cuboid(length, width, height, None).translate(
        -length / 2.0,
        -width / 2.0,
        -height / 2.0,
    ))
}

/// Box whose top edges are chamfered by `chamfer`
pub fn chamfered_cuboid(
    length: f64,
    width: f64,
    height: f64,
    chamfer: f64,
) -> Result<Shape, GeometryError> {
    if chamfer <= 0.0 {
        return cuboid(length, width, height);
    }
    let (l, w, h) = (length / 2.0, width / 2.0, height / 2.0);
    loft(&[
        rect_section(l, w, -h),
        rect_section(l, w, h - chamfer),
        rect_section(l - chamfer, w - chamfer, h),
    ])
}

/// Box whose top edges are rounded with `radius`
pub fn filleted_cuboid(
    length: f64,
    width: f64,
    height: f64,
    radius: f64,
    segments: usize,
) -> Result<Shape, GeometryError> {
    if radius <= 0.0 {
        return cuboid(length, width, height);
    }
    let (l, w, h) = (length / 2.0, width / 2.0, height / 2.0);
    let steps = (segments / 4).max(2);

    let mut sections = vec![rect_section(l, w, -h)];
    for i in 0..=steps {
        let angle = FRAC_PI_2 * i as f64 / steps as f64;
        let inset = radius * (1.0 - angle.cos());
        let z = h - radius + radius * angle.sin();
        sections.push(rect_section(l - inset, w - inset, z));
    }
    loft(&sections)
}

/// Upright cylinder
pub fn cylinder(radius: f64, height: f64, segments: usize) -> Result<Shape, GeometryError> {
    Ok(Shape::cylinder(radius, height, segments.max(3), None).translate(0.0, 0.0, -height / 2.0))
}

/// Stadium slot extruded upwards from z = 0 to z = `height`
///
/// `length` is measured end to end, `width` is the slot diameter.
pub fn slot(length: f64, width: f64, height: f64, segments: usize) -> Result<Shape, GeometryError> {
    let radius = width / 2.0;
    let straight = (length - width) / 2.0;
    if straight <= 1e-9 {
        return Ok(Sketch::circle(radius, segments.max(3), None).extrude(height));
    }

    let steps = (segments / 2).max(2);
    let mut outline = Vec::with_capacity(2 * (steps + 1));
    for (center, start) in [(straight, -FRAC_PI_2), (-straight, FRAC_PI_2)] {
        outline.extend((0..=steps).map(|i| {
            let angle = start + PI * i as f64 / steps as f64;
            [center + radius * angle.cos(), radius * angle.sin()]
        }));
    }
    Ok(Sketch::polygon(&outline, None).renormalize().extrude(height))
}

/// Block with chamfered vertical edges and chamfered top/bottom face edges
///
/// The octagonal prism carries the corner chamfer; the face chamfer comes
/// from intersecting it with a slab whose caps are inset by `face_chamfer`.
pub fn chamfered_block(
    length: f64,
    width: f64,
    height: f64,
    corner_chamfer: f64,
    face_chamfer: f64,
) -> Result<Shape, GeometryError> {
    let (l, w, h) = (length / 2.0, width / 2.0, height / 2.0);
    let block = if corner_chamfer > 0.0 {
        let c = corner_chamfer.min(l.min(w));
        prism(
            &[
                [-l + c, -w],
                [l - c, -w],
                [l, -w + c],
                [l, w - c],
                [l - c, w],
                [-l + c, w],
                [-l, w - c],
                [-l, -w + c],
            ],
            height,
        )
    } else {
        cuboid(length, width, height)?
    };
    if face_chamfer <= 0.0 {
        return Ok(block);
    }

    let f = face_chamfer;
    trace!("chamfered block: corner {corner_chamfer}, face {f}");
    let faces = loft(&[
        rect_section(l - f, w - f, -h),
        rect_section(l, w, -h + f),
        rect_section(l, w, h - f),
        rect_section(l - f, w - f, h),
    ])?;
    Ok(block.intersect(&faces))
}

/// Outline of a pointed arch in the XZ plane
///
/// Straight jambs rise to `inner_height` above the base, then two circular
/// arcs meet at an apex `height` above the base. The outline is centered
/// vertically on z = 0 and runs counter-clockwise.
pub fn pointed_arch_outline(
    length: f64,
    height: f64,
    inner_height: f64,
    segments: usize,
) -> Vec<(f64, f64)> {
    let half = length / 2.0;
    let base = -height / 2.0;
    let spring = base + inner_height.clamp(0.0, height);
    let rise = height / 2.0 - spring;

    let mut outline = vec![(-half, base), (half, base), (half, spring)];
    if rise <= 1e-9 || length <= 0.0 {
        outline.push((-half, spring));
        return outline;
    }

    // Right arc: centered on the springing line, through (half, spring) and
    // the apex (0, spring + rise).
    let center_x = (half * half - rise * rise) / length;
    let radius = half - center_x;
    let end_angle = rise.atan2(-center_x);
    let steps = (segments / 2).max(2);

    let right: Vec<(f64, f64)> = (1..=steps)
        .map(|i| {
            let angle = end_angle * i as f64 / steps as f64;
            (center_x + radius * angle.cos(), spring + radius * angle.sin())
        })
        .collect();
    outline.extend(right.iter().copied());
    // Mirror, skipping the shared apex.
    outline.extend(right.iter().rev().skip(1).map(|&(x, z)| (-x, z)));
    outline.push((-half, spring));
    outline
}

/// Pointed arch extruded `width` along Y, centered on the origin
pub fn pointed_arch(
    length: f64,
    width: f64,
    height: f64,
    inner_height: f64,
    segments: usize,
) -> Result<Shape, GeometryError> {
    let outline: Vec<[f64; 2]> = pointed_arch_outline(length, height, inner_height, segments)
        .into_iter()
        .map(|(x, z)| [x, z])
        .collect();
    // Sketched in XY, then stood up so sketch Y becomes Z.
    Ok(prism(&outline, width).rotated_about(Vector3::x(), Point3::origin(), 90.0))
}
