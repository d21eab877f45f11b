//! Geometry kernel seam.
//!
//! The part builders only ever talk to the kernel through [`Solid`]: boolean
//! composition plus rigid transforms. [`Shape`] is the concrete `csgrs` mesh
//! every builder produces.

use csgrs::mesh::Mesh;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Point3, Translation3, Vector3};

use super::transform::rotation_about;

/// Concrete solid produced by the `csgrs` kernel
pub type Shape = Mesh<()>;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    /// Extent along each axis
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Boolean composition and rigid transforms with standard CSG semantics
///
/// `cut` removes volume, `fuse` adds it, `intersect` keeps only the overlap.
/// Every operation returns a new value; inputs are never mutated.
pub trait Solid: Clone {
    /// Solid with no volume
    fn empty() -> Self;

    /// Union
    fn fuse(&self, other: &Self) -> Self;

    /// Difference (`self` minus `other`)
    fn cut(&self, other: &Self) -> Self;

    /// Intersection
    fn intersect(&self, other: &Self) -> Self;

    /// Apply a homogeneous transform
    fn transformed(&self, matrix: &Matrix4<f64>) -> Self;

    /// True when the solid holds no geometry
    fn is_empty(&self) -> bool;

    /// Bounding box, `None` for an empty solid
    fn bounds(&self) -> Option<Bounds>;

    /// Translate by `offset`
    fn translated(&self, offset: Vector3<f64>) -> Self {
        self.transformed(&Translation3::from(offset).to_homogeneous())
    }

    /// Rotate by `degrees` about `axis` passing through `origin`
    fn rotated_about(&self, axis: Vector3<f64>, origin: Point3<f64>, degrees: f64) -> Self {
        if degrees == 0.0 {
            return self.clone();
        }
        self.transformed(&rotation_about(axis, origin, degrees))
    }
}

/// Union every solid of `shapes` into one compound
pub fn fuse_all<'a, S, I>(shapes: I) -> S
where
    S: Solid + 'a,
    I: IntoIterator<Item = &'a S>,
{
    shapes
        .into_iter()
        .fold(S::empty(), |acc, shape| acc.fuse(shape))
}

impl Solid for Shape {
    fn empty() -> Self {
        <Shape as CSG>::new()
    }

    fn fuse(&self, other: &Self) -> Self {
        if self.polygons.is_empty() {
            return other.clone();
        }
        if other.polygons.is_empty() {
            return self.clone();
        }
        CSG::union(self, other)
    }

    fn cut(&self, other: &Self) -> Self {
        if self.polygons.is_empty() || other.polygons.is_empty() {
            return self.clone();
        }
        CSG::difference(self, other)
    }

    fn intersect(&self, other: &Self) -> Self {
        if self.polygons.is_empty() || other.polygons.is_empty() {
            return Self::empty();
        }
        CSG::intersection(self, other)
    }

    fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        if self.polygons.is_empty() {
            return self.clone();
        }
        CSG::transform(self, matrix)
    }

    fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    fn bounds(&self) -> Option<Bounds> {
        let mut points = self
            .polygons
            .iter()
            .flat_map(|polygon| polygon.vertices.iter())
            .map(|vertex| vertex.pos);

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)));
        Some(Bounds { min, max })
    }
}
