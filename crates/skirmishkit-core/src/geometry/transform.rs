//! Rigid transforms.

use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Unit, Vector3};

/// Homogeneous matrix rotating by `degrees` about `axis` through `origin`
pub fn rotation_about(axis: Vector3<f64>, origin: Point3<f64>, degrees: f64) -> Matrix4<f64> {
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), degrees.to_radians());
    let to_origin = Translation3::new(-origin.x, -origin.y, -origin.z).to_homogeneous();
    let back = Translation3::new(origin.x, origin.y, origin.z).to_homogeneous();
    back * rotation.to_homogeneous() * to_origin
}

/// A turn about +Z through the origin followed by a translation
///
/// This is the only transform a placement slot ever needs: rotations are
/// quarter turns that align a template with an edge normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation about +Z in degrees, applied first
    pub rotation_deg: f64,
    /// Translation applied after the rotation
    pub translation: Vector3<f64>,
}

impl Placement {
    pub fn new(rotation_deg: f64, translation: Vector3<f64>) -> Self {
        debug_assert!(
            rotation_deg.is_finite(),
            "rotation_deg must be finite, got {rotation_deg}"
        );
        Self {
            rotation_deg,
            translation,
        }
    }

    /// Homogeneous matrix for this placement
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let turn = rotation_about(Vector3::z(), Point3::origin(), self.rotation_deg);
        Translation3::from(self.translation).to_homogeneous() * turn
    }

    /// Where the template-local `point` ends up
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        self.to_matrix().transform_point(point)
    }
}
