use nalgebra::{Matrix4, Point3, Vector3};
use skirmishkit_core::{Bounds, Shape, Solid};

/// Cheap stand-in kernel: a cloud of marker points, unions concatenate
#[derive(Debug, Clone, PartialEq)]
pub struct Marker(pub Vec<Point3<f64>>);

impl Marker {
    pub fn at_origin() -> Self {
        Marker(vec![Point3::origin()])
    }
}

impl Solid for Marker {
    fn empty() -> Self {
        Marker(Vec::new())
    }

    fn fuse(&self, other: &Self) -> Self {
        Marker(self.0.iter().chain(other.0.iter()).copied().collect())
    }

    fn cut(&self, _other: &Self) -> Self {
        self.clone()
    }

    fn intersect(&self, _other: &Self) -> Self {
        Marker::empty()
    }

    fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        Marker(self.0.iter().map(|p| matrix.transform_point(p)).collect())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bounds(&self) -> Option<Bounds> {
        let first = *self.0.first()?;
        let (min, max) = self
            .0
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Bounds { min, max })
    }
}

/// Ray/triangle intersection distance (Möller–Trumbore)
fn ray_hit(
    origin: &Point3<f64>,
    dir: &Vector3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
) -> Option<f64> {
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(&e2);
    let det = e1.dot(&p);
    if det.abs() < 1e-12 {
        return None;
    }
    let inv = 1.0 / det;
    let s = origin - a;
    let u = s.dot(&p) * inv;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(&e1);
    let v = dir.dot(&q) * inv;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(&q) * inv;
    (t > 1e-9).then_some(t)
}

/// Whether `point` lies inside the closed mesh `shape` (odd ray crossings)
pub fn contains(shape: &Shape, point: Point3<f64>) -> bool {
    let dir = Vector3::new(0.3141, 0.2718, 0.9112).normalize();
    let mut crossings = 0;
    for polygon in &shape.polygons {
        let vertices: Vec<Point3<f64>> = polygon.vertices.iter().map(|v| v.pos).collect();
        for i in 1..vertices.len().saturating_sub(1) {
            if ray_hit(&point, &dir, &vertices[0], &vertices[i], &vertices[i + 1]).is_some() {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

#[test]
fn test_contains_on_plain_box() {
    let block = skirmishkit_core::geometry::cuboid(10.0, 10.0, 10.0).unwrap();
    assert!(contains(&block, Point3::new(1.0, 2.0, 3.0)));
    assert!(!contains(&block, Point3::new(6.0, 0.0, 0.0)));
    assert!(!contains(&block, Point3::new(0.0, 0.0, -5.5)));
}
