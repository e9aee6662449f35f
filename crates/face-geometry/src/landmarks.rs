//! Landmark sets, bounding boxes, and the face-mesh index contract

use crate::point::Point3;
use crate::GeometryError;
use serde::{Deserialize, Serialize};

/// Number of points produced by the face-mesh model per detection
pub const MESH_POINTS: usize = 468;

/// Semantic landmark indices for the 468-point face mesh.
///
/// These positions are fixed by the upstream model. The scoring pipeline
/// depends on them staying stable across model versions.
pub mod mesh {
    /// Top-of-forehead point on the vertical midline
    pub const FOREHEAD: usize = 10;
    /// Nose base on the vertical midline (facial-thirds divider)
    pub const NOSE_BASE: usize = 1;
    /// Nose tip (chin-ratio reference)
    pub const NOSE_TIP: usize = 4;
    /// Chin bottom on the vertical midline
    pub const CHIN: usize = 152;
    /// Bottom of the lower lip (mouth reference for the chin ratio)
    pub const MOUTH_BOTTOM: usize = 17;

    /// Left eye ring: outer corner, inner corner, top lid, bottom lid
    pub const LEFT_EYE: [usize; 4] = [33, 133, 159, 145];
    /// Right eye ring: outer corner, inner corner, top lid, bottom lid
    pub const RIGHT_EYE: [usize; 4] = [263, 362, 386, 374];

    /// Jaw corners (gonion area)
    pub const LEFT_JAW: usize = 172;
    pub const RIGHT_JAW: usize = 397;

    /// Cheekbone apex points
    pub const LEFT_CHEEK: usize = 116;
    pub const RIGHT_CHEEK: usize = 345;

    /// Nose wing (alar) points
    pub const NOSE_LEFT: usize = 129;
    pub const NOSE_RIGHT: usize = 358;
}

/// Axis-aligned rectangle enclosing a detected face, in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Build a box from the model's top-left / bottom-right corner pair
    pub fn from_corners(top_left: (f64, f64), bottom_right: (f64, f64)) -> Self {
        Self {
            x: top_left.0,
            y: top_left.1,
            width: bottom_right.0 - top_left.0,
            height: bottom_right.1 - top_left.1,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// The full ordered landmark sequence for one detected face.
///
/// Index positions are semantically fixed by the upstream model; see [`mesh`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet(Vec<Point3>);

impl LandmarkSet {
    /// Wrap a model output sequence, enforcing the mesh point count
    pub fn new(points: Vec<Point3>) -> Result<Self, GeometryError> {
        if points.len() != MESH_POINTS {
            return Err(GeometryError::WrongPointCount {
                expected: MESH_POINTS,
                actual: points.len(),
            });
        }
        Ok(Self(points))
    }

    /// Landmark at a mesh index.
    ///
    /// Indices come from the fixed [`mesh`] contract; out-of-range access is
    /// a caller bug and panics.
    pub fn point(&self, index: usize) -> Point3 {
        self.0[index]
    }

    /// Coordinate-wise mean of the landmarks at the given indices.
    ///
    /// Used for eye centers (4 ring points per eye). The result does not
    /// depend on index order.
    pub fn centroid(&self, indices: &[usize]) -> Point3 {
        let n = indices.len() as f64;
        let mut sum = Point3::default();
        for &i in indices {
            let p = self.0[i];
            sum.x += p.x;
            sum.y += p.y;
            sum.z += p.z;
        }
        Point3::new(sum.x / n, sum.y / n, sum.z / n)
    }

    /// Corner-to-corner eye width for the given eye ring
    pub fn eye_width(&self, eye: &[usize; 4]) -> f64 {
        self.point(eye[0]).distance_2d(&self.point(eye[1]))
    }

    /// Lid-to-lid eye height for the given eye ring
    pub fn eye_height(&self, eye: &[usize; 4]) -> f64 {
        self.point(eye[2]).distance_2d(&self.point(eye[3]))
    }
}

/// One detected face in one frame: landmarks plus enclosing box.
///
/// Produced fresh each frame by the external detector and not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    pub landmarks: LandmarkSet,
    pub bbox: BoundingBox,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mesh() -> Vec<Point3> {
        vec![Point3::default(); MESH_POINTS]
    }

    #[test]
    fn test_wrong_point_count_rejected() {
        let err = LandmarkSet::new(vec![Point3::default(); 5]).unwrap_err();
        match err {
            GeometryError::WrongPointCount { expected, actual } => {
                assert_eq!(expected, MESH_POINTS);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_centroid_is_coordinate_mean() {
        let mut points = flat_mesh();
        points[10] = Point3::new(2.0, 4.0, 1.0);
        points[20] = Point3::new(4.0, 8.0, 3.0);
        let set = LandmarkSet::new(points).unwrap();

        let c = set.centroid(&[10, 20]);
        assert!((c.x - 3.0).abs() < 1e-9);
        assert!((c.y - 6.0).abs() < 1e-9);
        assert!((c.z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_permutation_invariant() {
        let mut points = flat_mesh();
        points[1] = Point3::new(1.0, 2.0, 3.0);
        points[2] = Point3::new(-4.0, 0.5, 2.0);
        points[3] = Point3::new(9.0, -1.0, 0.0);
        let set = LandmarkSet::new(points).unwrap();

        let a = set.centroid(&[1, 2, 3]);
        let b = set.centroid(&[3, 1, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bbox_from_corners() {
        let bbox = BoundingBox::from_corners((10.0, 20.0), (110.0, 140.0));
        assert_eq!(bbox.x, 10.0);
        assert_eq!(bbox.y, 20.0);
        assert_eq!(bbox.width(), 100.0);
        assert_eq!(bbox.height(), 120.0);
    }

    #[test]
    fn test_eye_width_and_height() {
        let mut points = flat_mesh();
        let [outer, inner, top, bottom] = mesh::LEFT_EYE;
        points[outer] = Point3::new(0.0, 0.0, 0.0);
        points[inner] = Point3::new(10.0, 0.0, 0.0);
        points[top] = Point3::new(5.0, -2.0, 0.0);
        points[bottom] = Point3::new(5.0, 2.0, 0.0);
        let set = LandmarkSet::new(points).unwrap();

        assert!((set.eye_width(&mesh::LEFT_EYE) - 10.0).abs() < 1e-9);
        assert!((set.eye_height(&mesh::LEFT_EYE) - 4.0).abs() < 1e-9);
    }
}
