use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;
use alloc::vec::Vec;

/// The convex hull of a set of points, described only by its vertices.
///
/// No hull is computed: the support function simply picks the farthest point of the set,
/// so interior points are allowed and simply never returned.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPointCloud {
    points: Vec<Point<Real>>,
}

impl ConvexPointCloud {
    /// Creates the convex hull of the given points.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points(points: Vec<Point<Real>>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexPointCloud { points })
        }
    }

    /// The points whose convex hull is this shape.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexPointCloud {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
