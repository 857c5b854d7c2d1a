//! Point projection results and the trait of shapes that report where a projection lands.

use crate::math::{Point, Real};
use na;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the point to project was inside of the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }

    /// Returns `true` if `Self::is_inside` is `true` or if the distance between the projected point and `point` is smaller than `min_dist`.
    pub fn is_inside_eps(&self, original_point: &Point<Real>, min_dist: Real) -> bool {
        self.is_inside || na::distance_squared(original_point, &self.point) < min_dist * min_dist
    }
}

/// Returns shape-specific info in addition to generic projection information
///
/// The location type identifies the feature (vertex, edge, face or interior) of the shape
/// the projection lies on, together with the barycentric coordinates of the projection on
/// that feature.
pub trait PointQueryWithLocation {
    /// Additional shape-specific projection information
    ///
    /// In addition to the generic projection information returned in PointProjection,
    /// implementations might provide shape-specific projection info. The type of this
    /// shape-specific information is defined by this associated type.
    type Location;

    /// Projects a point on `self`.
    ///
    /// The point is assumed to be expressed in the local-space of `self`. With `solid` set to
    /// `true`, a point inside of a solid shape is its own projection.
    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
        solid: bool,
    ) -> (PointProjection, Self::Location);
}
