use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, CSOPoint, GJKResult, GjkParams, VoronoiSimplex};
use crate::shape::SupportMap;

use na::{self, Unit};

/// Distance between support-mapped shapes.
///
/// Returns `0.0` if the shapes intersect.
pub fn distance_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    params: &GjkParams,
) -> Real
where
    G1: SupportMap,
    G2: SupportMap,
{
    distance_support_map_support_map_with_params(pos12, g1, g2, params, &mut VoronoiSimplex::new())
}

/// Distance between support-mapped shapes, reusing the given simplex.
pub fn distance_support_map_support_map_with_params<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    params: &GjkParams,
    simplex: &mut VoronoiSimplex,
) -> Real
where
    G1: SupportMap,
    G2: SupportMap,
{
    let dir = Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
        .unwrap_or_else(Vector::x_axis);
    simplex.reset(CSOPoint::from_shapes(pos12, g1, g2, &dir));

    match gjk::closest_points(pos12, g1, g2, params, simplex) {
        GJKResult::Intersection => 0.0,
        GJKResult::ClosestPoints(p1, p2, _) | GJKResult::Inconclusive(p1, p2, _) => {
            na::distance(&p1, &p2)
        }
    }
}
