use crate::math::{Isometry, Real};
use crate::query::details::distance_support_map_support_map;
use crate::query::gjk::GjkParams;
use crate::shape::Collider;

/// Computes the minimum distance separating two colliders.
///
/// Margins are ignored. Returns `0.0` if the colliders are penetrating.
pub fn distance(
    pos1: &Isometry<Real>,
    collider1: &Collider,
    pos2: &Isometry<Real>,
    collider2: &Collider,
) -> Real {
    let pos12 = pos1.inv_mul(pos2);
    distance_support_map_support_map(
        &pos12,
        &collider1.shape,
        &collider2.shape,
        &GjkParams::default(),
    )
}
