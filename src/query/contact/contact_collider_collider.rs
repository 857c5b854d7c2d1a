use crate::math::{Isometry, Real};
use crate::query::narrow_phase::{NarrowPhaseAlgorithm, NarrowPhaseParams};
use crate::query::ContactInfo;
use crate::shape::Collider;

/// Computes the contact between two colliders, if they penetrate.
///
/// The narrow-phase algorithm is chosen from the collider shapes, and run with the default
/// parameters. The returned contact is expressed in world-space.
pub fn contact(
    pos1: &Isometry<Real>,
    collider1: &Collider,
    pos2: &Isometry<Real>,
    collider2: &Collider,
) -> Option<ContactInfo> {
    NarrowPhaseAlgorithm::for_pair(
        &collider1.shape,
        &collider2.shape,
        NarrowPhaseParams::default(),
    )
    .test_collision(collider1, pos1, collider2, pos2)
}
