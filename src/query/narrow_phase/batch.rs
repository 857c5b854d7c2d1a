use crate::math::{Isometry, Real};
use crate::query::narrow_phase::{NarrowPhaseAlgorithm, NarrowPhaseParams};
use crate::query::ContactInfo;
use crate::shape::Collider;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A pair of positioned colliders to test for contact.
#[derive(Copy, Clone, Debug)]
pub struct ColliderPair<'a> {
    /// The first collider.
    pub collider1: &'a Collider,
    /// The world-space position of the first collider.
    pub pos1: Isometry<Real>,
    /// The second collider.
    pub collider2: &'a Collider,
    /// The world-space position of the second collider.
    pub pos2: Isometry<Real>,
}

impl<'a> ColliderPair<'a> {
    /// Creates a new pair.
    pub fn new(
        collider1: &'a Collider,
        pos1: Isometry<Real>,
        collider2: &'a Collider,
        pos2: Isometry<Real>,
    ) -> Self {
        Self {
            collider1,
            pos1,
            collider2,
            pos2,
        }
    }

    fn contact(&self, params: &NarrowPhaseParams) -> Option<ContactInfo> {
        NarrowPhaseAlgorithm::for_pair(&self.collider1.shape, &self.collider2.shape, *params)
            .test_collision(self.collider1, &self.pos1, self.collider2, &self.pos2)
    }
}

/// Computes the contact of each pair, in order.
pub fn contact_pairs(pairs: &[ColliderPair], params: &NarrowPhaseParams) -> Vec<Option<ContactInfo>> {
    pairs.iter().map(|pair| pair.contact(params)).collect()
}

/// Computes the contact of each pair on the rayon thread pool.
///
/// Gives the same result as [`contact_pairs`].
#[cfg(feature = "parallel")]
pub fn par_contact_pairs(
    pairs: &[ColliderPair],
    params: &NarrowPhaseParams,
) -> Vec<Option<ContactInfo>> {
    pairs.par_iter().map(|pair| pair.contact(params)).collect()
}
