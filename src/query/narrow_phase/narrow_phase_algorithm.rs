use crate::math::{Isometry, Real};
use crate::query::narrow_phase::{GjkEpaAlgorithm, NarrowPhaseParams, SphereSphereAlgorithm};
use crate::query::{ContactId, ContactInfo, ContactPool};
use crate::shape::{Collider, ConvexShape, ShapeType};

/// The algorithm used to compute the contact between a pair of colliders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum NarrowPhaseAlgorithm {
    /// Analytic ball-ball contact.
    SphereSphere(SphereSphereAlgorithm),
    /// Hybrid GJK/EPA contact with margins, for any pair of convex shapes.
    GjkEpa(GjkEpaAlgorithm),
}

impl NarrowPhaseAlgorithm {
    /// Selects the best algorithm for the given pair of shapes.
    pub fn for_pair(
        shape1: &ConvexShape,
        shape2: &ConvexShape,
        params: NarrowPhaseParams,
    ) -> Self {
        match (shape1.shape_type(), shape2.shape_type()) {
            (ShapeType::Ball, ShapeType::Ball) => {
                NarrowPhaseAlgorithm::SphereSphere(SphereSphereAlgorithm)
            }
            _ => NarrowPhaseAlgorithm::GjkEpa(GjkEpaAlgorithm::new(params)),
        }
    }

    /// Computes the world-space contact between two colliders, if they penetrate.
    pub fn test_collision(
        &self,
        collider1: &Collider,
        pos1: &Isometry<Real>,
        collider2: &Collider,
        pos2: &Isometry<Real>,
    ) -> Option<ContactInfo> {
        match self {
            NarrowPhaseAlgorithm::SphereSphere(alg) => {
                alg.test_collision(collider1, pos1, collider2, pos2)
            }
            NarrowPhaseAlgorithm::GjkEpa(alg) => alg.test_collision(collider1, pos1, collider2, pos2),
        }
    }

    /// Computes the contact between two colliders and stores it into `pool`.
    ///
    /// A slot of the pool is allocated only if a contact is found.
    pub fn test_collision_into(
        &self,
        collider1: &Collider,
        pos1: &Isometry<Real>,
        collider2: &Collider,
        pos2: &Isometry<Real>,
        pool: &mut ContactPool,
    ) -> Option<ContactId> {
        self.test_collision(collider1, pos1, collider2, pos2)
            .map(|contact| pool.insert(contact))
    }
}
