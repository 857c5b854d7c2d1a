use crate::math::{Isometry, Real};
use crate::query::details::contact_ball_ball;
use crate::query::ContactInfo;
use crate::shape::Collider;

/// Analytic contact between two balls.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SphereSphereAlgorithm;

impl SphereSphereAlgorithm {
    /// Computes the world-space contact between two ball colliders.
    ///
    /// Margins are ignored. Returns `None`, and logs a warning, if one of the colliders is
    /// not a ball.
    pub fn test_collision(
        &self,
        collider1: &Collider,
        pos1: &Isometry<Real>,
        collider2: &Collider,
        pos2: &Isometry<Real>,
    ) -> Option<ContactInfo> {
        let (Some(b1), Some(b2)) = (collider1.shape.as_ball(), collider2.shape.as_ball()) else {
            log::warn!(
                "Sphere-sphere collision test between a {:?} and a {:?}.",
                collider1.shape.shape_type(),
                collider2.shape.shape_type()
            );
            return None;
        };

        let pos12 = pos1.inv_mul(pos2);
        contact_ball_ball(&pos12, b1, b2).map(|c| c.transform_by(pos1))
    }
}
