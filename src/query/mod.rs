//! Non-persistent geometric queries.
//!
//! The main entry points are:
//!
//! * [`contact()`] to compute the penetration between two colliders.
//! * [`distance()`] to compute the distance between two colliders.
//! * [`NarrowPhaseAlgorithm`] to reuse the algorithm selected for a pair of colliders, and
//!   store its contacts into a [`ContactPool`].
//!
//! The GJK and EPA algorithms these rely on are available in the [`gjk`] and [`epa`] modules.

pub use self::contact::{contact, ContactId, ContactInfo, ContactPool};
pub use self::distance::distance;
#[cfg(feature = "parallel")]
pub use self::narrow_phase::par_contact_pairs;
pub use self::narrow_phase::{
    contact_pairs, ColliderPair, GjkEpaAlgorithm, NarrowPhaseAlgorithm, NarrowPhaseParams,
    SphereSphereAlgorithm,
};
pub use self::point::{PointProjection, PointQueryWithLocation};

mod contact;
mod distance;
pub mod epa;
pub mod gjk;
pub mod narrow_phase;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::contact_ball_ball;
    pub use super::distance::{
        distance_support_map_support_map, distance_support_map_support_map_with_params,
    };
}
