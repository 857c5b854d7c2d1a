//! Narrow-phase algorithms computing the contact between pairs of colliders.

#[cfg(feature = "parallel")]
pub use self::batch::par_contact_pairs;
pub use self::batch::{contact_pairs, ColliderPair};
pub use self::gjk_epa_algorithm::GjkEpaAlgorithm;
pub use self::narrow_phase_algorithm::NarrowPhaseAlgorithm;
pub use self::narrow_phase_params::NarrowPhaseParams;
pub use self::sphere_sphere_algorithm::SphereSphereAlgorithm;

mod batch;
mod gjk_epa_algorithm;
mod narrow_phase_algorithm;
mod narrow_phase_params;
mod sphere_sphere_algorithm;
