use crate::math::Real;
use crate::query::epa::EpaParams;
use crate::query::gjk::GjkParams;

/// Parameters shared by the narrow-phase algorithms.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct NarrowPhaseParams {
    /// Parameters of the GJK distance algorithm.
    pub gjk: GjkParams,
    /// Parameters of the EPA penetration algorithm.
    pub epa: EpaParams,
    /// Separations and penetrations smaller than this are considered unreliable on the exact
    /// shapes, and are recomputed on the shapes inflated by their margins.
    pub touching_tolerance: Real,
}

impl Default for NarrowPhaseParams {
    fn default() -> Self {
        Self {
            gjk: GjkParams::default(),
            epa: EpaParams::default(),
            touching_tolerance: 1.0e-4,
        }
    }
}
