use crate::math::Real;
use crate::shape::ConvexShape;

/// The default margin a collider is inflated by when its exact shape gives an unreliable contact.
pub const DEFAULT_MARGIN: Real = 0.04;

/// A convex shape together with its collision margin.
///
/// The margin never changes the shape seen by separation queries: it is only used to
/// inflate the support function when the narrow-phase needs a robust penetration.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    /// The shape of this collider.
    pub shape: ConvexShape,
    /// The non-negative margin of this collider.
    pub margin: Real,
}

impl Collider {
    /// Creates a collider with the default margin.
    pub fn new(shape: impl Into<ConvexShape>) -> Self {
        Self::with_margin(shape, DEFAULT_MARGIN)
    }

    /// Creates a collider with the given margin.
    ///
    /// Negative margins are clamped to zero.
    pub fn with_margin(shape: impl Into<ConvexShape>, margin: Real) -> Self {
        Collider {
            shape: shape.into(),
            margin: margin.max(0.0),
        }
    }
}
