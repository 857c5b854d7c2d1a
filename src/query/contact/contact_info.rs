use crate::math::{Isometry, Point, Real, Vector};
use crate::query::epa::Penetration;
use na::Unit;

/// Geometric description of a contact between two penetrating shapes.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactInfo {
    /// The penetration depth. Always non-negative.
    pub depth: Real,

    /// Contact normal, pointing from the first shape toward the second one.
    pub normal: Unit<Vector<Real>>,

    /// The deepest point of the first shape inside of the second one.
    pub point1: Point<Real>,

    /// The deepest point of the second shape inside of the first one.
    ///
    /// `point1 - point2` is equal to `depth * normal`.
    pub point2: Point<Real>,
}

impl ContactInfo {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        depth: Real,
        normal: Unit<Vector<Real>>,
        point1: Point<Real>,
        point2: Point<Real>,
    ) -> Self {
        ContactInfo {
            depth,
            normal,
            point1,
            point2,
        }
    }

    /// Transforms the points and normal of this contact by `pos`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        ContactInfo {
            depth: self.depth,
            normal: pos * self.normal,
            point1: pos * self.point1,
            point2: pos * self.point2,
        }
    }
}

impl From<Penetration> for ContactInfo {
    fn from(pen: Penetration) -> Self {
        ContactInfo::new(pen.depth, pen.normal, pen.point1, pen.point2)
    }
}
