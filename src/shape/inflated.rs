use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A borrowed shape dilated by a ball of radius `margin`.
///
/// This is the Minkowski sum of the inner shape and a ball. A zero margin gives back the
/// inner shape exactly.
#[derive(Copy, Clone, Debug)]
pub struct Inflated<'a, S: ?Sized> {
    /// The shape being inflated.
    pub inner: &'a S,
    /// The radius of the ball added to the inner shape.
    pub margin: Real,
}

impl<'a, S: ?Sized> Inflated<'a, S> {
    /// Inflates `inner` by `margin`.
    #[inline]
    pub fn new(inner: &'a S, margin: Real) -> Self {
        Inflated { inner, margin }
    }
}

impl<S: ?Sized + SupportMap> SupportMap for Inflated<'_, S> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.inner.local_support_point_with_margin(dir, self.margin)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.inner.local_support_point_toward(dir) + **dir * self.margin
    }
}
