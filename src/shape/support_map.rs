//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// This is the only capability the narrow-phase needs from a shape: GJK and EPA never
/// look at the shape internals, they only ask for the farthest point of the shape along
/// some direction.
pub trait SupportMap {
    // Evaluates the support function of this shape.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape dilated by a ball of radius `margin`.
    ///
    /// The margin is added along the normalized `dir`. If `dir` is too small to be
    /// normalized, the support point of the undilated shape is returned.
    fn local_support_point_with_margin(&self, dir: &Vector<Real>, margin: Real) -> Point<Real> {
        if margin == 0.0 {
            return self.local_support_point(dir);
        }

        match Unit::try_new(*dir, crate::math::DEFAULT_EPSILON) {
            Some(dir) => self.local_support_point_toward(&dir) + *dir * margin,
            None => self.local_support_point(dir),
        }
    }

    // Evaluates the support function of this shape transformed by `transform`.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
