//! Hybrid GJK/EPA collision detection with margins.
//!
//! Separated shapes are handled by GJK on the exact shapes, and deep penetrations by EPA
//! on the exact shapes. Everything in between (touching shapes, flat Minkowski differences,
//! EPA failures) is recomputed on the shapes inflated by their margins, where the origin
//! sits well inside the Minkowski difference. The margins are then removed from the result.

use crate::math::{Isometry, Real, Vector};
use crate::query::epa::EPA;
use crate::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::query::narrow_phase::NarrowPhaseParams;
use crate::query::ContactInfo;
use crate::shape::{Collider, Inflated, SupportMap};
use na::Unit;

/// Narrow-phase algorithm for any pair of convex shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkEpaAlgorithm {
    /// The parameters of the algorithm.
    pub params: NarrowPhaseParams,
}

// What the exact shapes tell us about the pair.
enum ExactOutcome {
    Separated,
    Penetrating(ContactInfo),
    Unreliable,
}

impl GjkEpaAlgorithm {
    /// Creates the algorithm with the given parameters.
    pub fn new(params: NarrowPhaseParams) -> Self {
        Self { params }
    }

    /// Computes the world-space contact between two colliders, if they penetrate.
    pub fn test_collision(
        &self,
        collider1: &Collider,
        pos1: &Isometry<Real>,
        collider2: &Collider,
        pos2: &Isometry<Real>,
    ) -> Option<ContactInfo> {
        let pos12 = pos1.inv_mul(pos2);
        self.test_collision_local(
            &pos12,
            &collider1.shape,
            collider1.margin,
            &collider2.shape,
            collider2.margin,
        )
        .map(|c| c.transform_by(pos1))
    }

    /// Computes the contact between two shapes, expressed in the local-space of `g1`.
    ///
    /// `pos12` is the position of `g2` relative to `g1`, `margin1` and `margin2` the margins
    /// used when the exact shapes give no reliable answer.
    pub fn test_collision_local<G1, G2>(
        &self,
        pos12: &Isometry<Real>,
        g1: &G1,
        margin1: Real,
        g2: &G2,
        margin2: Real,
    ) -> Option<ContactInfo>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        match self.exact_contact(pos12, g1, g2) {
            ExactOutcome::Separated => None,
            ExactOutcome::Penetrating(contact) => Some(contact),
            ExactOutcome::Unreliable => {
                self.penetration_with_margins(pos12, g1, margin1, g2, margin2)
            }
        }
    }

    /// Computes the penetration of the exact shapes, without any margin.
    ///
    /// Returns `None` if the shapes are separated or if GJK or EPA could not produce a
    /// penetration deeper than the touching tolerance.
    pub fn penetration<G1, G2>(
        &self,
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
    ) -> Option<ContactInfo>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        match self.exact_contact(pos12, g1, g2) {
            ExactOutcome::Penetrating(contact) => Some(contact),
            ExactOutcome::Separated | ExactOutcome::Unreliable => None,
        }
    }

    /// Computes the penetration of the shapes inflated by the given margins, then removes the
    /// margins from the result.
    ///
    /// # Parameters
    ///
    /// - `pos12`: the position of `g2` relative to `g1`.
    /// - `margin1`, `margin2`: the margins `g1` and `g2` are inflated by. Negative margins
    ///   count as zero.
    ///
    /// # Returns
    ///
    /// The contact of the exact shapes, expressed in the local-space of `g1`: the depth is
    /// reduced by both margins and the witness points are moved back along the normal onto
    /// the exact shapes. Returns `None` if both margins are zero, if the inflated shapes do not
    /// intersect, if EPA fails, or if the depth becomes negative once the margins are removed.
    pub fn penetration_with_margins<G1, G2>(
        &self,
        pos12: &Isometry<Real>,
        g1: &G1,
        margin1: Real,
        g2: &G2,
        margin2: Real,
    ) -> Option<ContactInfo>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        if margin1 <= 0.0 && margin2 <= 0.0 {
            return None;
        }

        let inflated1 = Inflated::new(g1, margin1.max(0.0));
        let inflated2 = Inflated::new(g2, margin2.max(0.0));
        let simplex = &mut init_simplex(pos12, &inflated1, &inflated2);

        match gjk::closest_points(pos12, &inflated1, &inflated2, &self.params.gjk, simplex) {
            GJKResult::Intersection => {}
            _ => return None,
        }

        let pen = match EPA::new().closest_points(
            pos12,
            &inflated1,
            &inflated2,
            simplex,
            &self.params.epa,
        ) {
            Ok(pen) => pen,
            Err(err) => {
                log::debug!("EPA failed on the inflated shapes: {}", err);
                return None;
            }
        };

        let depth = pen.depth - (inflated1.margin + inflated2.margin);

        if depth < 0.0 {
            return None;
        }

        Some(ContactInfo::new(
            depth,
            pen.normal,
            pen.point1 - *pen.normal * inflated1.margin,
            pen.point2 + *pen.normal * inflated2.margin,
        ))
    }

    fn exact_contact<G1, G2>(&self, pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> ExactOutcome
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let tolerance = self.params.touching_tolerance;
        let simplex = &mut init_simplex(pos12, g1, g2);

        match gjk::closest_points(pos12, g1, g2, &self.params.gjk, simplex) {
            GJKResult::ClosestPoints(p1, p2, n) => {
                let dist = (p2 - p1).dot(&n);

                if dist > tolerance {
                    ExactOutcome::Separated
                } else {
                    log::trace!("Touching shapes (distance {}), using margins.", dist);
                    ExactOutcome::Unreliable
                }
            }
            GJKResult::Intersection => {
                match EPA::new().closest_points(pos12, g1, g2, simplex, &self.params.epa) {
                    Ok(pen) if pen.depth > tolerance => ExactOutcome::Penetrating(pen.into()),
                    Ok(pen) => {
                        log::trace!("Grazing contact (depth {}), using margins.", pen.depth);
                        ExactOutcome::Unreliable
                    }
                    Err(err) => {
                        log::trace!("EPA failed on the exact shapes ({}), using margins.", err);
                        ExactOutcome::Unreliable
                    }
                }
            }
            GJKResult::Inconclusive(..) => {
                log::trace!("GJK inconclusive on the exact shapes, using margins.");
                ExactOutcome::Unreliable
            }
        }
    }
}

fn init_simplex<G1, G2>(pos12: &Isometry<Real>, g1: &G1, g2: &G2) -> VoronoiSimplex
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let dir = Unit::try_new(pos12.translation.vector, crate::math::DEFAULT_EPSILON)
        .unwrap_or_else(Vector::x_axis);
    let mut simplex = VoronoiSimplex::new();
    simplex.reset(CSOPoint::from_shapes(pos12, g1, g2, &dir));
    simplex
}
