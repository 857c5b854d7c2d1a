//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! # How GJK Works
//!
//! GJK never looks at the shapes directly. It works on their **Minkowski difference**
//! `A - B`, also called Configuration Space Obstacle (CSO), through the support points of
//! both shapes:
//!
//! 1. The origin is projected on a simplex (point, segment, triangle or tetrahedron) of
//!    CSO points, and the simplex is reduced to the smallest feature holding the projection.
//! 2. A new support point is taken in the direction going from the projection toward the
//!    origin and added to the simplex.
//! 3. This stops when the projection no longer gets closer to the origin, in which case the
//!    shapes are separated and the projection gives their closest points, or when the
//!    simplex becomes a tetrahedron enclosing the origin, in which case the shapes intersect.
//!
//! # Touching and Flat Shapes
//!
//! When the origin lies on the boundary of the CSO, or when the CSO has no thickness around
//! the origin, neither answer is reliable. [`closest_points`] first tries to blow the
//! simplex up into a tetrahedron with [`expand_to_tetrahedron`], and reports
//! [`GJKResult::Inconclusive`] if that fails. The narrow-phase then retries on the shapes
//! inflated by their margins.
//!
//! # Main Functions in This Module
//!
//! - [`closest_points`]: distance, closest points, or intersection of two support maps.
//! - [`expand_to_tetrahedron`]: turns a degenerate simplex enclosing the origin into a
//!   tetrahedron suitable for EPA.

use na::Unit;

use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
///
/// All points and vectors are expressed in the local-space of the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting.
    ///
    /// The simplex given to GJK now holds a tetrahedron containing the origin, possibly on its
    /// boundary. It can be used to initialize EPA.
    Intersection,
    /// The shapes are separated.
    ///
    /// Contains the closest point on the first shape, the closest point on the second shape,
    /// and the unit direction from the first shape toward the second one.
    ClosestPoints(Point<Real>, Point<Real>, Unit<Vector<Real>>),
    /// GJK could not decide whether the shapes intersect.
    ///
    /// This happens when the origin lies on the boundary of a flat or touching Minkowski
    /// difference, when the iteration budget is exhausted, or when a support point is not
    /// finite. Contains the best estimate of the closest points and separating direction.
    Inconclusive(Point<Real>, Point<Real>, Unit<Vector<Real>>),
}

/// Parameters of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkParams {
    /// The relative error on the separation distance below which GJK stops.
    pub rel_error: Real,
    /// The maximum number of iterations before GJK gives up.
    pub max_iterations: usize,
}

impl GjkParams {
    /// The squared relative error, as used by the termination test.
    #[inline]
    pub fn rel_error_squared(&self) -> Real {
        self.rel_error * self.rel_error
    }
}

impl Default for GjkParams {
    fn default() -> Self {
        Self {
            rel_error: 1.0e-3,
            max_iterations: 64,
        }
    }
}

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 10.0
}

/// Computes the closest points between two shapes, or determines that they intersect.
///
/// # Parameters
///
/// - `pos12`: the position of the second shape relative to the first one.
/// - `g1`, `g2`: the two shapes.
/// - `params`: the relative error and iteration budget of the algorithm.
/// - `simplex`: must hold at least one point of the Minkowski difference of both shapes,
///   typically obtained with `CSOPoint::from_shapes`.
///
/// # Returns
///
/// - `GJKResult::Intersection` if the shapes overlap. The simplex is then left as a
///   tetrahedron enclosing the origin, ready for EPA.
/// - `GJKResult::ClosestPoints` with the closest points in the local-space of `g1` if the
///   shapes are separated or touching.
/// - `GJKResult::Inconclusive` if the origin sits on a flat Minkowski difference, if the
///   iteration budget runs out, or if a support point is not finite.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    params: &GjkParams,
    simplex: &mut VoronoiSimplex,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol: Real = eps_tol();
    let rel_error_squared = params.rel_error_squared();

    let mut proj = simplex.project_origin_and_reduce();
    let mut old_dir = Vector::x_axis();
    let mut max_bound = Real::MAX;
    let mut niter = 0;

    loop {
        let old_max_bound = max_bound;

        let dir = if let Some((new_dir, dist)) = Unit::try_new_and_get(-proj.coords, _eps_tol) {
            max_bound = dist * dist;
            new_dir
        } else {
            // The origin is on the simplex.
            return origin_on_simplex(pos12, g1, g2, simplex, old_dir);
        };

        if max_bound >= old_max_bound {
            // The distance stopped decreasing: the previous simplex was the best one.
            let (p1, p2) = result(simplex, true);
            return GJKResult::ClosestPoints(p1, p2, old_dir);
        }

        let cso_point = CSOPoint::from_shapes(pos12, g1, g2, &dir);

        if !cso_point.is_finite() {
            log::debug!("GJK: non-finite support point in direction {:?}.", dir);
            let (p1, p2) = result(simplex, false);
            return GJKResult::Inconclusive(p1, p2, dir);
        }

        let v_dot_w = proj.coords.dot(&cso_point.point.coords);

        if max_bound - v_dot_w <= rel_error_squared * max_bound {
            // The distance found has a good enough precision.
            let (p1, p2) = result(simplex, false);
            return GJKResult::ClosestPoints(p1, p2, dir);
        }

        if !simplex.add_point(cso_point) {
            let (p1, p2) = result(simplex, false);
            return GJKResult::ClosestPoints(p1, p2, dir);
        }

        old_dir = dir;
        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            if v_dot_w >= _eps_tol * max_bound.sqrt() {
                // The whole difference lies on the positive side of `-dir`: the origin
                // can't be inside, this is a numerical artifact.
                let (p1, p2) = result(simplex, true);
                return GJKResult::ClosestPoints(p1, p2, old_dir);
            } else {
                return GJKResult::Intersection;
            }
        }

        niter += 1;

        if niter >= params.max_iterations {
            log::debug!(
                "GJK: no convergence after {} iterations, distance estimate: {}.",
                niter,
                max_bound.sqrt()
            );
            let (p1, p2) = result(simplex, false);
            return GJKResult::Inconclusive(p1, p2, old_dir);
        }
    }
}

// Handles the case where the origin lies on the current simplex. A full tetrahedron means
// intersection. Lower-dimensional simplices are blown up into a tetrahedron if the
// Minkowski difference has some thickness around the origin.
fn origin_on_simplex<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut VoronoiSimplex,
    dir: Unit<Vector<Real>>,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    if simplex.dimension() == DIM || expand_to_tetrahedron(pos12, g1, g2, simplex) {
        GJKResult::Intersection
    } else {
        let (p1, p2) = result(simplex, false);
        GJKResult::Inconclusive(p1, p2, dir)
    }
}

/// Tries to turn a segment or a triangle containing the origin into a tetrahedron that
/// still contains the origin.
///
/// New vertices are support points of the Minkowski difference taken orthogonally to the
/// current simplex.
///
/// # Returns
///
/// `true` if `simplex` was replaced by a tetrahedron enclosing the origin. On `false`, the
/// simplex is left untouched.
pub fn expand_to_tetrahedron<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut VoronoiSimplex,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol = eps_tol();
    let mut expanded = simplex.clone();

    if expanded.dimension() == 0 {
        return false;
    }

    if expanded.dimension() == 1 {
        let a = expanded.point(0).point;
        let axis = match Unit::try_new(expanded.point(1).point - a, _eps_tol) {
            Some(axis) => axis,
            None => return false,
        };

        let mut basis = [Vector::zeros(); 2];
        let mut nbasis = 0;
        Vector::orthonormal_subspace_basis(&[*axis], |e| {
            basis[nbasis] = *e;
            nbasis += 1;
            nbasis < 2
        });

        let mut found = false;

        'search: for dir in &basis[..nbasis] {
            for dir in [*dir, -*dir] {
                let candidate = CSOPoint::from_shapes(pos12, g1, g2, &dir);

                if !candidate.is_finite() {
                    continue;
                }

                let ac = candidate.point - a;
                let dist_to_line = (ac - *axis * axis.dot(&ac)).norm();

                if dist_to_line > _eps_tol && expanded.add_point(candidate) {
                    found = true;
                    break 'search;
                }
            }
        }

        if !found {
            return false;
        }
    }

    if expanded.dimension() == 2 {
        let a = expanded.point(0).point;
        let ab = expanded.point(1).point - a;
        let ac = expanded.point(2).point - a;
        let normal = match Unit::try_new(ab.cross(&ac), _eps_tol) {
            Some(normal) => normal,
            None => return false,
        };

        let mut found = false;

        for dir in [*normal, -*normal] {
            let candidate = CSOPoint::from_shapes(pos12, g1, g2, &dir);

            if !candidate.is_finite() {
                continue;
            }

            let dist_to_plane = normal.dot(&(candidate.point - a)).abs();

            if dist_to_plane > _eps_tol && expanded.add_point(candidate) {
                found = true;
                break;
            }
        }

        if !found {
            return false;
        }
    }

    let _ = expanded.project_origin_and_reduce();

    if expanded.dimension() == DIM {
        *simplex = expanded;
        true
    } else {
        false
    }
}

fn result(simplex: &VoronoiSimplex, prev: bool) -> (Point<Real>, Point<Real>) {
    let mut res = (Point::origin(), Point::origin());
    if prev {
        for i in 0..simplex.prev_dimension() + 1 {
            let coord = simplex.prev_proj_coord(i);
            let point = simplex.prev_point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    } else {
        for i in 0..simplex.dimension() + 1 {
            let coord = simplex.proj_coord(i);
            let point = simplex.point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    }
}
