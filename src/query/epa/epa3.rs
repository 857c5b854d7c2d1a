//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.
//!
//! # How EPA Works
//!
//! GJK only tells whether the origin lies inside the Minkowski difference of two shapes. When
//! it does, EPA starts from the tetrahedron GJK ended with and grows it into a polytope that
//! approximates the boundary of the Minkowski difference:
//!
//! 1. The face closest to the origin is popped from a priority queue. Its distance is a
//!    lower bound of the penetration depth.
//! 2. The support point along the face normal is computed. Its distance along that normal is
//!    an upper bound of the depth.
//! 3. If both bounds are within tolerance, the face gives the depth and the contact normal.
//!    Otherwise every face visible from the support point is removed and the hole is closed
//!    with new faces joining the silhouette to the support point.
//!
//! # Failures
//!
//! EPA works on a tetrahedron enclosing the origin, which flat or touching Minkowski
//! differences cannot provide. Numerical errors can also make the polytope non-convex or make
//! the bounds cross. Those cases are reported as a [`Degenerate`] error so the caller can
//! retry on shapes inflated by their margins.

use crate::math::{Isometry, Point, Real, Vector};
use crate::query::gjk::{self, CSOPoint, VoronoiSimplex};
use crate::query::PointQueryWithLocation;
use crate::shape::{SupportMap, Triangle, TrianglePointLocation};
use crate::utils;
use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use na::{self, Unit};
use smallvec::SmallVec;

/// Parameters of the Expanding Polytope Algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaParams {
    /// The expansion stops when the new support point improves on the closest face by less
    /// than this fraction of the current upper bound of the depth.
    pub rel_tolerance: Real,
    /// The maximum number of expansion steps.
    pub max_iterations: usize,
}

impl Default for EpaParams {
    fn default() -> Self {
        Self {
            rel_tolerance: 1.0e-3,
            max_iterations: 100,
        }
    }
}

/// The penetration between two shapes, as computed by EPA.
///
/// Everything is expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The penetration depth, always non-negative.
    pub depth: Real,
    /// The unit contact normal, pointing from the first shape toward the second one.
    pub normal: Unit<Vector<Real>>,
    /// The deepest point of the first shape inside of the second one.
    pub point1: Point<Real>,
    /// The deepest point of the second shape inside of the first one.
    pub point2: Point<Real>,
    /// `false` if the expansion stopped because of its iteration budget or of a numerical stall
    /// instead of reaching the requested tolerance.
    pub converged: bool,
}

/// Reasons why EPA could not compute a penetration.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum Degenerate {
    /// The initial simplex is not a tetrahedron.
    #[error("EPA must be initialized with a tetrahedron, found a simplex of dimension {0}.")]
    NotATetrahedron(usize),
    /// The origin is not inside of the polytope.
    #[error("the origin is not enclosed by the polytope.")]
    OriginOutside,
    /// No edge of the polytope separates the faces visible from the new support point.
    #[error("failed to extract a silhouette from the polytope.")]
    EmptySilhouette,
    /// All the silhouette edges belong to deleted faces.
    #[error("all the silhouette edges belong to deleted faces.")]
    DanglingSilhouette,
    /// A support point had non-finite coordinates.
    #[error("found a non-finite support point.")]
    NonFinite,
    /// All the faces of the polytope were discarded before convergence.
    #[error("the polytope ran out of faces before convergence.")]
    Exhausted,
    /// The closest face of the polytope is farther than a support point found earlier.
    #[error("the lower bound of the depth exceeds its upper bound ({lower} > {upper}).")]
    InconsistentBounds {
        /// The distance of the closest face.
        lower: Real,
        /// The smallest support distance found so far.
        upper: Real,
    },
}

#[derive(Copy, Clone, PartialEq)]
struct FaceId {
    id: usize,
    neg_dist: Real,
}

impl FaceId {
    fn new(id: usize, neg_dist: Real) -> Result<Self, Degenerate> {
        if neg_dist > gjk::eps_tol() {
            Err(Degenerate::OriginOutside)
        } else {
            Ok(FaceId { id, neg_dist })
        }
    }
}

impl Eq for FaceId {}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.neg_dist < other.neg_dist {
            Ordering::Less
        } else if self.neg_dist > other.neg_dist {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[derive(Clone, Debug)]
struct Face {
    pts: [usize; 3],
    adj: [usize; 3],
    normal: Unit<Vector<Real>>,
    bcoords: [Real; 3],
    deleted: bool,
}

impl Face {
    fn new_with_proj(
        vertices: &[CSOPoint],
        bcoords: [Real; 3],
        pts: [usize; 3],
        adj: [usize; 3],
    ) -> Self {
        // Flat faces get a zero normal: they are never seen as separating during the
        // silhouette computation.
        let normal = utils::ccw_face_normal([
            &vertices[pts[0]].point,
            &vertices[pts[1]].point,
            &vertices[pts[2]].point,
        ])
        .unwrap_or_else(|| Unit::new_unchecked(na::zero()));

        Face {
            pts,
            bcoords,
            adj,
            normal,
            deleted: false,
        }
    }

    // Returns the face and whether the projection of the origin lies on it.
    fn new(vertices: &[CSOPoint], pts: [usize; 3], adj: [usize; 3]) -> (Self, bool) {
        let tri = Triangle::new(
            vertices[pts[0]].point,
            vertices[pts[1]].point,
            vertices[pts[2]].point,
        );
        let (proj, loc) = tri.project_local_point_and_get_location(&Point::<Real>::origin(), true);

        match loc {
            TrianglePointLocation::OnVertex(_) | TrianglePointLocation::OnEdge(_, _) => {
                let eps_tol = crate::math::DEFAULT_EPSILON * 100.0;
                let face = Self::new_with_proj(vertices, loc.barycentric_coordinates(), pts, adj);
                // The origin may project onto the plane of the face exactly on one of its
                // edges, e.g. on the diagonal splitting a flat side of the polytope.
                let to_origin = -proj.point.coords;
                let tangent = to_origin - *face.normal * face.normal.dot(&to_origin);
                let inside = proj.is_inside_eps(&Point::<Real>::origin(), eps_tol)
                    || tangent.norm() <= eps_tol * (1.0 + to_origin.norm());
                (face, inside)
            }
            TrianglePointLocation::OnFace(_, bcoords) => {
                (Self::new_with_proj(vertices, bcoords, pts, adj), true)
            }
        }
    }

    fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        (
            vertices[self.pts[0]].orig1 * self.bcoords[0]
                + vertices[self.pts[1]].orig1.coords * self.bcoords[1]
                + vertices[self.pts[2]].orig1.coords * self.bcoords[2],
            vertices[self.pts[0]].orig2 * self.bcoords[0]
                + vertices[self.pts[1]].orig2.coords * self.bcoords[1]
                + vertices[self.pts[2]].orig2.coords * self.bcoords[2],
        )
    }

    fn next_ccw_pt_id(&self, id: usize) -> usize {
        if self.pts[0] == id {
            1
        } else if self.pts[1] == id {
            2
        } else {
            if self.pts[2] != id {
                log::debug!(
                    "Hit unexpected state in EPA: found index {}, expected: {}.",
                    self.pts[2],
                    id
                );
            }

            0
        }
    }

    fn can_be_seen_by(&self, vertices: &[CSOPoint], point: usize, opp_pt_id: usize) -> bool {
        let p0 = &vertices[self.pts[opp_pt_id]].point;
        let p1 = &vertices[self.pts[(opp_pt_id + 1) % 3]].point;
        let p2 = &vertices[self.pts[(opp_pt_id + 2) % 3]].point;
        let pt = &vertices[point].point;

        // NOTE: a zero dot product must count as visible so flat faces, which have a
        // zero normal, get removed.
        (*pt - *p0).dot(&self.normal) >= -gjk::eps_tol()
            || Triangle::new(*p1, *p2, *pt).is_affinely_dependent()
    }
}

struct SilhouetteEdge {
    face_id: usize,
    opp_pt_id: usize,
}

impl SilhouetteEdge {
    fn new(face_id: usize, opp_pt_id: usize) -> Self {
        SilhouetteEdge { face_id, opp_pt_id }
    }
}

/// The Expanding Polytope Algorithm in 3D.
///
/// Starting from a tetrahedron of the Minkowski difference that encloses the origin, EPA
/// repeatedly pushes the face closest to the origin outward along its normal until the
/// polytope matches the boundary of the Minkowski difference. The last closest face gives
/// the penetration depth and the contact normal.
///
/// The same `EPA` can be reused for several queries to keep its buffers allocated, but no
/// information is carried from one query to the next.
#[derive(Default)]
pub struct EPA {
    vertices: Vec<CSOPoint>,
    faces: Vec<Face>,
    silhouette: SmallVec<[SilhouetteEdge; 16]>,
    heap: BinaryHeap<FaceId>,
}

impl EPA {
    /// Creates a new instance of the 3D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.heap.clear();
        self.silhouette.clear();
    }

    /// Computes the penetration between two intersecting shapes.
    ///
    /// # Parameters
    ///
    /// - `pos12`: the position of `g2` relative to `g1`.
    /// - `g1`, `g2`: the two shapes.
    /// - `simplex`: the tetrahedron left by `gjk::closest_points` when it returned
    ///   `GJKResult::Intersection`.
    /// - `params`: the tolerance and iteration budget of the expansion.
    ///
    /// # Returns
    ///
    /// The penetration, expressed in the local-space of `g1` with a normal pointing from `g1`
    /// toward `g2`. When the iteration budget runs out, the face that gave the smallest upper
    /// bound of the depth is returned with `converged` set to `false`. An error is returned
    /// if the polytope degenerates before any reliable face is found.
    pub fn closest_points<G1, G2>(
        &mut self,
        pos12: &Isometry<Real>,
        g1: &G1,
        g2: &G2,
        simplex: &VoronoiSimplex,
        params: &EpaParams,
    ) -> Result<Penetration, Degenerate>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let _eps = crate::math::DEFAULT_EPSILON;
        let _eps_tol = _eps * 100.0;

        self.reset();

        if simplex.dimension() != 3 {
            return Err(Degenerate::NotATetrahedron(simplex.dimension()));
        }

        /*
         * Initialization.
         */
        for i in 0..4 {
            self.vertices.push(*simplex.point(i));
        }

        let dp1 = self.vertices[1] - self.vertices[0];
        let dp2 = self.vertices[2] - self.vertices[0];
        let dp3 = self.vertices[3] - self.vertices[0];

        if dp1.cross(&dp2).dot(&dp3) > 0.0 {
            self.vertices.swap(1, 2)
        }

        let pts = [[0, 1, 2], [1, 3, 2], [0, 2, 3], [0, 3, 1]];
        let adj = [[3, 1, 2], [3, 2, 0], [0, 1, 3], [2, 1, 0]];

        for i in 0..4 {
            let (face, proj_inside) = Face::new(&self.vertices, pts[i], adj[i]);
            self.faces.push(face);

            if proj_inside {
                let dist = self.faces[i].normal.dot(&self.vertices[pts[i][0]].point.coords);
                self.heap.push(FaceId::new(i, -dist)?);
            }
        }

        let mut best_face_id = match self.heap.peek() {
            Some(face_id) => *face_id,
            None => {
                log::debug!("EPA: failed to project the origin on the initial simplex.");
                return Err(Degenerate::OriginOutside);
            }
        };

        let mut niter = 0;
        let mut max_dist = Real::MAX;

        /*
         * Run the expansion.
         */
        while let Some(face_id) = self.heap.pop() {
            let face = self.faces[face_id.id].clone();

            if face.deleted {
                continue;
            }

            let cso_point = CSOPoint::from_shapes(pos12, g1, g2, &face.normal);

            if !cso_point.is_finite() {
                log::debug!("EPA: non-finite support point along {:?}.", face.normal);
                return Err(Degenerate::NonFinite);
            }

            let support_point_id = self.vertices.len();
            self.vertices.push(cso_point);

            // Faces are popped by increasing distance so `curr_dist` is a lower bound of the
            // depth, and the support distance along any face normal is an upper bound.
            let curr_dist = -face_id.neg_dist;
            let candidate_max_dist = cso_point.point.coords.dot(&face.normal);

            if candidate_max_dist < max_dist {
                best_face_id = face_id;
                max_dist = candidate_max_dist;
            }

            let tolerance = _eps_tol.max(params.rel_tolerance * max_dist);

            if curr_dist > max_dist + tolerance {
                log::debug!(
                    "EPA: inconsistent depth bounds, lower: {}, upper: {}.",
                    curr_dist,
                    max_dist
                );
                return Err(Degenerate::InconsistentBounds {
                    lower: curr_dist,
                    upper: max_dist,
                });
            }

            if max_dist - curr_dist < tolerance {
                return Ok(self.penetration(face_id, true));
            }

            self.faces[face_id.id].deleted = true;

            let adj_opp_pt_id1 = self.faces[face.adj[0]].next_ccw_pt_id(face.pts[0]);
            let adj_opp_pt_id2 = self.faces[face.adj[1]].next_ccw_pt_id(face.pts[1]);
            let adj_opp_pt_id3 = self.faces[face.adj[2]].next_ccw_pt_id(face.pts[2]);

            self.compute_silhouette(support_point_id, face.adj[0], adj_opp_pt_id1);
            self.compute_silhouette(support_point_id, face.adj[1], adj_opp_pt_id2);
            self.compute_silhouette(support_point_id, face.adj[2], adj_opp_pt_id3);

            let first_new_face_id = self.faces.len();

            if self.silhouette.is_empty() {
                log::debug!("EPA: failed to extract a silhouette.");
                return Err(Degenerate::EmptySilhouette);
            }

            for edge in &self.silhouette {
                if !self.faces[edge.face_id].deleted {
                    let new_face_id = self.faces.len();

                    let face_adj = &mut self.faces[edge.face_id];
                    let pt_id1 = face_adj.pts[(edge.opp_pt_id + 2) % 3];
                    let pt_id2 = face_adj.pts[(edge.opp_pt_id + 1) % 3];

                    let pts = [pt_id1, pt_id2, support_point_id];
                    let adj = [edge.face_id, new_face_id + 1, new_face_id - 1];
                    let new_face = Face::new(&self.vertices, pts, adj);

                    face_adj.adj[(edge.opp_pt_id + 1) % 3] = new_face_id;

                    self.faces.push(new_face.0);

                    if new_face.1 {
                        let pt = self.vertices[self.faces[new_face_id].pts[0]].point.coords;
                        let dist = self.faces[new_face_id].normal.dot(&pt);

                        if dist < curr_dist {
                            // Numerical errors made the polytope non-convex: keep the face we
                            // were trying to expand.
                            let (point1, point2) = face.closest_points(&self.vertices);
                            return Ok(Penetration {
                                depth: curr_dist.max(0.0),
                                normal: face.normal,
                                point1,
                                point2,
                                converged: false,
                            });
                        }

                        self.heap.push(FaceId::new(new_face_id, -dist)?);
                    }
                }
            }

            if first_new_face_id == self.faces.len() {
                log::debug!("EPA: all the silhouette edges belong to deleted faces.");
                return Err(Degenerate::DanglingSilhouette);
            }

            let last_face_id = self.faces.len() - 1;
            self.faces[first_new_face_id].adj[2] = last_face_id;
            self.faces[last_face_id].adj[1] = first_new_face_id;

            self.silhouette.clear();

            niter += 1;
            if niter >= params.max_iterations {
                // The result is probably close enough even if the requested precision
                // was not reached.
                log::debug!(
                    "EPA: no convergence after {} iterations, depth in [{}, {}].",
                    niter,
                    curr_dist,
                    max_dist
                );
                return Ok(self.penetration(best_face_id, false));
            }
        }

        log::debug!("EPA: the polytope ran out of faces.");
        Err(Degenerate::Exhausted)
    }

    fn penetration(&self, face_id: FaceId, converged: bool) -> Penetration {
        let face = &self.faces[face_id.id];
        let (point1, point2) = face.closest_points(&self.vertices);

        Penetration {
            depth: (-face_id.neg_dist).max(0.0),
            normal: face.normal,
            point1,
            point2,
            converged,
        }
    }

    fn compute_silhouette(&mut self, point: usize, id: usize, opp_pt_id: usize) {
        if !self.faces[id].deleted {
            if !self.faces[id].can_be_seen_by(&self.vertices, point, opp_pt_id) {
                self.silhouette.push(SilhouetteEdge::new(id, opp_pt_id));
            } else {
                self.faces[id].deleted = true;

                let adj_pt_id1 = (opp_pt_id + 2) % 3;
                let adj_pt_id2 = opp_pt_id;

                let adj1 = self.faces[id].adj[adj_pt_id1];
                let adj2 = self.faces[id].adj[adj_pt_id2];

                let adj_opp_pt_id1 =
                    self.faces[adj1].next_ccw_pt_id(self.faces[id].pts[adj_pt_id1]);
                let adj_opp_pt_id2 =
                    self.faces[adj2].next_ccw_pt_id(self.faces[id].pts[adj_pt_id2]);

                self.compute_silhouette(point, adj1, adj_opp_pt_id1);
                self.compute_silhouette(point, adj2, adj_opp_pt_id2);
            }
        }
    }
}
