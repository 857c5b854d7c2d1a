//! The simplex used by GJK in 3D.
//!
//! Projections of the origin go through the Voronoï regions of the segment, triangle and
//! tetrahedron point queries. The simplex before the last insertion is saved, so GJK can fall
//! back to it when a new support point does not bring it closer to the origin.

use crate::math::{Point, Real};
use crate::query::gjk::{self, CSOPoint};
use crate::query::PointQueryWithLocation;
use crate::shape::{
    Segment, SegmentPointLocation, Tetrahedron, TetrahedronPointLocation, Triangle,
    TrianglePointLocation,
};

/// A simplex of dimension up to 3 that uses Voronoï regions for computing point projections.
///
/// After each projection, the simplex only keeps the vertices of the smallest sub-simplex
/// containing the projection of the origin. Flat triangles and tetrahedra are replaced by
/// their sub-feature closest to the origin before being projected on.
#[derive(Clone, Debug)]
pub struct VoronoiSimplex {
    prev_vertices: [CSOPoint; 4],
    prev_proj: [Real; 3],
    prev_dim: usize,

    vertices: [CSOPoint; 4],
    proj: [Real; 3],
    dim: usize,
}

impl Default for VoronoiSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiSimplex {
    /// Creates a new empty simplex.
    pub fn new() -> VoronoiSimplex {
        VoronoiSimplex {
            prev_vertices: [CSOPoint::origin(); 4],
            prev_proj: [0.0; 3],
            prev_dim: 0,
            vertices: [CSOPoint::origin(); 4],
            proj: [0.0; 3],
            dim: 0,
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.prev_dim = 0;
        self.dim = 0;
        self.vertices[0] = pt;
        self.prev_vertices[0] = pt;
    }

    /// Add a point to this simplex.
    ///
    /// Returns `false` if the simplex is already a tetrahedron or if `pt` is too close to one
    /// of the simplex vertices. The simplex is left unchanged in that case.
    pub fn add_point(&mut self, pt: CSOPoint) -> bool {
        if self.dim >= 3 {
            return false;
        }

        for i in 0..self.dim + 1 {
            if (self.vertices[i].point - pt.point).norm_squared() < gjk::eps_tol() {
                return false;
            }
        }

        self.prev_vertices = self.vertices;
        self.prev_proj = self.proj;
        self.prev_dim = self.dim;

        self.dim += 1;
        self.vertices[self.dim] = pt;
        true
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th by the last call to `project_origin_and_reduce`.
    pub fn proj_coord(&self, i: usize) -> Real {
        assert!(i <= self.dim, "Index out of bounds.");

        if self.dim == 0 {
            1.0
        } else {
            self.proj[i]
        }
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &CSOPoint {
        assert!(i <= self.dim, "Index out of bounds.");
        &self.vertices[i]
    }

    /// Retrieves the barycentric coordinate associated to the `i`-th before the last call to `project_origin_and_reduce`.
    pub fn prev_proj_coord(&self, i: usize) -> Real {
        assert!(i <= self.prev_dim, "Index out of bounds.");

        if self.prev_dim == 0 {
            1.0
        } else {
            self.prev_proj[i]
        }
    }

    /// The i-th point of the simplex before the last call to `project_origin_and_reduce`.
    pub fn prev_point(&self, i: usize) -> &CSOPoint {
        assert!(i <= self.prev_dim, "Index out of bounds.");
        &self.prev_vertices[i]
    }

    /// The number of vertices of this simplex, minus one.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The dimension of the simplex before the last call to `project_origin_and_reduce`.
    pub fn prev_dimension(&self) -> usize {
        self.prev_dim
    }

    /// Projects the origin on the boundary of this simplex and reduces `self` the smallest subsimplex containing the origin.
    ///
    /// Returns the result of the projection or `Point::origin()` if the origin lies inside of the simplex.
    /// The state of the simplex before projection is saved, and can be retrieved using the methods prefixed
    /// by `prev_`.
    pub fn project_origin_and_reduce(&mut self) -> Point<Real> {
        match self.dim {
            0 => self.vertices[0].point,
            1 => self.project_on_segment(),
            2 => self.project_on_triangle(),
            _ => self.project_on_tetrahedron(),
        }
    }

    fn project_on_segment(&mut self) -> Point<Real> {
        let seg = Segment::new(self.vertices[0].point, self.vertices[1].point);
        let (proj, location) = seg.project_local_point_and_get_location(&Point::origin(), true);

        match location {
            SegmentPointLocation::OnVertex(i) => self.keep_vertex(i as usize),
            SegmentPointLocation::OnEdge(coords) => {
                self.proj[0] = coords[0];
                self.proj[1] = coords[1];
            }
        }

        proj.point
    }

    fn project_on_triangle(&mut self) -> Point<Real> {
        let tri = Triangle::new(
            self.vertices[0].point,
            self.vertices[1].point,
            self.vertices[2].point,
        );

        if tri.is_affinely_dependent() {
            let best = self.closest_sub_simplex(&[[0, 1], [1, 2], [0, 2]], |s| {
                s.project_on_segment()
            });
            self.keep_vertices(&best);
            return self.project_on_segment();
        }

        let (proj, location) = tri.project_local_point_and_get_location(&Point::origin(), true);

        match location {
            TrianglePointLocation::OnVertex(i) => self.keep_vertex(i as usize),
            TrianglePointLocation::OnEdge(i, coords) => {
                let (i0, i1) = Triangle::edge_ids(i);
                self.keep_vertices(&[i0 as usize, i1 as usize]);
                self.proj[0] = coords[0];
                self.proj[1] = coords[1];
            }
            TrianglePointLocation::OnFace(_, coords) => {
                self.proj = coords;
            }
        }

        proj.point
    }

    fn project_on_tetrahedron(&mut self) -> Point<Real> {
        let tetra = Tetrahedron::new(
            self.vertices[0].point,
            self.vertices[1].point,
            self.vertices[2].point,
            self.vertices[3].point,
        );

        if tetra.is_affinely_dependent() {
            let best = self.closest_sub_simplex(&[[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]], |s| {
                s.project_on_triangle()
            });
            self.keep_vertices(&best);
            return self.project_on_triangle();
        }

        let (proj, location) = tetra.project_local_point_and_get_location(&Point::origin(), true);

        match location {
            TetrahedronPointLocation::OnVertex(i) => self.keep_vertex(i as usize),
            TetrahedronPointLocation::OnEdge(i, coords) => {
                let (i0, i1) = Tetrahedron::edge_ids(i);
                self.keep_vertices(&[i0 as usize, i1 as usize]);
                self.proj[0] = coords[0];
                self.proj[1] = coords[1];
            }
            TetrahedronPointLocation::OnFace(i, coords) => {
                let (i0, i1, i2) = Tetrahedron::face_ids(i);
                self.keep_vertices(&[i0 as usize, i1 as usize, i2 as usize]);
                self.proj = coords;
            }
            TetrahedronPointLocation::OnSolid => {}
        }

        proj.point
    }

    // Finds, among the given sub-simplices, the one whose projection of the origin is the
    // closest to the origin.
    fn closest_sub_simplex<const N: usize>(
        &self,
        candidates: &[[usize; N]],
        project: impl Fn(&mut VoronoiSimplex) -> Point<Real>,
    ) -> [usize; N] {
        let mut best = candidates[0];
        let mut best_sq_dist = Real::MAX;

        for candidate in candidates {
            let mut sub = self.clone();
            sub.keep_vertices(candidate);
            let sq_dist = project(&mut sub).coords.norm_squared();

            if sq_dist < best_sq_dist {
                best_sq_dist = sq_dist;
                best = *candidate;
            }
        }

        best
    }

    fn keep_vertex(&mut self, i: usize) {
        self.vertices[0] = self.vertices[i];
        self.proj[0] = 1.0;
        self.dim = 0;
    }

    // Keeps only the vertices with the given (increasing) indices, in that order.
    fn keep_vertices(&mut self, ids: &[usize]) {
        let old = self.vertices;

        for (k, i) in ids.iter().enumerate() {
            self.vertices[k] = old[*i];
        }

        self.dim = ids.len() - 1;
    }
}
