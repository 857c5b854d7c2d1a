//! Definition of the tetrahedron shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{SupportMap, Triangle};
use crate::utils;

/// A tetrahedron with 4 vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
#[repr(C)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

/// Logical description of the location of a point on a tetrahedron.
#[derive(Copy, Clone, Debug)]
pub enum TetrahedronPointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// Edges are numbered as in [`Tetrahedron::edge_ids`].
    OnEdge(u32, [Real; 2]),
    /// The point lies on a triangular face interior.
    ///
    /// Faces are numbered as in [`Tetrahedron::face_ids`].
    OnFace(u32, [Real; 3]),
    /// The point lies inside of the tetrahedron.
    OnSolid,
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// The vertices of this tetrahedron.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ABD.
    /// The 2-nd face is the triangle ACD.
    /// The 3-rd face is the triangle BCD.
    pub fn face(&self, i: u32) -> Triangle {
        let pts = self.vertices();
        let (i0, i1, i2) = Self::face_ids(i);
        Triangle::new(pts[i0 as usize], pts[i1 as usize], pts[i2 as usize])
    }

    /// Returns the indices of the vertices of the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ABD.
    /// The 2-nd face is the triangle ACD.
    /// The 3-rd face is the triangle BCD.
    pub fn face_ids(i: u32) -> (u32, u32, u32) {
        match i {
            0 => (0, 1, 2),
            1 => (0, 1, 3),
            2 => (0, 2, 3),
            3 => (1, 2, 3),
            _ => panic!("Tetrahedron face index out of bounds (must be < 4)."),
        }
    }

    /// The index of the vertex that does not belong to the i-th face.
    pub fn opposite_vertex_id(face: u32) -> u32 {
        3 - face
    }

    /// Returns the indices of the vertices of the i-th edge of this tetrahedron.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment AD.
    /// The 3-rd edge is the segment BC.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    pub fn edge_ids(i: u32) -> (u32, u32) {
        match i {
            0 => (0, 1),
            1 => (0, 2),
            2 => (0, 3),
            3 => (1, 2),
            4 => (1, 3),
            5 => (2, 3),
            _ => panic!("Tetrahedron edge index out of bounds (must be < 6)."),
        }
    }

    /// Tests if this tetrahedron is flat, i.e., its four points are almost coplanar.
    ///
    /// The test is scale-independent: the volume spanned by the edges leaving `a` is compared
    /// to the product of their lengths.
    pub fn is_affinely_dependent(&self) -> bool {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;
        let scale = ab.norm() * ac.norm() * ad.norm();

        ab.cross(&ac).dot(&ad).abs() <= DEFAULT_EPSILON * 100.0 * scale
    }
}

impl SupportMap for Tetrahedron {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.vertices())
    }
}
