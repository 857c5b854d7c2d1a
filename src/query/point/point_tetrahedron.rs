//! Projection of a point on a tetrahedron.
//!
//! The point is tested against the plane of each face. Only the faces it lies outside of
//! are projected on, and the closest projection wins.

use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQueryWithLocation};
use crate::shape::{Tetrahedron, TetrahedronPointLocation, TrianglePointLocation};

impl PointQueryWithLocation for Tetrahedron {
    type Location = TetrahedronPointLocation;

    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
        solid: bool,
    ) -> (PointProjection, Self::Location) {
        let vertices = self.vertices();
        let mut outside_any = false;
        let mut best: Option<(PointProjection, TetrahedronPointLocation)> = None;
        let mut best_dist = Real::MAX;

        for face_id in 0..4 {
            let face = self.face(face_id);
            let normal = face.scaled_normal();
            let opposite = vertices[Tetrahedron::opposite_vertex_id(face_id) as usize];
            let side_pt = (pt - face.a).dot(&normal);
            let side_opp = (opposite - face.a).dot(&normal);

            // A flat tetrahedron has no interior: every face must be considered.
            let outside = side_opp == 0.0 || side_pt * side_opp < 0.0;

            if outside || !solid {
                outside_any |= outside;
                let (proj, loc) = face.project_local_point_and_get_location(pt, true);
                let dist = na::distance_squared(pt, &proj.point);

                if dist < best_dist {
                    best_dist = dist;
                    best = Some((proj, face_location_to_tetrahedron(face_id, loc)));
                }
            }
        }

        if !outside_any {
            if solid {
                return (
                    PointProjection::new(true, *pt),
                    TetrahedronPointLocation::OnSolid,
                );
            } else if let Some((proj, loc)) = best {
                return (PointProjection::new(true, proj.point), loc);
            }
        }

        best.unwrap_or((
            PointProjection::new(true, *pt),
            TetrahedronPointLocation::OnSolid,
        ))
    }
}

fn face_location_to_tetrahedron(face_id: u32, loc: TrianglePointLocation) -> TetrahedronPointLocation {
    let (i0, i1, i2) = Tetrahedron::face_ids(face_id);
    let ids = [i0, i1, i2];

    match loc {
        TrianglePointLocation::OnVertex(i) => TetrahedronPointLocation::OnVertex(ids[i as usize]),
        TrianglePointLocation::OnEdge(i, bcoords) => {
            let (e0, e1) = crate::shape::Triangle::edge_ids(i);
            let edge_id = tetrahedron_edge_id(ids[e0 as usize], ids[e1 as usize]);
            TetrahedronPointLocation::OnEdge(edge_id, bcoords)
        }
        TrianglePointLocation::OnFace(_, bcoords) => {
            TetrahedronPointLocation::OnFace(face_id, bcoords)
        }
    }
}

// Inverse of `Tetrahedron::edge_ids`, with `i < j`.
fn tetrahedron_edge_id(i: u32, j: u32) -> u32 {
    match (i, j) {
        (0, 1) => 0,
        (0, 2) => 1,
        (0, 3) => 2,
        (1, 2) => 3,
        (1, 3) => 4,
        _ => 5,
    }
}
