//! Projection of a point on a triangle, using the Voronoï regions of its features.

use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQueryWithLocation};
use crate::shape::{Segment, SegmentPointLocation, Triangle, TrianglePointLocation};

impl PointQueryWithLocation for Triangle {
    type Location = TrianglePointLocation;

    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
        _: bool,
    ) -> (PointProjection, Self::Location) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);

        if d1 <= 0.0 && d2 <= 0.0 {
            // Voronoï region of `a`.
            return on_vertex(pt, a, 0);
        }

        let bp = pt - b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);

        if d3 >= 0.0 && d4 <= d3 {
            // Voronoï region of `b`.
            return on_vertex(pt, b, 1);
        }

        let vc = d1 * d4 - d3 * d2;

        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            // Voronoï region of `ab`.
            let v = d1 / (d1 - d3);
            return on_edge(pt, a + ab * v, 0, [1.0 - v, v]);
        }

        let cp = pt - c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);

        if d6 >= 0.0 && d5 <= d6 {
            // Voronoï region of `c`.
            return on_vertex(pt, c, 2);
        }

        let vb = d5 * d2 - d1 * d6;

        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            // Voronoï region of `ac`.
            let w = d2 / (d2 - d6);
            return on_edge(pt, a + ac * w, 2, [1.0 - w, w]);
        }

        let va = d3 * d6 - d5 * d4;

        if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
            // Voronoï region of `bc`.
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return on_edge(pt, b + (c - b) * w, 1, [1.0 - w, w]);
        }

        let denom = va + vb + vc;

        if denom <= crate::math::DEFAULT_EPSILON * (ab.norm_squared() * ac.norm_squared()) {
            // The triangle is flat: none of the tests above caught the point so fall back to
            // the closest edge.
            return project_on_closest_edge(self, pt);
        }

        // Voronoï region of the face.
        let v = vb / denom;
        let w = vc / denom;
        let proj = a + ab * v + ac * w;
        let side = if ab.cross(&ac).dot(&ap) >= 0.0 { 0 } else { 1 };
        let inside = relative_eq!(proj, *pt);

        (
            PointProjection::new(inside, proj),
            TrianglePointLocation::OnFace(side, [1.0 - v - w, v, w]),
        )
    }
}

fn on_vertex(
    pt: &Point<Real>,
    vertex: Point<Real>,
    id: u32,
) -> (PointProjection, TrianglePointLocation) {
    let inside = relative_eq!(*pt, vertex);
    (
        PointProjection::new(inside, vertex),
        TrianglePointLocation::OnVertex(id),
    )
}

fn on_edge(
    pt: &Point<Real>,
    proj: Point<Real>,
    id: u32,
    bcoords: [Real; 2],
) -> (PointProjection, TrianglePointLocation) {
    let inside = relative_eq!(*pt, proj);
    (
        PointProjection::new(inside, proj),
        TrianglePointLocation::OnEdge(id, bcoords),
    )
}

fn project_on_closest_edge(
    tri: &Triangle,
    pt: &Point<Real>,
) -> (PointProjection, TrianglePointLocation) {
    let pts = tri.vertices();
    let mut best = None;
    let mut best_dist = Real::MAX;

    for i in 0..3 {
        let (i0, i1) = Triangle::edge_ids(i);
        let seg = Segment::new(pts[i0 as usize], pts[i1 as usize]);
        let (proj, loc) = seg.project_local_point_and_get_location(pt, true);
        let dist = na::distance_squared(pt, &proj.point);

        if dist < best_dist {
            best_dist = dist;
            let loc = match loc {
                SegmentPointLocation::OnVertex(v) => {
                    TrianglePointLocation::OnVertex(if v == 0 { i0 } else { i1 })
                }
                SegmentPointLocation::OnEdge(uv) => TrianglePointLocation::OnEdge(i, uv),
            };
            best = Some((proj, loc));
        }
    }

    best.unwrap_or_else(|| on_vertex(pt, tri.a, 0))
}
