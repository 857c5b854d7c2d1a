//! Point projection on the simplices used by GJK and EPA.

pub use self::point_query::{PointProjection, PointQueryWithLocation};

mod point_query;
mod point_segment;
mod point_tetrahedron;
mod point_triangle;
