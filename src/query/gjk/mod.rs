//! The GJK algorithm for distance computation and intersection detection.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::voronoi_simplex3::VoronoiSimplex;

mod cso_point;
mod gjk;
mod voronoi_simplex3;
