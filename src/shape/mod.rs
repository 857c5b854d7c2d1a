//! Shapes supported by the narrow-phase.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::collider::{Collider, DEFAULT_MARGIN};
pub use self::cone::Cone;
pub use self::convex_point_cloud::ConvexPointCloud;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::inflated::Inflated;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::shape::{ConvexShape, ShapeType};
pub use self::support_map::SupportMap;
pub use self::tetrahedron::{Tetrahedron, TetrahedronPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};

mod ball;
mod capsule;
mod collider;
mod cone;
mod convex_point_cloud;
mod cuboid;
mod cylinder;
mod inflated;
mod segment;
mod shape;
mod support_map;
mod tetrahedron;
mod triangle;
