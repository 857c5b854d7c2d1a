use crate::math::{Point, Real, Vector};
use crate::shape::{
    Ball, Capsule, Cone, ConvexPointCloud, Cuboid, Cylinder, Segment, SupportMap, Tetrahedron,
    Triangle,
};
use na::Unit;

/// Enum representing the type of a convex shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A cylinder shape.
    Cylinder,
    /// A cone shape.
    Cone,
    /// A segment shape.
    Segment,
    /// A triangle shape.
    Triangle,
    /// A tetrahedron shape.
    Tetrahedron,
    /// The convex hull of a point cloud.
    ConvexPointCloud,
}

/// A convex shape, as accepted by the narrow-phase.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ConvexShape {
    /// A ball.
    Ball(Ball),
    /// A box.
    Cuboid(Cuboid),
    /// A capsule.
    Capsule(Capsule),
    /// A cylinder.
    Cylinder(Cylinder),
    /// A cone.
    Cone(Cone),
    /// A segment.
    Segment(Segment),
    /// A triangle.
    Triangle(Triangle),
    /// A tetrahedron.
    Tetrahedron(Tetrahedron),
    /// The convex hull of a point cloud.
    ConvexPointCloud(ConvexPointCloud),
}

macro_rules! dispatch(
    ($self: ident, $s: ident => $e: expr) => {
        match $self {
            ConvexShape::Ball($s) => $e,
            ConvexShape::Cuboid($s) => $e,
            ConvexShape::Capsule($s) => $e,
            ConvexShape::Cylinder($s) => $e,
            ConvexShape::Cone($s) => $e,
            ConvexShape::Segment($s) => $e,
            ConvexShape::Triangle($s) => $e,
            ConvexShape::Tetrahedron($s) => $e,
            ConvexShape::ConvexPointCloud($s) => $e,
        }
    }
);

impl ConvexShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ConvexShape::Ball(_) => ShapeType::Ball,
            ConvexShape::Cuboid(_) => ShapeType::Cuboid,
            ConvexShape::Capsule(_) => ShapeType::Capsule,
            ConvexShape::Cylinder(_) => ShapeType::Cylinder,
            ConvexShape::Cone(_) => ShapeType::Cone,
            ConvexShape::Segment(_) => ShapeType::Segment,
            ConvexShape::Triangle(_) => ShapeType::Triangle,
            ConvexShape::Tetrahedron(_) => ShapeType::Tetrahedron,
            ConvexShape::ConvexPointCloud(_) => ShapeType::ConvexPointCloud,
        }
    }

    /// Converts this shape into a ball if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            ConvexShape::Ball(b) => Some(b),
            _ => None,
        }
    }
}

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dispatch!(self, s => s.local_support_point(dir))
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        dispatch!(self, s => s.local_support_point_toward(dir))
    }
}

macro_rules! impl_from_shape(
    ($($variant: ident),*) => {$(
        impl From<$variant> for ConvexShape {
            fn from(shape: $variant) -> Self {
                ConvexShape::$variant(shape)
            }
        }
    )*}
);

impl_from_shape!(
    Ball,
    Cuboid,
    Capsule,
    Cylinder,
    Cone,
    Segment,
    Triangle,
    Tetrahedron,
    ConvexPointCloud
);
