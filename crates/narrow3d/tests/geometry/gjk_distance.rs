use na::{Isometry3, Vector3};
use narrow3d::query::{self, gjk, gjk::GJKResult, gjk::VoronoiSimplex};
use narrow3d::shape::{Ball, Capsule, Collider, Cuboid};

#[test]
fn separated_balls_distance() {
    let ball = Collider::new(Ball::new(1.0));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(3.0, 0.0, 0.0);

    assert_relative_eq!(query::distance(&pos1, &ball, &pos2, &ball), 1.0, epsilon = 1.0e-4);
    assert!(query::contact(&pos1, &ball, &pos2, &ball).is_none());

    let big = Collider::new(Ball::new(2.0));
    let pos2 = Isometry3::translation(0.0, -4.0, 4.0);
    let expected = 32.0f32.sqrt() - 3.0;
    assert_relative_eq!(query::distance(&pos1, &ball, &pos2, &big), expected, epsilon = 1.0e-3);
    assert!(query::contact(&pos1, &ball, &pos2, &big).is_none());
}

#[test]
fn separated_balls_closest_points() {
    let ball = Ball::new(1.0);
    let pos12 = Isometry3::translation(5.0, 0.0, 0.0);
    let mut simplex = VoronoiSimplex::new();
    simplex.reset(gjk::CSOPoint::from_shapes(
        &pos12,
        &ball,
        &ball,
        &Vector3::x(),
    ));

    match gjk::closest_points(&pos12, &ball, &ball, &gjk::GjkParams::default(), &mut simplex) {
        GJKResult::ClosestPoints(p1, p2, n) => {
            assert_relative_eq!(p1, na::Point3::new(1.0, 0.0, 0.0), epsilon = 1.0e-4);
            assert_relative_eq!(p2, na::Point3::new(4.0, 0.0, 0.0), epsilon = 1.0e-4);
            assert_relative_eq!(n, Vector3::x_axis(), epsilon = 1.0e-4);
            assert_relative_eq!((p2 - p1).dot(&n), 3.0, epsilon = 1.0e-4);
        }
        res => panic!("Expected closest points, found {:?}.", res),
    }
}

#[test]
fn capsule_cuboid_distance() {
    let capsule = Collider::new(Capsule::new_y(1.0, 0.5));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(3.0, 0.0, 0.0);

    assert_relative_eq!(
        query::distance(&pos1, &cuboid, &pos2, &capsule),
        1.5,
        epsilon = 1.0e-3
    );
}

#[test]
fn intersecting_shapes_have_zero_distance() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let ball = Collider::new(Ball::new(0.5));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.5, 0.5, 0.0);

    assert_eq!(query::distance(&pos1, &cuboid, &pos2, &ball), 0.0);
}
