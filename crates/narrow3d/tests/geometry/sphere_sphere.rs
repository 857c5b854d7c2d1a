use na::{Isometry3, Vector3};
use narrow3d::query::{GjkEpaAlgorithm, NarrowPhaseAlgorithm, NarrowPhaseParams, SphereSphereAlgorithm};
use narrow3d::shape::{Ball, Collider, Cuboid};

#[test]
fn coincident_balls_sphere_sphere() {
    let ball = Collider::new(Ball::new(1.0));
    let pos = Isometry3::translation(1.0, 2.0, 3.0);

    let contact = SphereSphereAlgorithm
        .test_collision(&ball, &pos, &ball, &pos)
        .expect("Penetration not found.");

    assert_relative_eq!(contact.depth, 2.0);
    assert_relative_eq!(contact.normal.norm(), 1.0);
    assert_relative_eq!(contact.point1 - contact.point2, *contact.normal * 2.0, epsilon = 1.0e-5);
}

#[test]
fn coincident_balls_gjk_epa() {
    let ball = Collider::new(Ball::new(1.0));
    let pos = Isometry3::translation(1.0, 2.0, 3.0);

    let contact = GjkEpaAlgorithm::default()
        .test_collision(&ball, &pos, &ball, &pos)
        .expect("Penetration not found.");

    // EPA only approximates round shapes.
    assert_relative_eq!(contact.depth, 2.0, max_relative = 0.1);
    assert_relative_eq!(contact.normal.norm(), 1.0, epsilon = 1.0e-5);
}

#[test]
fn overlapping_balls_both_algorithms_agree() {
    let ball1 = Collider::new(Ball::new(1.0));
    let ball2 = Collider::new(Ball::new(0.5));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 1.2, 0.0);

    let analytic = SphereSphereAlgorithm
        .test_collision(&ball1, &pos1, &ball2, &pos2)
        .expect("Penetration not found.");
    let hybrid = GjkEpaAlgorithm::default()
        .test_collision(&ball1, &pos1, &ball2, &pos2)
        .expect("Penetration not found.");

    assert_relative_eq!(analytic.depth, 0.3, epsilon = 1.0e-5);
    assert_relative_eq!(analytic.normal, Vector3::y_axis(), epsilon = 1.0e-5);
    assert_relative_eq!(analytic.point1, na::Point3::new(0.0, 1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(analytic.point2, na::Point3::new(0.0, 0.7, 0.0), epsilon = 1.0e-5);

    assert_relative_eq!(hybrid.depth, analytic.depth, epsilon = 2.0e-2);
    assert!(hybrid.normal.dot(&analytic.normal) > 0.99);
}

#[test]
fn separated_or_touching_balls_have_no_contact() {
    let ball = Collider::new(Ball::new(1.0));
    let pos1 = Isometry3::identity();

    assert!(SphereSphereAlgorithm
        .test_collision(&ball, &pos1, &ball, &Isometry3::translation(2.0, 0.0, 0.0))
        .is_none());
    assert!(SphereSphereAlgorithm
        .test_collision(&ball, &pos1, &ball, &Isometry3::translation(0.0, 0.0, 2.5))
        .is_none());
}

#[test]
fn algorithm_selection() {
    let ball = Collider::new(Ball::new(1.0));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let params = NarrowPhaseParams::default();

    assert!(matches!(
        NarrowPhaseAlgorithm::for_pair(&ball.shape, &ball.shape, params),
        NarrowPhaseAlgorithm::SphereSphere(_)
    ));
    assert!(matches!(
        NarrowPhaseAlgorithm::for_pair(&ball.shape, &cuboid.shape, params),
        NarrowPhaseAlgorithm::GjkEpa(_)
    ));
    assert!(matches!(
        NarrowPhaseAlgorithm::for_pair(&cuboid.shape, &ball.shape, params),
        NarrowPhaseAlgorithm::GjkEpa(_)
    ));
}

#[test]
fn sphere_sphere_on_other_shapes_reports_nothing() {
    let ball = Collider::new(Ball::new(1.0));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos = Isometry3::identity();

    assert!(SphereSphereAlgorithm
        .test_collision(&ball, &pos, &cuboid, &pos)
        .is_none());
}
