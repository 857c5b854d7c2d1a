use na::{Isometry3, Vector3};
use narrow3d::query::{self, GjkEpaAlgorithm};
use narrow3d::shape::{Ball, Collider, Cuboid};

#[test]
fn margin_correction_matches_exact_penetration() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let pos12 = Isometry3::translation(1.9, 0.3, 0.0);
    let alg = GjkEpaAlgorithm::default();

    let exact = alg
        .penetration(&pos12, &cuboid, &cuboid)
        .expect("Penetration not found.");
    let margined = alg
        .penetration_with_margins(&pos12, &cuboid, 0.04, &cuboid, 0.04)
        .expect("Penetration not found.");

    assert_relative_eq!(exact.depth, 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(margined.depth, exact.depth, epsilon = 1.0e-3);
    assert_relative_eq!(margined.normal, exact.normal, epsilon = 1.0e-3);
    assert_relative_eq!(
        margined.point1 - margined.point2,
        *margined.normal * margined.depth,
        epsilon = 1.0e-3
    );
    // The witness points are moved back onto the exact shapes.
    assert_relative_eq!(margined.point1.x, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(margined.point2.x, 0.9, epsilon = 1.0e-3);
}

#[test]
fn asymmetric_margins() {
    let ball = Ball::new(1.0);
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let pos12 = Isometry3::translation(0.0, 0.0, 1.8);
    let alg = GjkEpaAlgorithm::default();

    let margined = alg
        .penetration_with_margins(&pos12, &cuboid, 0.1, &ball, 0.0)
        .expect("Penetration not found.");

    assert_relative_eq!(margined.depth, 0.2, epsilon = 1.0e-2);
    assert!(margined.normal.z > 0.99);
}

#[test]
fn zero_margins_give_no_fallback() {
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let pos12 = Isometry3::translation(1.5, 0.0, 0.0);

    assert!(GjkEpaAlgorithm::default()
        .penetration_with_margins(&pos12, &cuboid, 0.0, &cuboid, 0.0)
        .is_none());
}

#[test]
fn touching_cuboids() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(2.0, 0.5, 0.0);

    // Touching shapes are either reported with a zero depth or not at all.
    if let Some(contact) = query::contact(&pos1, &cuboid, &pos2, &cuboid) {
        assert!(contact.depth >= 0.0);
        assert!(contact.depth < 1.0e-3);
        assert!(contact.normal.x > 0.99);
    }
}

#[test]
fn touching_without_margins() {
    let cuboid = Collider::with_margin(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)), 0.0);
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(2.0, 0.0, 0.0);

    assert!(query::contact(&pos1, &cuboid, &pos2, &cuboid).is_none());
}

#[test]
fn negative_margins_are_clamped() {
    let collider = Collider::with_margin(Ball::new(1.0), -0.5);
    assert_eq!(collider.margin, 0.0);
}
