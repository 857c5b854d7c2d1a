use na::{Isometry3, Vector3};
use narrow3d::query::{self, GjkEpaAlgorithm};
use narrow3d::shape::{Collider, Cuboid};

#[test]
fn aligned_cuboids_penetration() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(1.9, 0.0, 0.0);

    let contact = query::contact(&pos1, &cuboid, &pos2, &cuboid).expect("Penetration not found.");

    assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, Vector3::x_axis(), epsilon = 1.0e-3);
    assert_relative_eq!(
        contact.point1 - contact.point2,
        *contact.normal * contact.depth,
        epsilon = 1.0e-3
    );
    assert_relative_eq!(contact.point1.x, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(contact.point2.x, 0.9, epsilon = 1.0e-3);
}

#[test]
fn aligned_cuboids_at_several_depths() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();

    for x in [1.9, 1.5, 1.0, 0.5] {
        let pos2 = Isometry3::translation(x, 0.0, 0.0);
        let contact =
            query::contact(&pos1, &cuboid, &pos2, &cuboid).expect("Penetration not found.");

        assert_relative_eq!(contact.depth, 2.0 - x, epsilon = 1.0e-3);
        assert_relative_eq!(contact.normal, Vector3::x_axis(), epsilon = 1.0e-3);
    }
}

#[test]
fn normal_points_toward_the_second_shape() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 2.0, 1.0)));
    let pos1 = Isometry3::translation(0.0, 10.0, 0.0);
    let pos2 = Isometry3::translation(0.0, 6.5, 0.0);

    let contact = query::contact(&pos1, &cuboid, &pos2, &cuboid).expect("Penetration not found.");

    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, -Vector3::y_axis(), epsilon = 1.0e-3);

    let flipped = query::contact(&pos2, &cuboid, &pos1, &cuboid).expect("Penetration not found.");
    assert_relative_eq!(flipped.depth, contact.depth, epsilon = 1.0e-3);
    assert_relative_eq!(flipped.normal, -contact.normal, epsilon = 1.0e-3);
}

#[test]
fn rotated_cuboid_edge_penetration() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::new(
        Vector3::new(2.2, 0.0, 0.0),
        Vector3::z() * core::f32::consts::FRAC_PI_4,
    );

    let contact = query::contact(&pos1, &cuboid, &pos2, &cuboid).expect("Penetration not found.");
    let expected = 1.0 - (2.2 - 2.0f32.sqrt());

    assert_relative_eq!(contact.depth, expected, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal, Vector3::x_axis(), epsilon = 1.0e-3);
}

#[test]
fn coincident_cuboids() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos = Isometry3::translation(-3.0, 1.0, 0.5);

    let contact = GjkEpaAlgorithm::default()
        .test_collision(&cuboid, &pos, &cuboid, &pos)
        .expect("Penetration not found.");

    assert_relative_eq!(contact.depth, 2.0, epsilon = 1.0e-2);
    assert_relative_eq!(contact.normal.norm(), 1.0, epsilon = 1.0e-5);
    assert!(contact.point1.coords.iter().all(|x| x.is_finite()));
    assert!(contact.point2.coords.iter().all(|x| x.is_finite()));
}

#[test]
fn separated_cuboids() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(1.0, 2.5, 0.0);

    assert!(query::contact(&pos1, &cuboid, &pos2, &cuboid).is_none());
    assert_relative_eq!(
        query::distance(&pos1, &cuboid, &pos2, &cuboid),
        0.5,
        epsilon = 1.0e-3
    );
}
