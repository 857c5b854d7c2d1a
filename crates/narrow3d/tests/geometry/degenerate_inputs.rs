use na::{Isometry3, Point3, Vector3};
use narrow3d::query::{self, ContactInfo};
use narrow3d::shape::{Ball, Collider, ConvexPointCloud, Cuboid, Segment, Triangle};

fn assert_finite(contact: &ContactInfo) {
    assert!(contact.depth.is_finite() && contact.depth >= 0.0);
    assert!(contact.normal.iter().all(|x| x.is_finite()));
    assert_relative_eq!(contact.normal.norm(), 1.0, epsilon = 1.0e-4);
    assert!(contact.point1.iter().all(|x| x.is_finite()));
    assert!(contact.point2.iter().all(|x| x.is_finite()));
}

#[test]
fn crossing_segments() {
    let seg1 = Collider::new(Segment::new(
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
    ));
    let seg2 = Collider::new(Segment::new(
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ));
    let pos = Isometry3::identity();

    if let Some(contact) = query::contact(&pos, &seg1, &pos, &seg2) {
        assert_finite(&contact);
        assert!(contact.depth < 1.0e-2);
    }

    assert!(query::distance(&pos, &seg1, &pos, &seg2) < 1.0e-5);
}

#[test]
fn coplanar_overlapping_triangles() {
    let tri = Collider::new(Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.2, 0.2, 0.0);

    if let Some(contact) = query::contact(&pos1, &tri, &pos2, &tri) {
        assert_finite(&contact);
        assert!(contact.depth < 1.0e-2);
    }
}

#[test]
fn flat_triangle_penetrating_cuboid() {
    let tri = Collider::new(Triangle::new(
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(0.5, 0.5, 0.5)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 0.0, 0.4);

    let contact = query::contact(&pos1, &tri, &pos2, &cuboid).expect("Penetration not found.");
    assert_finite(&contact);
    assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-2);
    assert!(contact.normal.z > 0.99);
}

#[test]
fn point_inside_cuboid() {
    let point = Collider::new(Ball::new(0.0));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 2.0, 3.0)));
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(0.0, 0.0, 0.2);

    let contact = query::contact(&pos1, &cuboid, &pos2, &point).expect("Penetration not found.");
    assert_finite(&contact);
    assert_relative_eq!(contact.depth, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(contact.normal.x.abs(), 1.0, epsilon = 1.0e-3);
}

#[test]
fn collapsed_point_cloud() {
    let cloud = ConvexPointCloud::from_points(vec![Point3::new(0.5, 0.5, 0.5); 4])
        .expect("Non-empty point cloud.");
    let cloud = Collider::new(cloud);
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos = Isometry3::identity();

    let contact = query::contact(&pos, &cuboid, &pos, &cloud).expect("Penetration not found.");
    assert_finite(&contact);
    assert_relative_eq!(contact.depth, 0.5, epsilon = 1.0e-3);
}

#[test]
fn empty_point_cloud_is_rejected() {
    assert!(ConvexPointCloud::from_points(Vec::new()).is_none());
}
