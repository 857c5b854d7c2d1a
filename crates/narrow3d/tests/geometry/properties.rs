use na::{Isometry3, Vector3};
use narrow3d::math::Real;
use narrow3d::query::{self, GjkEpaAlgorithm};
use narrow3d::shape::{Ball, Capsule, Collider, Cone, Cuboid, Cylinder, ShapeType};
use oorandom::Rand32;

fn random_vector(rng: &mut Rand32, scale: Real) -> Vector3<Real> {
    Vector3::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    ) * scale
}

fn random_pose(rng: &mut Rand32) -> Isometry3<Real> {
    Isometry3::new(random_vector(rng, 1.5), random_vector(rng, 3.0))
}

fn colliders() -> Vec<Collider> {
    vec![
        Collider::new(Ball::new(0.7)),
        Collider::new(Cuboid::new(Vector3::new(0.5, 1.0, 0.3))),
        Collider::new(Capsule::new_y(0.6, 0.3)),
        Collider::new(Cylinder::new(0.5, 0.8)),
        Collider::new(Cone::new(0.7, 0.5)),
    ]
}

#[test]
fn random_pairs_are_idempotent_and_well_formed() {
    let mut rng = Rand32::new(42);
    let colliders = colliders();

    for _ in 0..200 {
        let c1 = &colliders[rng.rand_range(0..colliders.len() as u32) as usize];
        let c2 = &colliders[rng.rand_range(0..colliders.len() as u32) as usize];
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);

        let contact = query::contact(&pos1, c1, &pos2, c2);
        assert_eq!(contact, query::contact(&pos1, c1, &pos2, c2));

        if let Some(contact) = contact {
            assert!(contact.depth >= 0.0);
            assert!(contact.depth.is_finite());
            assert_relative_eq!(contact.normal.norm(), 1.0, epsilon = 1.0e-4);
            assert_relative_eq!(
                contact.point1 - contact.point2,
                *contact.normal * contact.depth,
                epsilon = 2.0e-2
            );
        } else {
            let dist = query::distance(&pos1, c1, &pos2, c2);
            assert!(dist.is_finite());
        }
    }
}

#[test]
fn margin_correction_agrees_with_exact_penetration() {
    let mut rng = Rand32::new(7);
    let colliders = colliders();
    let alg = GjkEpaAlgorithm::default();
    let mut compared = 0;

    for _ in 0..200 {
        let c1 = &colliders[rng.rand_range(0..colliders.len() as u32) as usize];
        let c2 = &colliders[rng.rand_range(0..colliders.len() as u32) as usize];
        let pos12 = random_pose(&mut rng).inv_mul(&random_pose(&mut rng));

        for margin in [0.01, 0.04, 0.1] {
            let exact = alg.penetration(&pos12, &c1.shape, &c2.shape);
            let margined =
                alg.penetration_with_margins(&pos12, &c1.shape, margin, &c2.shape, margin);

            if let (Some(exact), Some(margined)) = (exact, margined) {
                assert_relative_eq!(margined.depth, exact.depth, epsilon = 1.0e-2);
                compared += 1;
            }
        }
    }

    assert!(compared > 20);
}

#[test]
fn balls_and_cuboids_are_pushed_apart() {
    let mut rng = Rand32::new(1234);
    let colliders = colliders();
    let blocky = |c: &Collider| {
        matches!(c.shape.shape_type(), ShapeType::Ball | ShapeType::Cuboid)
    };
    let candidates: Vec<_> = colliders.iter().filter(|c| blocky(*c)).collect();

    for _ in 0..200 {
        let c1 = candidates[rng.rand_range(0..candidates.len() as u32) as usize];
        let c2 = candidates[rng.rand_range(0..candidates.len() as u32) as usize];
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);

        if let Some(contact) = query::contact(&pos1, c1, &pos2, c2) {
            let centers = pos2.translation.vector - pos1.translation.vector;
            assert!(contact.normal.dot(&centers) >= -1.0e-4);
        }
    }
}

#[test]
fn depth_decreases_as_cuboids_move_apart() {
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let mut prev_depth = Real::MAX;

    for i in 0..=35 {
        let overlap = 0.3 - i as Real * 0.01;
        let pos2 = Isometry3::translation(2.0 - overlap, 0.1, 0.0);
        let depth = query::contact(&pos1, &cuboid, &pos2, &cuboid).map_or(0.0, |c| c.depth);

        assert!(depth <= prev_depth + 1.0e-3);
        assert_relative_eq!(depth, overlap.max(0.0), epsilon = 5.0e-3);
        prev_depth = depth;
    }
}

#[test]
fn depth_decreases_as_balls_move_apart() {
    let ball = Collider::new(Ball::new(1.0));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let pos1 = Isometry3::identity();
    let mut prev_depth = Real::MAX;

    for i in 0..=30 {
        let overlap = 0.5 - i as Real * 0.02;
        let pos2 = Isometry3::translation(0.0, 0.0, 2.0 - overlap);
        let depth = query::contact(&pos1, &cuboid, &pos2, &ball).map_or(0.0, |c| c.depth);

        assert!(depth <= prev_depth + 1.0e-2);
        assert_relative_eq!(depth, overlap.max(0.0), epsilon = 1.0e-2);
        prev_depth = depth;
    }
}
