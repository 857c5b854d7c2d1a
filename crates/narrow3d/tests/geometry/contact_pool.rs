use na::{Isometry3, Vector3};
use narrow3d::query::{ContactPool, NarrowPhaseAlgorithm, NarrowPhaseParams};
use narrow3d::shape::{Ball, Collider, Cuboid};

#[test]
fn contacts_are_stored_only_when_found() {
    let ball = Collider::new(Ball::new(0.5));
    let cuboid = Collider::new(Cuboid::new(Vector3::new(1.0, 1.0, 1.0)));
    let alg = NarrowPhaseAlgorithm::for_pair(&cuboid.shape, &ball.shape, NarrowPhaseParams::default());
    let mut pool = ContactPool::new();
    let pos1 = Isometry3::identity();

    let far = Isometry3::translation(5.0, 0.0, 0.0);
    assert!(alg
        .test_collision_into(&cuboid, &pos1, &ball, &far, &mut pool)
        .is_none());
    assert!(pool.is_empty());

    let close = Isometry3::translation(0.0, 1.3, 0.0);
    let id = alg
        .test_collision_into(&cuboid, &pos1, &ball, &close, &mut pool)
        .expect("Penetration not found.");
    assert_eq!(pool.len(), 1);

    let stored = *pool.get(id).expect("Contact not stored.");
    assert_eq!(Some(stored), alg.test_collision(&cuboid, &pos1, &ball, &close));
    assert_relative_eq!(stored.depth, 0.2, epsilon = 1.0e-2);

    assert_eq!(pool.remove(id), Some(stored));
    assert!(pool.is_empty());
    assert!(pool.get(id).is_none());
}

#[test]
fn pool_slots_are_reused() {
    let ball = Collider::new(Ball::new(1.0));
    let alg = NarrowPhaseAlgorithm::for_pair(&ball.shape, &ball.shape, NarrowPhaseParams::default());
    let mut pool = ContactPool::with_capacity(4);
    let pos1 = Isometry3::identity();
    let pos2 = Isometry3::translation(1.0, 0.0, 0.0);

    let ids: Vec<_> = (0..3)
        .filter_map(|_| alg.test_collision_into(&ball, &pos1, &ball, &pos2, &mut pool))
        .collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(pool.iter().count(), 3);

    let _ = pool.remove(ids[1]);
    let id = alg
        .test_collision_into(&ball, &pos1, &ball, &pos2, &mut pool)
        .expect("Penetration not found.");
    assert_eq!(id.index(), ids[1].index());
    assert!(pool.get(ids[1]).is_none());
    assert!(pool.get(id).is_some());

    pool.clear();
    assert!(pool.is_empty());
    assert!(ids.iter().all(|id| pool.get(*id).is_none()));
}
