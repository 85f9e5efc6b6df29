use crate::random_shapes::{nearly_touching, rand_range, random_polygon};
use approx::assert_relative_eq;
use narrow2d::math::Vector;
use narrow2d::query::{self, CollisionAlgorithm};
use oorandom::Rand32;

#[test]
fn gjk_and_sat_agree_on_random_polygons() {
    let mut rng = Rand32::new(42);
    let mut num_colliding = 0;
    let mut num_tested = 0;

    for _ in 0..2000 {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        if nearly_touching(&a, &b) {
            continue;
        }

        num_tested += 1;
        let (gjk_hit, simplex) = query::gjk_check_collision(&a, &b).unwrap();
        let (sat_hit, sat_mtv) = query::sat_check_collision(&a, &b).unwrap();
        assert_eq!(gjk_hit, sat_hit, "{:?} {:?}", a, b);

        if gjk_hit {
            num_colliding += 1;
            // Both look for the shallowest edge of the Minkowski difference, so the depths
            // match even if ties between axes are broken differently.
            let epa_mtv = query::epa_resolve(&a, &b, &simplex).unwrap();
            assert_relative_eq!(epa_mtv.norm(), sat_mtv.norm(), epsilon = 1.0e-3);
        }
    }

    // Make sure both outcomes were actually exercised.
    assert!(num_tested > 1000);
    assert!(num_colliding > 100);
    assert!(num_colliding < num_tested);
}

#[test]
fn collision_checks_are_deterministic() {
    let mut rng = Rand32::new(7);

    for _ in 0..500 {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        let first = query::gjk_check_collision(&a, &b).unwrap();
        let second = query::gjk_check_collision(&a, &b).unwrap();
        assert_eq!(first, second);

        for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
            assert_eq!(
                query::penetration(&a, &b, algorithm),
                query::penetration(&a, &b, algorithm)
            );
        }
    }
}

#[test]
fn collisions_are_translation_invariant() {
    let mut rng = Rand32::new(1234);

    for _ in 0..500 {
        let mut a = random_polygon(&mut rng);
        let mut b = random_polygon(&mut rng);

        if nearly_touching(&a, &b) {
            continue;
        }

        let (hit, simplex) = query::gjk_check_collision(&a, &b).unwrap();
        let depth = if hit {
            query::epa_resolve(&a, &b, &simplex).unwrap().norm()
        } else {
            0.0
        };

        let shift = Vector::new(rand_range(&mut rng, -50.0, 50.0), rand_range(&mut rng, -50.0, 50.0));
        a.translate(&shift);
        b.translate(&shift);

        let (shifted_hit, shifted_simplex) = query::gjk_check_collision(&a, &b).unwrap();
        assert_eq!(hit, shifted_hit);

        if hit {
            let shifted_depth = query::epa_resolve(&a, &b, &shifted_simplex).unwrap().norm();
            assert_relative_eq!(depth, shifted_depth, epsilon = 1.0e-3);
        }
    }
}

#[test]
fn resolving_with_either_algorithm_separates_the_shapes() {
    let mut rng = Rand32::new(99);

    for _ in 0..500 {
        let mut a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        if nearly_touching(&a, &b) {
            continue;
        }

        for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
            if let Some(mtv) = query::penetration(&a, &b, algorithm).unwrap() {
                let mut moved = a.clone();
                moved.translate(&(mtv * 1.01 + mtv.normalize() * 1.0e-3));
                let (still_hit, _) = query::sat_check_collision(&moved, &b).unwrap();
                assert!(!still_hit);
            }
        }

        a.translate(&Vector::new(10.0, 0.0));
        assert_eq!(query::penetration(&a, &b, CollisionAlgorithm::Gjk), Ok(None));
    }
}
