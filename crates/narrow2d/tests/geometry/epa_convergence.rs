use approx::assert_relative_eq;
use narrow2d::math::{Point, Real, Vector};
use narrow2d::query::epa::EpaOptions;
use narrow2d::query::{self, CollisionAlgorithm};
use narrow2d::shape::Shape;

#[test]
fn rounded_shape_against_large_triangle() {
    // An elongated 16-gon standing in for a capsule, resting on a large triangle.
    let shape1 = Shape::regular_polygon(16, 10.0)
        .with_scale(Vector::new(1.0, 1.5))
        .with_position(Vector::new(381.592, 348.491));
    let shape2 = Shape::new(vec![
        Point::new(64.0, 507.0),
        Point::new(440.0, 326.0),
        Point::new(1072.0, 507.0),
    ]);

    let gjk = query::penetration(&shape1, &shape2, CollisionAlgorithm::Gjk)
        .unwrap()
        .expect("Penetration not found.");
    let sat = query::penetration(&shape1, &shape2, CollisionAlgorithm::Sat)
        .unwrap()
        .expect("Penetration not found.");

    assert_relative_eq!(gjk.norm(), sat.norm(), epsilon = 1.0e-2);
    // The rounded shape is pushed up and to the left, away from the triangle.
    assert!(gjk.y < 0.0);
}

#[test]
fn iteration_cap_keeps_the_best_estimate() {
    let a = Shape::regular_polygon(64, 1.0);
    let b = Shape::regular_polygon(64, 1.0).with_position(Vector::new(0.3, 0.4));
    let (hit, simplex) = query::gjk_check_collision(&a, &b).unwrap();
    assert!(hit);

    let capped = EpaOptions {
        max_iterations: 2,
        ..EpaOptions::default()
    };
    let rough = query::epa_resolve_with_options(&a, &b, &simplex, &capped).unwrap();
    let fine = query::epa_resolve(&a, &b, &simplex).unwrap();

    // The polytope grows inside of the Minkowski difference, so an early stop can only
    // under-estimate the depth.
    let expected: Real = 2.0 - 0.5;
    assert!(rough.norm() <= fine.norm() + 1.0e-4);
    assert_relative_eq!(fine.norm(), expected, epsilon = 1.0e-2);
}
