use approx::assert_relative_eq;
use narrow2d::math::Vector;
use narrow2d::query::epa::{EpaOptions, EPA};
use narrow2d::query::{self, CollisionAlgorithm};
use narrow2d::shape::Shape;

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let c = Shape::cuboid(Vector::new(2.0, 1.0));
    let c1 = c.clone().with_position(Vector::new(3.5, 0.0));

    let (hit, simplex) = query::gjk_check_collision(&c1, &c).unwrap();
    assert!(hit);
    let mtv = query::epa_resolve(&c1, &c, &simplex).unwrap();
    assert_relative_eq!(mtv, Vector::new(0.5, 0.0), epsilon = 1.0e-4);

    let c1 = c.clone().with_position(Vector::new(0.0, 0.2));
    let (hit, simplex) = query::gjk_check_collision(&c1, &c).unwrap();
    assert!(hit);
    let mtv = query::epa_resolve(&c1, &c, &simplex).unwrap();
    assert_relative_eq!(mtv, Vector::new(0.0, 1.8), epsilon = 1.0e-4);
}

#[test]
fn epa_exposes_normal_and_depth() {
    let a = Shape::regular_polygon(4, 1.0);
    let b = Shape::cuboid(Vector::new(1.0, 1.0)).with_position(Vector::new(0.0, 1.5));

    let (hit, simplex) = query::gjk_check_collision(&a, &b).unwrap();
    assert!(hit);

    let mut epa = EPA::new();
    let pen = epa
        .penetration(&a, &b, &simplex, &EpaOptions::default())
        .unwrap();

    // The diamond pokes 0.5 into the bottom side of the box.
    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(*pen.normal, Vector::y(), epsilon = 1.0e-4);
    assert!(epa.polytope().len() >= 3);
}

#[test]
fn cuboids_large_size_ratio() {
    let cuboid_a = Shape::cuboid(Vector::new(10.0, 10.0));
    let cuboid_b = Shape::cuboid(Vector::new(300.0, 1.5))
        .with_position(Vector::new(5.0, 0.0))
        .with_rotation(1.5);

    let mut p = Vector::new(0.0, 0.0);
    let mut angle = 0.0;

    // Push the first box out of the second one while sliding and spinning it.
    for _ in 1..20000 {
        p.x += 0.0001;
        angle += 0.005;

        let pos_a = cuboid_a.clone().with_position(p).with_rotation(angle);

        if let Some(mtv) = query::penetration(&pos_a, &cuboid_b, CollisionAlgorithm::Gjk).unwrap() {
            assert!(mtv.iter().all(|e| e.is_finite()));
            p += mtv;
        }
    }
}
