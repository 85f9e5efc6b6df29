use approx::assert_relative_eq;
use narrow2d::math::{Point, Real, Vector};
use narrow2d::query::sat;
use narrow2d::query::{self, CollisionError};
use narrow2d::shape::Shape;

#[test]
fn winding_order_does_not_change_the_result() {
    let ccw = Shape::new(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 1.5),
    ]);
    let cw = Shape::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.5),
        Point::new(2.0, 0.0),
    ]);
    let other = Shape::cuboid(Vector::new(0.5, 0.5)).with_position(Vector::new(1.0, 1.8));

    let (hit_ccw, mtv_ccw) = query::sat_check_collision(&other, &ccw).unwrap();
    let (hit_cw, mtv_cw) = query::sat_check_collision(&other, &cw).unwrap();

    assert!(hit_ccw && hit_cw);
    assert_relative_eq!(mtv_ccw, mtv_cw, epsilon = 1.0e-5);
    // The box sits on the apex and is pushed straight up.
    assert_relative_eq!(mtv_ccw, Vector::new(0.0, 0.2), epsilon = 1.0e-5);
}

#[test]
fn first_axis_wins_ties() {
    // Both squares overlap by 0.5 along X and along Y.
    let a = Shape::cuboid(Vector::new(0.5, 0.5));
    let b = Shape::cuboid(Vector::new(0.5, 0.5)).with_position(Vector::new(0.5, 0.5));

    let (hit, mtv) = query::sat_check_collision(&a, &b).unwrap();
    assert!(hit);
    // The first edge of `a` is its bottom edge, with normal -Y.
    assert_relative_eq!(mtv, Vector::new(0.0, -0.5), epsilon = 1.0e-6);
}

#[test]
fn axes_and_projections_of_transformed_shape() {
    let shape = Shape::cuboid(Vector::new(1.0, 1.0))
        .with_scale(Vector::new(2.0, 1.0))
        .with_rotation(std::f32::consts::FRAC_PI_2 as Real)
        .with_position(Vector::new(0.0, 3.0));

    let mut axes = Vec::new();
    sat::calculate_axes(&shape, &mut axes);
    assert_eq!(axes.len(), 4);

    // Once rotated, the box is 2 wide and 4 tall.
    let on_x = sat::project_shape(&shape, &Vector::x()).unwrap();
    let on_y = sat::project_shape(&shape, &Vector::y()).unwrap();
    assert_relative_eq!(on_x.width(), 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(on_y.width(), 4.0, epsilon = 1.0e-5);
    assert_relative_eq!(on_y.midpoint(), 3.0, epsilon = 1.0e-5);

    let ground = Shape::cuboid(Vector::new(10.0, 0.5)).with_position(Vector::new(0.0, 1.0));
    assert_relative_eq!(
        sat::overlap_on_axis(&shape, &ground, &Vector::y()).unwrap(),
        0.5,
        epsilon = 1.0e-5
    );
}

#[test]
fn invalid_shapes() {
    let square = Shape::cuboid(Vector::new(0.5, 0.5));
    let empty = Shape::new(Vec::new());
    let stretched = square.clone().with_scale(Vector::new(Real::INFINITY, 1.0));

    assert_eq!(
        query::sat_check_collision(&empty, &square),
        Err(CollisionError::InvalidShape)
    );
    assert_eq!(
        query::sat_check_collision(&square, &stretched),
        Err(CollisionError::InvalidShape)
    );
}
