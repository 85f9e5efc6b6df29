use crate::math::{Real, Vector};
use crate::query::gjk::{self, GJKResult, GjkOptions, Simplex};
use crate::query::CollisionError;
use crate::shape::Shape;

/// Tests whether two shapes overlap, using the GJK algorithm.
///
/// Returns whether the shapes collide, along with the terminal GJK simplex. When they do,
/// the simplex can be handed to [`epa_resolve`](crate::query::epa_resolve) to compute the
/// minimum translation separating them.
///
/// Shapes that touch without overlapping may be reported as colliding: the origin lying
/// exactly on the simplex counts as enclosed. [`epa_resolve`](crate::query::epa_resolve)
/// then returns a zero or near-zero vector.
///
/// # Errors
///
/// Fails with [`CollisionError::InvalidShape`] if a shape has no vertex or contains
/// non-finite values.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::query;
/// use narrow2d::shape::Shape;
/// use narrow2d::math::Vector;
///
/// let a = Shape::regular_polygon(3, 0.15);
/// let b = Shape::regular_polygon(5, 0.15).with_position(Vector::new(1.0, 0.0));
///
/// let (colliding, _) = query::gjk_check_collision(&a, &b).unwrap();
/// assert!(!colliding);
/// # }
/// ```
pub fn gjk_check_collision(
    shape1: &Shape,
    shape2: &Shape,
) -> Result<(bool, Simplex), CollisionError> {
    gjk_check_collision_with_options(shape1, shape2, &GjkOptions::default())
}

/// Tests whether two shapes overlap, using the GJK algorithm with custom parameters.
///
/// See [`gjk_check_collision`] for details.
pub fn gjk_check_collision_with_options(
    shape1: &Shape,
    shape2: &Shape,
    options: &GjkOptions,
) -> Result<(bool, Simplex), CollisionError> {
    shape1.validate()?;
    shape2.validate()?;

    let mut simplex = Simplex::new();
    let init_dir = initial_direction(shape1, shape2);
    let result = gjk::intersection_test(shape1, shape2, &init_dir, &mut simplex, options);

    Ok((result == GJKResult::Intersection, simplex))
}

/// The direction between the centers of the two shapes, i.e., toward the center of their
/// Minkowski difference.
pub(crate) fn initial_direction(shape1: &Shape, shape2: &Shape) -> Vector<Real> {
    match (shape1.center(), shape2.center()) {
        (Some(c1), Some(c2)) => c1 - c2,
        _ => Vector::x(),
    }
}
