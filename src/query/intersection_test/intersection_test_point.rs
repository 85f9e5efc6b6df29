use crate::math::{Point, Real};
use crate::query::gjk::{self, ConstantPoint, GJKResult, GjkOptions, Simplex};
use crate::query::CollisionError;
use crate::shape::Shape;

/// Tests whether a world-space point lies inside of a shape.
///
/// This runs GJK between the shape and the point, so points on the boundary of the shape may
/// be reported as inside.
///
/// # Errors
///
/// Fails with [`CollisionError::InvalidShape`] if the shape has no vertex or contains
/// non-finite values, or if the point is not finite.
pub fn point_in_shape(shape: &Shape, point: &Point<Real>) -> Result<bool, CollisionError> {
    shape.validate()?;

    if !point.coords.iter().all(|e| e.is_finite()) {
        return Err(CollisionError::InvalidShape);
    }

    let init_dir = match shape.center() {
        Some(center) => center - *point,
        None => return Err(CollisionError::InvalidShape),
    };
    let mut simplex = Simplex::new();
    let result = gjk::intersection_test(
        shape,
        &ConstantPoint(*point),
        &init_dir,
        &mut simplex,
        &GjkOptions::default(),
    );

    Ok(result == GJKResult::Intersection)
}
