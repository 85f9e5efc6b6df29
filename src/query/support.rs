use crate::math::{Point, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::query::CollisionError;
use crate::shape::{Shape, SupportMap};

/// The world-space vertex of `shape` furthest along `dir`.
///
/// This is the vertex maximizing its dot product with `dir`. Ties are broken in favor of the
/// vertex with the lowest index, so a zero direction returns the first vertex.
///
/// # Errors
///
/// Fails with [`CollisionError::InvalidShape`] if the shape has no vertex or contains
/// non-finite values.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::query;
/// use narrow2d::shape::Shape;
/// use narrow2d::math::{Point, Vector};
///
/// let square = Shape::cuboid(Vector::new(1.0, 1.0)).with_position(Vector::new(3.0, 0.0));
/// let pt = query::support(&square, &Vector::new(1.0, 0.5)).unwrap();
/// assert_eq!(pt, Point::new(4.0, 1.0));
/// # }
/// ```
pub fn support(shape: &Shape, dir: &Vector<Real>) -> Result<Point<Real>, CollisionError> {
    shape.validate()?;
    Ok(shape.support_point(dir))
}

/// The support point along `dir` of the Minkowski difference `shape1 - shape2`.
///
/// This is `support(shape1, dir) - support(shape2, -dir)`. The two contributing vertices
/// are available through [`CSOPoint::orig1`] and [`CSOPoint::orig2`].
pub fn minkowski_support(
    shape1: &Shape,
    shape2: &Shape,
    dir: &Vector<Real>,
) -> Result<CSOPoint, CollisionError> {
    shape1.validate()?;
    shape2.validate()?;
    Ok(CSOPoint::from_shapes(shape1, shape2, dir))
}
