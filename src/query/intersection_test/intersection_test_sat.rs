use crate::math::{Point, Real, Vector};
use crate::query::sat;
use crate::query::CollisionError;
use crate::shape::Shape;
use smallvec::SmallVec;

/// Tests whether two shapes overlap using the separating axis theorem, and computes their
/// minimum translation vector.
///
/// The candidate axes are the edge normals of both shapes (the edges of `shape1` first).
/// The shapes overlap if their projections overlap strictly on every axis: shapes that only
/// touch are reported as separated. On overlap, the returned vector is the translation of
/// `shape1` along the axis of smallest overlap that separates it from `shape2`. On
/// separation it is zero.
///
/// A shape with a single vertex, or with only two, is accepted as long as the other one has
/// edges to test.
///
/// # Errors
///
/// * [`CollisionError::InvalidShape`] if a shape has no vertex or contains non-finite
///   values.
/// * [`CollisionError::InsufficientGeometry`] if neither shape has an edge.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::query;
/// use narrow2d::shape::Shape;
/// use narrow2d::math::Vector;
///
/// let a = Shape::cuboid(Vector::new(0.5, 0.5));
/// let b = Shape::cuboid(Vector::new(0.5, 0.5)).with_position(Vector::new(0.9, 0.0));
///
/// let (colliding, mtv) = query::sat_check_collision(&a, &b).unwrap();
/// assert!(colliding);
/// assert!((mtv - Vector::new(-0.1, 0.0)).norm() < 1.0e-5);
/// # }
/// ```
pub fn sat_check_collision(
    shape1: &Shape,
    shape2: &Shape,
) -> Result<(bool, Vector<Real>), CollisionError> {
    shape1.validate()?;
    shape2.validate()?;

    let pts1: SmallVec<[Point<Real>; 16]> = shape1.world_vertices().collect();
    let pts2: SmallVec<[Point<Real>; 16]> = shape2.world_vertices().collect();

    match sat::polygon_polygon_min_overlap(&pts1, &pts2)? {
        Some(mtv) => Ok((true, mtv)),
        None => Ok((false, Vector::zeros())),
    }
}
