/// Error raised by a collision query given inputs it cannot work with.
///
/// These are precondition failures: the query gives up immediately and the caller decides
/// whether to skip the pair, log it, or abort. A pair of shapes that simply do not collide
/// is not an error, and neither is an iterative algorithm running out of iterations (the
/// best answer found so far is returned instead).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::query::{self, CollisionError};
/// use narrow2d::shape::Shape;
/// use narrow2d::math::Point;
///
/// let p1 = Shape::new(vec![Point::new(0.0, 0.0)]);
/// let p2 = Shape::new(vec![Point::new(0.0, 0.0)]);
///
/// // Two points have no edge, hence no candidate separating axis.
/// assert_eq!(
///     query::sat_check_collision(&p1, &p2),
///     Err(CollisionError::InsufficientGeometry)
/// );
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionError {
    /// A shape has no vertex, or a non-finite vertex or transform component.
    #[error("the shape has no vertex or contains non-finite values")]
    InvalidShape,
    /// The separating axis test was given two shapes without any edge to derive an axis from.
    #[error("neither shape has an edge to derive a separating axis from")]
    InsufficientGeometry,
}
