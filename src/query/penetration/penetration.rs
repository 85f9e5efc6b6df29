use crate::math::{Real, Vector};
use crate::query::{epa_resolve, gjk_check_collision, sat_check_collision, CollisionError};
use crate::shape::Shape;

/// The algorithm used to detect and resolve collisions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionAlgorithm {
    /// GJK for detection, followed by the EPA for resolution.
    ///
    /// Works on any convex shape given by its vertices, regardless of their order.
    #[default]
    Gjk,
    /// The separating axis theorem, which detects and resolves in a single pass.
    ///
    /// Requires the vertices to be given in polygon order.
    Sat,
}

/// Computes the minimum translation vector of `shape1` out of `shape2`, if they collide.
///
/// Returns `Ok(None)` if the shapes are separated. Otherwise, returns the translation of
/// `shape1` along the axis of minimum penetration that separates it from `shape2`. Both
/// algorithms agree on this convention, and on the result up to numerical tolerance for
/// shapes that clearly overlap or clearly do not.
///
/// They differ on shapes that only touch: [`CollisionAlgorithm::Gjk`] may report them as
/// colliding with a zero or near-zero vector while [`CollisionAlgorithm::Sat`] reports
/// them as separated.
///
/// # Errors
///
/// See [`gjk_check_collision`] and [`sat_check_collision`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::query::{self, CollisionAlgorithm};
/// use narrow2d::shape::Shape;
/// use narrow2d::math::Vector;
///
/// let a = Shape::cuboid(Vector::new(0.5, 0.5));
/// let b = Shape::cuboid(Vector::new(0.5, 0.5)).with_position(Vector::new(0.0, -0.8));
///
/// for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
///     let mtv = query::penetration(&a, &b, algorithm).unwrap().unwrap();
///     assert!((mtv - Vector::new(0.0, 0.2)).norm() < 1.0e-4);
/// }
/// # }
/// ```
pub fn penetration(
    shape1: &Shape,
    shape2: &Shape,
    algorithm: CollisionAlgorithm,
) -> Result<Option<Vector<Real>>, CollisionError> {
    match algorithm {
        CollisionAlgorithm::Gjk => {
            let (colliding, simplex) = gjk_check_collision(shape1, shape2)?;

            if colliding {
                epa_resolve(shape1, shape2, &simplex).map(Some)
            } else {
                Ok(None)
            }
        }
        CollisionAlgorithm::Sat => {
            let (colliding, mtv) = sat_check_collision(shape1, shape2)?;
            Ok(colliding.then_some(mtv))
        }
    }
}
