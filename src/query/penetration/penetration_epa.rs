use crate::math::{Real, Vector};
use crate::query::epa::{EpaOptions, EPA};
use crate::query::gjk::Simplex;
use crate::query::CollisionError;
use crate::shape::Shape;

/// Computes the minimum translation vector of two overlapping shapes with the EPA.
///
/// `simplex` must be the simplex returned by
/// [`gjk_check_collision`](crate::query::gjk_check_collision) for the same pair of shapes,
/// in the same order, when it reported a collision.
///
/// The result is the translation of `shape1` separating it from `shape2` along the axis of
/// minimum penetration. Its length is the penetration depth. A zero vector is returned when
/// no penetration can be extracted from the simplex, typically because the shapes only
/// touch at a single point.
///
/// # Errors
///
/// Fails with [`CollisionError::InvalidShape`] if a shape has no vertex or contains
/// non-finite values.
pub fn epa_resolve(
    shape1: &Shape,
    shape2: &Shape,
    simplex: &Simplex,
) -> Result<Vector<Real>, CollisionError> {
    epa_resolve_with_options(shape1, shape2, simplex, &EpaOptions::default())
}

/// Computes the minimum translation vector of two overlapping shapes with the EPA, using
/// custom parameters.
///
/// See [`epa_resolve`] for details.
pub fn epa_resolve_with_options(
    shape1: &Shape,
    shape2: &Shape,
    simplex: &Simplex,
    options: &EpaOptions,
) -> Result<Vector<Real>, CollisionError> {
    shape1.validate()?;
    shape2.validate()?;

    let mtv = EPA::new()
        .penetration(shape1, shape2, simplex, options)
        .map_or_else(Vector::zeros, |pen| pen.translation());

    Ok(mtv)
}
