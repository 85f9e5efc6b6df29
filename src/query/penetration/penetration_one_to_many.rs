use crate::math::{Real, Vector};
use crate::query::{penetration, CollisionAlgorithm, CollisionError};
use crate::shape::Shape;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the penetration of `probe` into each of the `targets`.
///
/// The `i`-th result is [`penetration(probe, &targets[i], algorithm)`](penetration()). With the
/// `parallel` feature enabled, the targets are processed on the rayon thread pool. The order
/// of the results matches the order of the targets either way.
pub fn penetrations(
    probe: &Shape,
    targets: &[Shape],
    algorithm: CollisionAlgorithm,
) -> Vec<Result<Option<Vector<Real>>, CollisionError>> {
    #[cfg(feature = "parallel")]
    let iter = targets.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = targets.iter();

    iter.enumerate()
        .map(|(i, target)| {
            let result = penetration(probe, target, algorithm);
            log::trace!("Penetration query against target {}: {:?}", i, result);
            result
        })
        .collect()
}

/// The sum of the minimum translation vectors of `probe` out of every target it collides
/// with.
///
/// Adding the result to the position of `probe` is a cheap way of pushing it out of a set of
/// obstacles. This is not guaranteed to resolve every overlap in a single step when several
/// targets push in opposite directions.
///
/// Targets that cannot be queried (see [`CollisionError`]) are skipped, and reported
/// through the `log` crate.
///
/// # Errors
///
/// Fails if the probe itself is invalid.
pub fn total_penetration(
    probe: &Shape,
    targets: &[Shape],
    algorithm: CollisionAlgorithm,
) -> Result<Vector<Real>, CollisionError> {
    probe.validate()?;

    let total = penetrations(probe, targets, algorithm)
        .into_iter()
        .enumerate()
        .fold(Vector::zeros(), |acc, (i, result)| match result {
            Ok(Some(mtv)) => acc + mtv,
            Ok(None) => acc,
            Err(err) => {
                log::debug!("Skipping target {} in penetration sum: {}", i, err);
                acc
            }
        });

    Ok(total)
}
