use crate::math::{Point, Real};

/// Computes the center of a set of point.
///
/// Returns `None` if `pts` is empty.
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    if pts.is_empty() {
        return None;
    }

    let denom: Real = 1.0 / (pts.len() as Real);
    let mut piter = pts.iter();
    let mut res = *piter.next()? * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    Some(res)
}
