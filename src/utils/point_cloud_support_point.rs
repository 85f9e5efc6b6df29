use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Ties are broken in favor of the lowest index. Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let mut best_pt = 0;
    let mut best_dot = points.first()?.coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    Some(best_pt)
}

/// Computes the support point of a cloud of points.
///
/// Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<Point<Real>> {
    point_cloud_support_point_id(dir, points).map(|i| points[i])
}
