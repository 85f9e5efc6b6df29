use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::CollisionError;
use crate::shape::Shape;
use crate::utils::{self, Interval};
use num::Bounded;
use smallvec::SmallVec;

/// Iterates through the unit edge normals of a polygon given by its vertices, in order.
///
/// Edge `i` goes from `pts[i]` to `pts[(i + 1) % pts.len()]`. A two-vertex polygon (a
/// segment) has a single edge, a single vertex has none. Degenerate edges are skipped.
pub fn polygon_edge_normals(pts: &[Point<Real>]) -> impl Iterator<Item = UnitVector<Real>> + '_ {
    let n = pts.len();
    let nedges = match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    };

    (0..nedges).filter_map(move |i| utils::ccw_face_normal([&pts[i], &pts[(i + 1) % n]]))
}

/// Projects a set of points on an axis.
///
/// Returns `None` if `pts` is empty.
pub fn project_points(pts: &[Point<Real>], axis: &Vector<Real>) -> Option<Interval> {
    let (first, rest) = pts.split_first()?;
    let mut interval = Interval::point(first.coords.dot(axis));

    for pt in rest {
        interval.take_point(pt.coords.dot(axis));
    }

    Some(interval)
}

/// Finds the minimum translation separating two convex polygons using their edge normals as
/// candidate separating axes.
///
/// The polygons are given by their (world-space) vertices. Returns:
/// - `Ok(None)` as soon as one axis separates the polygons (overlap of zero or less),
/// - `Ok(Some(mtv))` if every axis shows a positive overlap, where `mtv` is the translation
///   of the first polygon along the axis of smallest overlap that separates it from the
///   second,
/// - `Err(CollisionError::InsufficientGeometry)` if neither polygon has an edge.
///
/// Axes are tested in order: the edges of `pts1` first, then the edges of `pts2`. When two
/// axes have the same overlap, the first one tested wins.
pub fn polygon_polygon_min_overlap(
    pts1: &[Point<Real>],
    pts2: &[Point<Real>],
) -> Result<Option<Vector<Real>>, CollisionError> {
    let axes: SmallVec<[UnitVector<Real>; 16]> = polygon_edge_normals(pts1)
        .chain(polygon_edge_normals(pts2))
        .collect();

    if axes.is_empty() {
        return Err(CollisionError::InsufficientGeometry);
    }

    let mut min_overlap = <Real as Bounded>::max_value();
    let mut mtv = Vector::zeros();

    for axis in &axes {
        let (Some(interval1), Some(interval2)) =
            (project_points(pts1, axis), project_points(pts2, axis))
        else {
            return Err(CollisionError::InvalidShape);
        };

        let overlap = interval1.overlap(&interval2);

        if overlap <= 0.0 {
            return Ok(None);
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            mtv = **axis * interval1.signed_penetration(&interval2);
        }
    }

    Ok(Some(mtv))
}

/// Computes the candidate separating axes of a shape: its world-space unit edge normals.
///
/// The axes are appended to `out`. A shape with fewer than two distinct vertices has none.
pub fn calculate_axes(shape: &Shape, out: &mut Vec<UnitVector<Real>>) {
    let pts: SmallVec<[Point<Real>; 16]> = shape.world_vertices().collect();
    out.extend(polygon_edge_normals(&pts));
}

/// Projects the world-space vertices of a shape on an axis.
///
/// Returns `None` if the shape has no vertex.
pub fn project_shape(shape: &Shape, axis: &Vector<Real>) -> Option<Interval> {
    let pts: SmallVec<[Point<Real>; 16]> = shape.world_vertices().collect();
    project_points(&pts, axis)
}

/// Computes the overlap of two shapes along a single, caller-chosen axis.
///
/// The axis does not need to be normalized. Returns `None` if the projections are disjoint or
/// only touch, if the axis is zero, or if one of the shapes has no vertex.
///
/// This is enough to test two shapes whose possible separating axes are known in advance
/// (two boxes sharing the same orientation, for example).
pub fn overlap_on_axis(shape1: &Shape, shape2: &Shape, axis: &Vector<Real>) -> Option<Real> {
    let axis = UnitVector::try_new(*axis, crate::math::DEFAULT_EPSILON)?;
    let interval1 = project_shape(shape1, &axis)?;
    let interval2 = project_shape(shape2, &axis)?;
    let overlap = interval1.overlap(&interval2);

    if overlap > 0.0 {
        Some(overlap)
    } else {
        None
    }
}
