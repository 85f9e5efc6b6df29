//! The Gilbert-Johnson-Keerthi intersection algorithm.
//!
//! # What is GJK?
//!
//! The **Gilbert-Johnson-Keerthi (GJK)** algorithm decides whether two convex shapes overlap
//! by working on their **Minkowski difference** (also called Configuration Space Obstacle or
//! CSO): the set of all the `a - b` with `a` in the first shape and `b` in the second. The
//! shapes overlap if and only if this set contains the origin.
//!
//! The Minkowski difference is never built explicitly. GJK only needs its support function,
//! which is obtained by combining the support functions of the two shapes (see
//! [`CSOPoint::from_shapes`]).
//!
//! ## How it works in 2D
//!
//! 1. Take a first support point along an arbitrary direction.
//! 2. Search toward the origin: take the support point along the direction pointing from the
//!    current simplex to the origin.
//! 3. If that new point does not get past the origin, the origin is out of reach: the shapes
//!    are disjoint.
//! 4. Otherwise add it to the simplex (a point, then a segment, then a triangle), and reduce
//!    the simplex to the feature closest to the origin. If the simplex is a triangle enclosing
//!    the origin, the shapes overlap.
//!
//! The enclosing triangle is exactly what the EPA needs to compute the penetration vector.
//!
//! ## Tie-breaking
//!
//! The origin lying exactly on the boundary of the simplex (collinear points, zero cross
//! products) is reported as an intersection: touching shapes are considered colliding by the
//! simplex region tests. A new support point whose projection on the search direction is
//! exactly zero, however, does not get past the origin and ends the query as disjoint.

use crate::math::{Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting (overlapping or touching).
    ///
    /// The simplex passed to the algorithm encloses the origin, or the origin lies on it.
    Intersection,
    /// The shapes are disjoint.
    ///
    /// The vector is the last search direction. If the algorithm terminated normally, no point
    /// of the Minkowski difference projects positively on it, so it is a separating axis.
    NoIntersection(Vector<Real>),
}

/// Tuning parameters of the GJK algorithm.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// Maximum number of support point evaluations after the first one.
    ///
    /// Reaching this limit is treated as a separation.
    pub max_iterations: usize,
    /// Distance under which the origin is considered to lie on the simplex.
    pub epsilon: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iterations: 64,
            epsilon: eps_tol(),
        }
    }
}

/// The absolute tolerance used by the GJK algorithm by default.
///
/// This is 10 times the machine epsilon of [`Real`].
pub fn eps_tol() -> Real {
    let _eps = crate::math::DEFAULT_EPSILON;
    _eps * 10.0
}

/// Tests whether two support-mapped shapes intersect.
///
/// On [`GJKResult::Intersection`], `simplex` holds the terminal simplex: a triangle
/// enclosing the origin, or fewer points when the origin lies on the boundary of the
/// Minkowski difference. It can be handed to [`EPA`](crate::query::epa::EPA) to compute the
/// penetration vector.
///
/// `init_dir` is the direction along which the first support point is taken. A zero vector
/// falls back to the X axis.
pub fn intersection_test<G1, G2>(
    g1: &G1,
    g2: &G2,
    init_dir: &Vector<Real>,
    simplex: &mut Simplex,
    options: &GjkOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps = options.epsilon;
    let mut dir = if init_dir.norm_squared() > eps * eps {
        *init_dir
    } else {
        Vector::x()
    };

    let first = CSOPoint::from_shapes(g1, g2, &dir);
    simplex.reset(first);
    dir = -first.point.coords;

    for _ in 0..options.max_iterations {
        if dir.norm_squared() <= eps * eps {
            // The origin coincides with a vertex of the simplex.
            return GJKResult::Intersection;
        }

        let support = CSOPoint::from_shapes(g1, g2, &dir);

        if support.point.coords.dot(&dir) <= 0.0 {
            // The origin is out of reach along the best direction.
            return GJKResult::NoIntersection(dir);
        }

        // The simplex always has room here: a full simplex either ends the query or is
        // reduced by `evolve`.
        let pushed = simplex.push(support);
        debug_assert!(pushed);

        if simplex.evolve(&mut dir, eps) {
            return GJKResult::Intersection;
        }
    }

    log::debug!(
        "GJK did not converge after {} iterations, reporting no intersection.",
        options.max_iterations
    );
    GJKResult::NoIntersection(dir)
}
