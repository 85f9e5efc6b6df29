//! Two-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use ordered_float::OrderedFloat;

use crate::math::{Real, UnitVector, Vector};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::SupportMap;
use crate::utils;

/// Tuning parameters of the Expanding Polytope Algorithm.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaOptions {
    /// Maximum number of polytope expansions.
    ///
    /// Reaching this limit is not an error: the closest edge found so far is returned.
    pub max_iterations: usize,
    /// The expansion stops once a new support point is no further than this from the
    /// closest edge.
    pub tolerance: Real,
}

impl Default for EpaOptions {
    fn default() -> Self {
        EpaOptions {
            max_iterations: 64,
            tolerance: 1.0e-5,
        }
    }
}

/// The penetration of two overlapping shapes, as computed by the EPA.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// The axis of minimum penetration, pointing from the first shape toward the second.
    pub normal: UnitVector<Real>,
    /// The overlap of the two shapes along `normal`. Always non-negative.
    pub depth: Real,
}

impl Penetration {
    /// The minimum translation vector of the first shape.
    ///
    /// Moving the first shape by this vector (or the second shape by its opposite) separates
    /// the two shapes.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        -*self.normal * self.depth
    }
}

/// The Expanding Polytope Algorithm in 2D.
///
/// Starting from a GJK simplex known to contain the origin, the EPA maintains a
/// counter-clockwise polygon inside of the Minkowski difference of the two shapes, and
/// repeatedly:
///
/// 1. finds the edge of the polygon closest to the origin,
/// 2. computes the support point of the Minkowski difference along the outward normal of
///    that edge,
/// 3. stops if that point is not meaningfully further from the origin than the edge,
///    otherwise inserts it between the two endpoints of the edge.
///
/// Once it stops, the closest edge is (up to the tolerance) on the boundary of the
/// Minkowski difference: its normal and distance to the origin give the minimum translation
/// separating the shapes.
///
/// Ties between edges equally close to the origin are broken in favor of the edge starting
/// at the lowest polygon index.
///
/// # Reusability
///
/// The `EPA` structure can be reused across multiple queries to avoid allocations.
#[derive(Default, Clone, Debug)]
pub struct EPA {
    polytope: Vec<CSOPoint>,
}

impl EPA {
    /// Creates a new instance of the 2D Expanding Polytope Algorithm.
    pub fn new() -> Self {
        EPA::default()
    }

    /// The current polygon, in counter-clockwise order.
    ///
    /// After a call to [`EPA::penetration`], this is the final expanded polygon.
    pub fn polytope(&self) -> &[CSOPoint] {
        &self.polytope
    }

    /// Computes the penetration between two shapes given a simplex enclosing the origin.
    ///
    /// The simplex is typically the one filled by
    /// [`gjk::intersection_test`](crate::query::gjk::intersection_test) when it reports an
    /// intersection. Segment simplices (the origin lies on a segment between two support
    /// points) are accepted and expanded in both directions.
    ///
    /// Returns `None` when there is no meaningful penetration to extract: the simplex has
    /// fewer than two points (the shapes touch at a single point), or every edge of the
    /// polygon is degenerate.
    pub fn penetration<G1, G2>(
        &mut self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
        options: &EpaOptions,
    ) -> Option<Penetration>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        self.polytope.clear();
        self.polytope.reserve(options.max_iterations + 3);
        self.polytope.extend_from_slice(simplex.points());

        if self.polytope.len() < 2 {
            return None;
        }

        if self.polytope.len() == 3 {
            let dp1 = self.polytope[1] - self.polytope[0];
            let dp2 = self.polytope[2] - self.polytope[0];

            if dp1.perp(&dp2) < 0.0 {
                self.polytope.swap(1, 2)
            }
        }

        for _ in 0..options.max_iterations {
            let Some((edge, normal, dist)) = self.closest_edge() else {
                log::debug!("Hit degenerate polytope in EPA: every edge has a zero length.");
                return None;
            };

            let support = CSOPoint::from_shapes_toward(g1, g2, &normal);
            let support_dist = support.point.coords.dot(&normal);

            if support_dist - dist <= options.tolerance {
                return Some(Penetration {
                    normal,
                    depth: dist.max(0.0),
                });
            }

            self.polytope.insert(edge + 1, support);
        }

        log::debug!(
            "EPA did not converge after {} iterations, using the closest edge found.",
            options.max_iterations
        );

        self.closest_edge().map(|(_, normal, dist)| Penetration {
            normal,
            depth: dist.max(0.0),
        })
    }

    /// The edge of the polytope closest to the origin: the index of its first vertex, its
    /// outward normal, and its distance to the origin.
    fn closest_edge(&self) -> Option<(usize, UnitVector<Real>, Real)> {
        let n = self.polytope.len();

        (0..n)
            .filter_map(|i| {
                let a = &self.polytope[i].point;
                let b = &self.polytope[(i + 1) % n].point;
                let normal = utils::ccw_face_normal([a, b])?;
                Some((i, normal, normal.dot(&a.coords)))
            })
            .min_by_key(|(_, _, dist)| OrderedFloat(*dist))
    }
}
