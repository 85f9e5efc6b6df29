use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// A simplex of dimension up to 2 (a point, a segment, or a triangle) built by GJK.
///
/// The vertices are points of the Minkowski difference of the two tested shapes, stored
/// from the oldest to the most recently added. A simplex never holds more than three points:
/// vertices are discarded whenever the origin is found to lie outside of the sub-simplex
/// they belong to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 3>,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Self {
        Simplex {
            points: ArrayVec::new(),
        }
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.points.clear();
        self.points.push(pt);
    }

    /// Removes all the points of this simplex.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The points of this simplex, from the oldest to the most recent.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The i-th point of this simplex.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &CSOPoint {
        &self.points[i]
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Is this simplex a triangle?
    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.is_full()
    }

    /// Appends a point to this simplex.
    ///
    /// Returns `false`, leaving the simplex unchanged, if it already has three points.
    pub fn push(&mut self, pt: CSOPoint) -> bool {
        self.points.try_push(pt).is_ok()
    }

    fn set(&mut self, pts: &[CSOPoint]) {
        self.points.clear();
        for pt in pts {
            self.points.push(*pt);
        }
    }

    /// Updates this simplex after a new point was appended, and computes the next search
    /// direction.
    ///
    /// Returns `true` if the origin is enclosed by the simplex, or lies within `eps` of it.
    /// Otherwise, the simplex is reduced to the sub-simplex closest to the origin and `dir`
    /// is set to a direction from that sub-simplex toward the origin.
    pub(crate) fn evolve(&mut self, dir: &mut Vector<Real>, eps: Real) -> bool {
        match self.points.len() {
            2 => self.evolve_segment(dir, eps),
            3 => self.evolve_triangle(dir, eps),
            _ => {
                if let Some(last) = self.points.last() {
                    *dir = -last.point.coords;
                    dir.norm_squared() <= eps * eps
                } else {
                    false
                }
            }
        }
    }

    // Simplex `[b, a]` where `a` is the most recent point.
    fn evolve_segment(&mut self, dir: &mut Vector<Real>, eps: Real) -> bool {
        let b = self.points[0];
        let a = self.points[1];
        let ab = b - a;
        let ao = -a.point.coords;

        if ab.dot(&ao) > 0.0 {
            // The origin projects on the segment interior.
            let cross = ab.perp(&ao);

            if cross.abs() <= eps * ab.norm() {
                // The origin lies on the segment: the shapes are touching.
                return true;
            }

            *dir = perp_toward(&ab, cross);
        } else {
            // The origin is in the Voronoï region of `a`.
            self.set(&[a]);
            *dir = ao;
        }

        false
    }

    // Simplex `[c, b, a]` where `a` is the most recent point.
    fn evolve_triangle(&mut self, dir: &mut Vector<Real>, eps: Real) -> bool {
        let c = self.points[0];
        let b = self.points[1];
        let a = self.points[2];
        let ab = b - a;
        let ac = c - a;
        let ao = -a.point.coords;
        let orientation = ab.perp(&ac);

        if orientation == 0.0 {
            // Flat triangle: `c` does not add anything to the segment `[b, a]`.
            self.set(&[b, a]);
            return self.evolve_segment(dir, eps);
        }

        // Edge normals pointing away from the opposite vertex.
        let ab_out = perp_toward(&ab, -orientation);
        let ac_out = perp_toward(&ac, orientation);

        if ab_out.dot(&ao) > 0.0 {
            self.set(&[b, a]);
            *dir = ab_out;
            false
        } else if ac_out.dot(&ao) > 0.0 {
            self.set(&[c, a]);
            *dir = ac_out;
            false
        } else {
            // Inside, or exactly on the boundary.
            true
        }
    }
}

/// The vector perpendicular to `v`, on its left if `side > 0`, on its right otherwise.
#[inline]
fn perp_toward(v: &Vector<Real>, side: Real) -> Vector<Real> {
    if side > 0.0 {
        Vector::new(-v.y, v.x)
    } else {
        Vector::new(v.y, -v.x)
    }
}
