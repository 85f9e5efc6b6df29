use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A support mapping that is a single world-space point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantPoint(pub Point<Real>);

impl SupportMap for ConstantPoint {
    #[inline]
    fn support_point(&self, _: &Vector<Real>) -> Point<Real> {
        self.0
    }
}
