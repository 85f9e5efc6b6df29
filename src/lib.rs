/*!
narrow2d
========

**narrow2d** is a 2-dimensional narrow-phase collision detection library
written with the rust programming language.

It answers two questions about a pair of convex polygons:

* Are they overlapping? (GJK, or the separating axis theorem)
* If so, what is the smallest translation that pulls them apart? (EPA, or the
  minimum-overlap axis found by the separating axis theorem)

```
# #[cfg(feature = "f32")] {
use narrow2d::query;
use narrow2d::shape::Shape;
use narrow2d::math::Vector;

let a = Shape::cuboid(Vector::new(0.5, 0.5));
let b = Shape::cuboid(Vector::new(0.5, 0.5)).with_position(Vector::new(0.9, 0.0));

let (colliding, simplex) = query::gjk_check_collision(&a, &b).unwrap();
assert!(colliding);

let mtv = query::epa_resolve(&a, &b, &simplex).unwrap();
assert!((mtv.norm() - 0.1).abs() < 1.0e-4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix2, Point2, Translation2, UnitVector2, Vector2};
    use na::{UnitComplex, U2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The dimension of the ambient space.
    pub type Dim = U2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The matrix type.
    pub use Matrix2 as Matrix;

    /// The rotation type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;
}
