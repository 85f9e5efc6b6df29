//! The GJK algorithm for intersection tests.

pub use self::cso_point::CSOPoint;
pub use self::simplex::Simplex;
pub use gjk::*;
pub use special_support_maps::*;

mod cso_point;
mod gjk;
mod simplex;
mod special_support_maps;
