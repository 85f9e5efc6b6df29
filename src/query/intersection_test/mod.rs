//! Boolean intersection tests between shapes.

pub use self::intersection_test_gjk::{gjk_check_collision, gjk_check_collision_with_options};
pub use self::intersection_test_point::point_in_shape;
pub use self::intersection_test_sat::sat_check_collision;

mod intersection_test_gjk;
mod intersection_test_point;
mod intersection_test_sat;
