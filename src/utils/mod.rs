//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::interval::Interval;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod ccw_face_normal;
mod center;
mod interval;
mod point_cloud_support_point;
