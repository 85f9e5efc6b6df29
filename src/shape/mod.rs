//! Shapes supported by narrow2d.

#[doc(inline)]
pub use self::shape::Shape;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod shape;
mod support_map;
