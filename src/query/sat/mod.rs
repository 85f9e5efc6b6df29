//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not** intersect if
//! and only if there exists an axis onto which the projections of the two shapes do not
//! overlap. For two convex polygons, it is sufficient to test the normals of their edges.
//!
//! # How does SAT work here?
//!
//! 1. **Select candidate axes**: the unit edge normals of both polygons.
//! 2. **Project both shapes onto each axis**: the projection of a polygon on an axis is the
//!    interval between the smallest and largest projections of its vertices.
//! 3. **Check for overlap**: as soon as one axis shows no overlap, the shapes are disjoint and
//!    the remaining axes are not tested.
//! 4. **Find the minimum overlap**: if every axis shows an overlap, the axis with the smallest
//!    one gives the minimum translation separating the shapes.
//!
//! Compared to GJK + EPA, SAT needs the actual vertices and edges of the shapes (not only a
//! support function) and always tests every axis of colliding shapes, but computes the
//! penetration exactly without any iterative expansion.
//!
//! # Limitations
//!
//! Shapes without any edge (single points) contribute no axis. Testing two such shapes fails
//! with [`CollisionError::InsufficientGeometry`](crate::query::CollisionError).

pub use self::sat_polygon_polygon::*;

mod sat_polygon_polygon;
