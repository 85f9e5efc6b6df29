//! Collision detection and resolution between pairs of shapes.
//!
//! # General cases
//! Two families of algorithms are provided, over the same [`Shape`](crate::shape::Shape)
//! type:
//!
//! * [`query::gjk_check_collision()`] and [`query::epa_resolve()`] detect a collision with
//!   the Gilbert-Johnson-Keerthi algorithm, then compute the minimum translation vector
//!   with the Expanding Polytope Algorithm. They only rely on the support function of the
//!   shapes.
//! * [`query::sat_check_collision()`] detects a collision and computes the minimum
//!   translation vector in one pass, with the separating axis theorem.
//!
//! [`query::penetration()`] wraps both behind a [`CollisionAlgorithm`] selector, and
//! [`query::penetrations()`] and [`query::total_penetration()`] run it against many
//! shapes at once.
//!
//! Every minimum translation vector returned by this module is the translation of the
//! *first* shape that separates it from the second one.
//!
//! # Specific cases
//! The [`gjk`], [`epa`] and [`sat`] submodules expose the underlying algorithms. They work on
//! any [`SupportMap`](crate::shape::SupportMap) (for GJK and the EPA) or any slice of
//! vertices (for the separating axis theorem), and let the caller reuse allocations and
//! tune iteration limits.
//!
//! [`query::gjk_check_collision()`]: crate::query::gjk_check_collision
//! [`query::epa_resolve()`]: crate::query::epa_resolve
//! [`query::sat_check_collision()`]: crate::query::sat_check_collision
//! [`query::penetration()`]: crate::query::penetration
//! [`query::penetrations()`]: crate::query::penetrations
//! [`query::total_penetration()`]: crate::query::total_penetration

pub use self::error::CollisionError;
pub use self::intersection_test::{
    gjk_check_collision, gjk_check_collision_with_options, point_in_shape, sat_check_collision,
};
pub use self::penetration::{
    epa_resolve, epa_resolve_with_options, penetration, penetrations, total_penetration,
    CollisionAlgorithm,
};
pub use self::support::{minkowski_support, support};

pub mod epa;
mod error;
pub mod gjk;
mod intersection_test;
mod penetration;
pub mod sat;
mod support;
