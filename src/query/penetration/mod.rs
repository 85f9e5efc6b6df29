//! Minimum translation vectors between overlapping shapes.

pub use self::penetration::{penetration, CollisionAlgorithm};
pub use self::penetration_epa::{epa_resolve, epa_resolve_with_options};
pub use self::penetration_one_to_many::{penetrations, total_penetration};

mod penetration;
mod penetration_epa;
mod penetration_one_to_many;
