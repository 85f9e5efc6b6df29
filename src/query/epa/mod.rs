//! The EPA algorithm for penetration depth computation.

pub use self::epa2::{EpaOptions, Penetration, EPA};

pub mod epa2;
