//! The EPA algorithm for penetration depth computation.

pub use self::epa3::{Degenerate, EpaParams, Penetration, EPA};

pub mod epa3;
