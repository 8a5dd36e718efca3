//! Numeric helpers and naming tables shared across the crate.

pub mod geometry;
pub mod identifiers;
