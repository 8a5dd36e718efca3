//! # Workflows Module
//!
//! High-level entry points that tie [`crate::core`] and [`crate::engine`]
//! together.
//!
//! - **Scan Workflow** ([`scan`]) - Reads a PDB file, decides whether it is an
//!   experimental or a predicted structure, selects confident cysteines and
//!   screens every pair of them for disulfide bridge geometry.

pub mod scan;
