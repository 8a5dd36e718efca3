//! # Engine Module
//!
//! The scanning logic of CysBridge: configuration of the acceptance windows,
//! the candidate filter and the pairwise bridge screen.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Geometric windows, confidence thresholds, source
//!   and model selection, and the validating `ScanConfigBuilder`
//! - **Tasks** ([`tasks`]) - Candidate selection and bridge detection passes
//! - **Error Handling** ([`error`]) - Engine-level error types
//!
//! With the `parallel` feature enabled, the pairwise screen evaluates pairs on
//! the rayon thread pool. Results are identical to the sequential build.

pub mod config;
pub mod error;
pub mod tasks;
