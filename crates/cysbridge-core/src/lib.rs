//! # CysBridge Core Library
//!
//! Detection of potential disulfide bridges in protein structures from their
//! atomic coordinates.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the three-layer split between data, logic and entry points.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`), the PDB
//!   reader, source classification, the distance and torsion kernels, and the
//!   text report.
//!
//! - **[`engine`]: The Logic Core.** Scan configuration with its acceptance
//!   windows and confidence thresholds, the candidate filter and the pairwise
//!   bridge screen.
//!
//! - **[`workflows`]: The Public API.** Runs a complete scan of one file and
//!   returns a `ScanResult` holding the detected bridges and screen counters.
//!
//! ## Example
//!
//! ```no_run
//! use cysbridge::engine::config::ScanConfig;
//! use cysbridge::workflows::scan;
//! use std::path::Path;
//!
//! let result = scan::run(Path::new("1crn.pdb"), &ScanConfig::default())?;
//! print!("{}", result.report());
//! # Ok::<(), cysbridge::engine::error::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
