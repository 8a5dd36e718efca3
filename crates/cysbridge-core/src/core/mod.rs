//! # Core Module
//!
//! The stateless foundation of CysBridge: the structure model, the readers
//! that populate it, the geometric kernel and the text report.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Structures, models, chains, residues, atoms
//!   and the value records (`CandidateSite`, `BridgeRecord`) derived from them
//! - **File I/O** ([`io`]) - PDB reading and experimental/predicted source classification
//! - **Geometry & Naming** ([`utils`]) - Distance and torsion kernels, residue name tables
//! - **Reporting** ([`report`]) - Human-readable rendering of detected bridges
//!
//! ## Scientific Foundation
//!
//! A disulfide bridge links the SG atoms of two cysteines. Its geometry is
//! tightly constrained: the S-S bond is close to 2.05 Å and the CB-SG-SG-CB
//! torsion sits near ±90°. The core exposes exactly the measurements needed
//! to test candidate pairs against those windows.

pub mod io;
pub mod models;
pub mod report;
pub mod utils;
