//! # Core Models Module
//!
//! Data structures describing a parsed protein structure and the value
//! records that flow through the bridge scan.
//!
//! ## Key Components
//!
//! - [`structure`] - The model → chain → residue → atom hierarchy produced by the readers
//! - [`model`], [`chain`], [`residue`], [`atom`] - The individual levels of that hierarchy
//! - [`builder`] - Streaming construction used by the file readers
//! - [`ids`] - Stable slot-map keys for atoms, residues and chains
//! - [`site`] - Immutable value records (`AtomSite`, `CandidateSite`, `BridgeRecord`)
//!   extracted from a structure for the geometric analysis
//!
//! ## Usage
//!
//! ```ignore
//! use cysbridge::core::models::{atom::Atom, structure::Structure};
//!
//! let mut structure = Structure::new();
//! let model = structure.add_model(1);
//! let chain_id = structure.add_chain(model, 'A').unwrap();
//! let residue_id = structure.add_residue(chain_id, 22, None, "CYS").unwrap();
//!
//! let atom = Atom::new("SG", residue_id, Point3::new(0.0, 0.0, 0.0));
//! structure.add_atom_to_residue(residue_id, atom);
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod model;
pub mod residue;
pub mod site;
pub mod structure;
