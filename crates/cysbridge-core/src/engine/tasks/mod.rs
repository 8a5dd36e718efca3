//! Computational steps of a disulfide scan.
//!
//! Each submodule is a self-contained pass over immutable inputs:
//! [`candidate_selection`] filters the cysteines of a structure by side-chain
//! completeness and confidence, and [`bridge_detection`] screens every pair of
//! the surviving candidates against the geometric windows.

pub mod bridge_detection;
pub mod candidate_selection;
