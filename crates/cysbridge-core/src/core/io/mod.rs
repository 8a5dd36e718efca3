//! Provides input functionality for coordinate file formats.
//!
//! Readers implement the [`traits::StructureFile`] trait and adapt a file into
//! the [`Structure`](crate::core::models::structure::Structure) model. The
//! [`source`] module decides from raw file text whether the coordinates come
//! from an experiment or a structure predictor.

pub mod pdb;
pub mod source;
pub mod traits;
