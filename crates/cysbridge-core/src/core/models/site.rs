use nalgebra::Point3;
use serde::Serialize;
use std::fmt;

/// Identifies a residue by chain letter and sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResidueSpecifier {
    pub chain_id: char,
    pub residue_number: isize,
}

impl fmt::Display for ResidueSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.residue_number)
    }
}

/// A single atom lifted out of the structure model as a plain value.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSite {
    pub residue: ResidueSpecifier,
    pub atom_name: String,
    pub position: Point3<f64>,
    /// B-factor for experimental structures, pLDDT for predicted ones.
    pub confidence: f64,
}

/// A cysteine admitted by the confidence filter.
///
/// Holds the sulfur (SG) site that drives the distance screen and the
/// beta-carbon (CB) site needed for the CB-SG-SG-CB torsion.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSite {
    /// Serial number of the model the residue belongs to.
    pub model: usize,
    pub residue: ResidueSpecifier,
    pub sulfur: AtomSite,
    pub beta_carbon: AtomSite,
}

impl CandidateSite {
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.sulfur.confidence
    }
}

/// Two candidate indices (`first < second`) and the geometry measured so far.
///
/// `dihedral` stays `None` when the pair was rejected on distance alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
    pub dihedral: Option<f64>,
}

/// A candidate pair that satisfied both the distance and the dihedral criteria.
///
/// In multi-model files the two residues may come from different models;
/// `first_model` and `second_model` hold their model serials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeRecord {
    pub first: ResidueSpecifier,
    pub second: ResidueSpecifier,
    pub first_model: usize,
    pub second_model: usize,
    /// SG-SG distance in Angstroms.
    pub distance: f64,
    /// Signed CB-SG-SG-CB torsion in degrees.
    pub dihedral: f64,
}

impl BridgeRecord {
    #[inline]
    pub fn spans_models(&self) -> bool {
        self.first_model != self.second_model
    }
}
