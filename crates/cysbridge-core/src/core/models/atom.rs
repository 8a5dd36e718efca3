use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents a single atom record of a parsed structure.
///
/// Besides its position, every atom carries the scalar value found in the
/// temperature-factor column of its record. For experimental structures this
/// is the crystallographic B-factor; for predicted models the same column
/// holds the per-residue pLDDT confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Serial number from the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "CB", "SG").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Fractional occupancy, used to choose between alternate locations.
    pub occupancy: f64,
    /// Temperature-factor column value (B-factor or pLDDT).
    pub b_factor: f64,
    /// Alternate location indicator, if the record carried one.
    pub alt_loc: Option<char>,
    /// Whether the atom came from a HETATM record.
    pub is_hetero: bool,
}

impl Atom {
    /// Creates a new `Atom` with full occupancy and a zero temperature factor.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_id,
            position,
            occupancy: 1.0,
            b_factor: 0.0,
            alt_loc: None,
            is_hetero: false,
        }
    }

    pub fn with_b_factor(mut self, b_factor: f64) -> Self {
        self.b_factor = b_factor;
        self
    }

    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = occupancy;
        self
    }
}
