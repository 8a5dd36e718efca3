use super::ids::ResidueId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                        // Chain identifier (e.g., 'A', 'B')
    pub model_index: usize,              // Index of the owning model in the structure
    pub(crate) residues: Vec<ResidueId>, // Residues in declaration order
}

impl Chain {
    pub(crate) fn new(id: char, model_index: usize) -> Self {
        Self {
            id,
            model_index,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}
