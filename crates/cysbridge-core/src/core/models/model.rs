use super::ids::ChainId;

/// One coordinate set of a structure (a `MODEL` block in PDB terms).
///
/// Files without explicit `MODEL` records produce a single model with
/// serial number 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub serial: usize,
    pub(crate) chains: Vec<ChainId>, // Chains in declaration order
}

impl Model {
    pub(crate) fn new(serial: usize) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }
}
