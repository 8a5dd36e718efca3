use super::atom::Atom;
use super::ids::AtomId;
use super::structure::Structure;

/// Incrementally assembles a [`Structure`] from a stream of atom records.
///
/// Atoms that arrive outside an explicit model open an implicit one, so
/// single-model files without `MODEL` records need no special handling.
pub struct StructureBuilder {
    structure: Structure,

    // --- Builder-specific state for streaming construction ---
    current_model: Option<usize>,
    atom_count: usize,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
            current_model: None,
            atom_count: 0,
        }
    }

    pub fn start_model(&mut self, serial: usize) -> &mut Self {
        self.current_model = Some(self.structure.add_model(serial));
        self
    }

    pub fn end_model(&mut self) -> &mut Self {
        self.current_model = None;
        self
    }

    pub fn model_count(&self) -> usize {
        self.structure.models().len()
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Places an atom into the residue identified by chain, number and
    /// insertion code, creating the chain and residue on first sight.
    pub fn add_atom(
        &mut self,
        chain_id: char,
        residue_number: isize,
        insertion_code: Option<char>,
        residue_name: &str,
        atom: Atom,
    ) -> Option<AtomId> {
        let model_index = match self.current_model {
            Some(index) => index,
            None => {
                let serial = self.model_count() + 1;
                self.start_model(serial);
                self.structure.models().len() - 1
            }
        };

        let chain = self.structure.add_chain(model_index, chain_id)?;
        let residue =
            self.structure
                .add_residue(chain, residue_number, insertion_code, residue_name)?;
        let atom_id = self.structure.add_atom_to_residue(residue, atom)?;
        self.atom_count += 1;
        Some(atom_id)
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}
