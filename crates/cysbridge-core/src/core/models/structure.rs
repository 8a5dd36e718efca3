use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::model::Model;
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A parsed protein structure organized as model → chain → residue → atom.
///
/// Atoms, residues and chains live in slot maps and are addressed by stable
/// IDs; models, chains and residues additionally keep their children in
/// declaration order so that traversal reproduces the order of the source
/// file.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains.
    chains: SlotMap<ChainId, Chain>,
    /// Models in declaration order.
    models: Vec<Model>,
    /// Lookup map for finding chains by model index and identifier.
    chain_id_map: HashMap<(usize, char), ChainId>,
    /// Lookup map for finding residues by chain, sequence number and insertion code.
    residue_id_map: HashMap<(ChainId, isize, Option<char>), ResidueId>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the structure.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in the structure.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in the structure.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Returns the models in declaration order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Looks up the atom called `name` inside a residue.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The residue to search.
    /// * `name` - The atom name (e.g., "SG").
    ///
    /// # Return
    ///
    /// Returns `None` if the residue does not exist or has no such atom.
    pub fn residue_atom(&self, residue_id: ResidueId, name: &str) -> Option<&Atom> {
        let atom_id = self.residues.get(residue_id)?.get_atom_id_by_name(name)?;
        self.atoms.get(atom_id)
    }

    /// Finds a chain ID by its model index and single-character identifier.
    pub fn find_chain_by_id(&self, model_index: usize, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&(model_index, id)).copied()
    }

    /// Finds a residue ID by its chain, sequence number and insertion code.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
        insertion_code: Option<char>,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number, insertion_code))
            .copied()
    }

    /// Iterates over every residue in model → chain → residue declaration order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(&Model, &Chain, ResidueId, &Residue)` tuples.
    pub fn residues_in_order(
        &self,
    ) -> impl Iterator<Item = (&Model, &Chain, ResidueId, &Residue)> + '_ {
        self.models.iter().flat_map(move |model| {
            model
                .chains
                .iter()
                .filter_map(move |&chain_id| self.chains.get(chain_id))
                .flat_map(move |chain| {
                    chain.residues.iter().filter_map(move |&residue_id| {
                        self.residues
                            .get(residue_id)
                            .map(|residue| (model, chain, residue_id, residue))
                    })
                })
        })
    }

    /// Appends a new model and returns its index.
    ///
    /// # Arguments
    ///
    /// * `serial` - The model serial number from the source file.
    pub fn add_model(&mut self, serial: usize) -> usize {
        self.models.push(Model::new(serial));
        self.models.len() - 1
    }

    /// Adds a new chain to a model or returns the existing one.
    ///
    /// This method is idempotent; if the model already declares a chain with
    /// the given identifier, its ID is returned without creating a duplicate.
    ///
    /// # Return
    ///
    /// Returns `None` if `model_index` does not refer to an existing model.
    pub fn add_chain(&mut self, model_index: usize, id: char) -> Option<ChainId> {
        let model = self.models.get_mut(model_index)?;
        let chain_id = *self
            .chain_id_map
            .entry((model_index, id))
            .or_insert_with(|| {
                let chain_id = self.chains.insert(Chain::new(id, model_index));
                model.chains.push(chain_id);
                chain_id
            });
        Some(chain_id)
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// Residues are keyed by sequence number and insertion code; a record
    /// that reopens an earlier residue is merged into it.
    ///
    /// # Return
    ///
    /// Returns `None` if the chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        insertion_code: Option<char>,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let residue_id = *self
            .residue_id_map
            .entry((chain_id, residue_number, insertion_code))
            .or_insert_with(|| {
                let residue_id = self.residues.insert(Residue::new(
                    residue_number,
                    insertion_code,
                    name,
                    chain_id,
                ));
                chain.residues.push(residue_id);
                residue_id
            });
        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// When the residue already holds an atom with the same name (alternate
    /// location records), the record with the higher occupancy is kept and
    /// the existing ID is returned; on equal occupancy the first record wins.
    ///
    /// # Return
    ///
    /// Returns `None` if the residue does not exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get_mut(residue_id)?;

        if let Some(existing_id) = residue.get_atom_id_by_name(&atom.name) {
            if let Some(existing) = self.atoms.get_mut(existing_id) {
                if atom.occupancy > existing.occupancy {
                    *existing = Atom {
                        residue_id,
                        ..atom
                    };
                }
            }
            return Some(existing_id);
        }

        let name = atom.name.clone();
        let atom_id = self.atoms.insert(Atom {
            residue_id,
            ..atom
        });
        residue.add_atom(&name, atom_id);
        Some(atom_id)
    }
}
