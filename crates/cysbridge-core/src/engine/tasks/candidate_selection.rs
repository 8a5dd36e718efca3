use crate::core::io::source::SourceKind;
use crate::core::models::atom::Atom;
use crate::core::models::chain::Chain;
use crate::core::models::residue::Residue;
use crate::core::models::site::{AtomSite, CandidateSite, ResidueSpecifier};
use crate::core::models::structure::Structure;
use crate::core::utils::identifiers::{
    CYSTEINE_BETA_CARBON_ATOM_NAME, CYSTEINE_SULFUR_GAMMA_ATOM_NAME,
};
use crate::engine::config::{ConfidencePolicy, ModelSelection};
use tracing::{debug, info, instrument, trace};

/// Collects every cysteine whose SG atom passes the confidence policy.
///
/// Residues are visited in model → chain → residue declaration order and
/// the returned candidates keep that order. A cysteine lacking either its SG
/// or its CB atom is skipped.
#[instrument(skip_all, name = "candidate_selection_task")]
pub fn select_candidates(
    structure: &Structure,
    source: SourceKind,
    policy: &ConfidencePolicy,
    models: ModelSelection,
) -> Vec<CandidateSite> {
    let mut cysteines_seen = 0usize;

    let candidates: Vec<CandidateSite> = structure
        .residues_in_order()
        .filter(|(_, chain, _, _)| match models {
            ModelSelection::All => true,
            ModelSelection::First => chain.model_index == 0,
        })
        .filter(|(_, _, _, residue)| residue.is_cysteine())
        .inspect(|_| cysteines_seen += 1)
        .filter_map(|(model, chain, residue_id, residue)| {
            let sulfur = structure.residue_atom(residue_id, CYSTEINE_SULFUR_GAMMA_ATOM_NAME);
            let beta_carbon = structure.residue_atom(residue_id, CYSTEINE_BETA_CARBON_ATOM_NAME);
            let (Some(sulfur), Some(beta_carbon)) = (sulfur, beta_carbon) else {
                debug!(
                    chain = %chain.id,
                    residue = residue.number,
                    has_sg = sulfur.is_some(),
                    has_cb = beta_carbon.is_some(),
                    "Skipping cysteine with incomplete side chain."
                );
                return None;
            };

            if !policy.admits(source, sulfur.b_factor) {
                trace!(
                    chain = %chain.id,
                    residue = residue.number,
                    confidence = sulfur.b_factor,
                    %source,
                    "Cysteine rejected by confidence policy."
                );
                return None;
            }

            Some(build_candidate(model.serial, chain, residue, sulfur, beta_carbon))
        })
        .collect();

    info!(
        %source,
        cysteines = cysteines_seen,
        candidates = candidates.len(),
        "Selected cysteine candidates."
    );
    candidates
}

fn build_candidate(
    model_serial: usize,
    chain: &Chain,
    residue: &Residue,
    sulfur: &Atom,
    beta_carbon: &Atom,
) -> CandidateSite {
    let specifier = ResidueSpecifier {
        chain_id: chain.id,
        residue_number: residue.number,
    };
    CandidateSite {
        model: model_serial,
        residue: specifier,
        sulfur: atom_site(specifier, sulfur),
        beta_carbon: atom_site(specifier, beta_carbon),
    }
}

fn atom_site(residue: ResidueSpecifier, atom: &Atom) -> AtomSite {
    AtomSite {
        residue,
        atom_name: atom.name.clone(),
        position: atom.position,
        confidence: atom.b_factor,
    }
}
