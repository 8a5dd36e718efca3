use crate::core::models::site::{BridgeRecord, CandidatePair, CandidateSite};
use crate::core::utils::geometry;
use crate::engine::config::BridgeCriteria;
use itertools::Itertools;
use serde::Serialize;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters describing how the pairwise screen went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetectionSummary {
    pub pairs_evaluated: usize,
    pub distance_rejected: usize,
    pub angle_rejected: usize,
    pub accepted: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    DistanceRejected(CandidatePair),
    AngleRejected(CandidatePair),
    Accepted(BridgeRecord),
}

/// Every unordered index pair `(i, j)` with `i < j < count`, in
/// lexicographic order.
pub fn candidate_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).tuple_combinations()
}

/// Tests one pair of candidates against the distance window, then the
/// dihedral window.
///
/// The dihedral is measured over CB(first) → SG(first) → SG(second) →
/// CB(second) only when the distance passes.
pub fn evaluate_pair(
    candidates: &[CandidateSite],
    first: usize,
    second: usize,
    criteria: &BridgeCriteria,
) -> PairOutcome {
    let a = &candidates[first];
    let b = &candidates[second];

    let distance = geometry::distance(&a.sulfur.position, &b.sulfur.position);
    if !criteria.accepts_distance(distance) {
        return PairOutcome::DistanceRejected(CandidatePair {
            first,
            second,
            distance,
            dihedral: None,
        });
    }

    let dihedral = geometry::dihedral(
        &a.beta_carbon.position,
        &a.sulfur.position,
        &b.sulfur.position,
        &b.beta_carbon.position,
    );
    if !criteria.accepts_dihedral(dihedral) {
        return PairOutcome::AngleRejected(CandidatePair {
            first,
            second,
            distance,
            dihedral: Some(dihedral),
        });
    }

    PairOutcome::Accepted(BridgeRecord {
        first: a.residue,
        second: b.residue,
        first_model: a.model,
        second_model: b.model,
        distance,
        dihedral,
    })
}

/// Returns every candidate pair that satisfies both geometric windows.
pub fn detect(candidates: &[CandidateSite], criteria: &BridgeCriteria) -> Vec<BridgeRecord> {
    detect_with_summary(candidates, criteria).0
}

/// Like [`detect`], also counting why rejected pairs were rejected.
///
/// Records come out in pair order: by the first candidate's index, then by
/// the second's. The parallel build evaluates pairs concurrently but keeps
/// that order.
#[instrument(skip_all, name = "bridge_detection_task")]
pub fn detect_with_summary(
    candidates: &[CandidateSite],
    criteria: &BridgeCriteria,
) -> (Vec<BridgeRecord>, DetectionSummary) {
    let pairs: Vec<(usize, usize)> = candidate_pairs(candidates.len()).collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    let outcomes: Vec<PairOutcome> = iterator
        .map(|&(first, second)| evaluate_pair(candidates, first, second, criteria))
        .collect();

    let mut summary = DetectionSummary {
        pairs_evaluated: outcomes.len(),
        ..DetectionSummary::default()
    };
    let mut bridges = Vec::new();
    for outcome in outcomes {
        match outcome {
            PairOutcome::DistanceRejected(_) => summary.distance_rejected += 1,
            PairOutcome::AngleRejected(_) => summary.angle_rejected += 1,
            PairOutcome::Accepted(record) => {
                summary.accepted += 1;
                bridges.push(record);
            }
        }
    }

    info!(
        candidates = candidates.len(),
        pairs = summary.pairs_evaluated,
        distance_rejected = summary.distance_rejected,
        angle_rejected = summary.angle_rejected,
        bridges = summary.accepted,
        "Pairwise bridge screen complete."
    );
    (bridges, summary)
}
