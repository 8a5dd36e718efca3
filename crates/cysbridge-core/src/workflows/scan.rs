use crate::core::io::pdb::{PdbError, PdbFile, PdbMetadata};
use crate::core::io::source::{SourceKind, classify_source_with_markers};
use crate::core::io::traits::StructureFile;
use crate::core::models::site::BridgeRecord;
use crate::core::models::structure::Structure;
use crate::core::report::format_report;
use crate::engine::config::{ScanConfig, SourceSelection};
use crate::engine::error::EngineError;
use crate::engine::tasks::bridge_detection::{self, DetectionSummary};
use crate::engine::tasks::candidate_selection;
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub source: SourceKind,
    pub models: usize,
    pub candidates: usize,
    pub summary: DetectionSummary,
    pub bridges: Vec<BridgeRecord>,
}

impl ScanResult {
    /// The human-readable report for this result's bridges.
    pub fn report(&self) -> String {
        format_report(&self.bridges)
    }
}

/// Decides the source type for a parsed file.
///
/// An explicit selection wins; otherwise the header records are scanned for
/// the configured predictor markers. Coordinate, TER/CONECT/MASTER and
/// post-`END` lines are not consulted.
pub fn resolve_source(config: &ScanConfig, metadata: &PdbMetadata) -> SourceKind {
    match config.source {
        SourceSelection::Fixed(kind) => kind,
        SourceSelection::Auto => {
            classify_source_with_markers(&metadata.header_text(), &config.predictor_markers)
        }
    }
}

/// Runs the candidate filter and the pairwise screen on an already parsed structure.
#[instrument(skip_all, name = "scan_workflow", fields(%source))]
pub fn scan_structure(structure: &Structure, source: SourceKind, config: &ScanConfig) -> ScanResult {
    // === Phase 1: Candidate Selection ===
    let candidates = candidate_selection::select_candidates(
        structure,
        source,
        &config.confidence,
        config.models,
    );

    // === Phase 2: Pairwise Screen ===
    let (bridges, summary) = bridge_detection::detect_with_summary(&candidates, &config.criteria);

    ScanResult {
        source,
        models: structure.models().len(),
        candidates: candidates.len(),
        summary,
        bridges,
    }
}

/// Parses PDB text held in memory and scans it.
pub fn scan_text(text: &str, config: &ScanConfig) -> Result<ScanResult, PdbError> {
    let (structure, metadata) = PdbFile::read_from_str(text)?;
    let source = resolve_source(config, &metadata);
    Ok(scan_structure(&structure, source, config))
}

/// Reads the PDB file at `path` and scans it for disulfide bridges.
#[instrument(skip_all, name = "scan_file", fields(path = %path.display()))]
pub fn run(path: &Path, config: &ScanConfig) -> Result<ScanResult, EngineError> {
    let (structure, metadata) =
        PdbFile::read_from_path(path).map_err(|source| EngineError::StructureRead {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        id_code = metadata.id_code.as_deref().unwrap_or("-"),
        models = structure.models().len(),
        atoms = structure.atoms_iter().count(),
        "Structure loaded."
    );

    let source = resolve_source(config, &metadata);
    Ok(scan_structure(&structure, source, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::NO_BRIDGES_MESSAGE;
    use crate::engine::config::{ModelSelection, ScanConfigBuilder};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        pos: (f64, f64, f64),
        b_factor: f64,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}           {}",
            serial,
            name,
            res_name,
            chain,
            res_seq,
            pos.0,
            pos.1,
            pos.2,
            1.0,
            b_factor,
            &name[..1]
        )
    }

    /// Two cysteines in chain A with SG atoms `distance` apart and a
    /// CB-SG-SG-CB torsion of `dihedral_deg`.
    fn cysteine_pair(distance: f64, dihedral_deg: f64, b_factor: f64) -> Vec<String> {
        let theta = dihedral_deg.to_radians();
        vec![
            atom_line(1, "CB", "CYS", 'A', 3, (1.8, 0.0, 0.0), b_factor),
            atom_line(2, "SG", "CYS", 'A', 3, (0.0, 0.0, 0.0), b_factor),
            atom_line(
                3,
                "CB",
                "CYS",
                'A',
                40,
                (1.8 * theta.cos(), 1.8 * theta.sin(), distance),
                b_factor,
            ),
            atom_line(4, "SG", "CYS", 'A', 40, (0.0, 0.0, distance), b_factor),
        ]
    }

    fn pdb(header: &[&str], atoms: Vec<String>) -> String {
        header
            .iter()
            .map(|line| line.to_string())
            .chain(atoms)
            .chain(std::iter::once("END".to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn ideal_bridge_in_experimental_file_is_reported() {
        let text = pdb(&["EXPDTA    X-RAY DIFFRACTION"], cysteine_pair(2.05, 90.0, 12.0));
        let result = scan_text(&text, &ScanConfig::default()).unwrap();

        assert_eq!(result.source, SourceKind::Experimental);
        assert_eq!(result.candidates, 2);
        assert_eq!(result.bridges.len(), 1);
        let report = result.report();
        assert!(report.contains("between CYS 3 in chain A and CYS 40 in chain A"));
        assert!(report.contains("Distance: 2.05 Å, Dihedral angle: 90.00°"));
    }

    #[test]
    fn off_window_dihedral_reports_no_bridges() {
        let text = pdb(&[], cysteine_pair(2.05, 70.0, 12.0));
        let result = scan_text(&text, &ScanConfig::default()).unwrap();

        assert!(result.bridges.is_empty());
        assert_eq!(result.summary.angle_rejected, 1);
        assert_eq!(result.report(), format!("{}\n", NO_BRIDGES_MESSAGE));
    }

    #[test]
    fn high_b_factor_excludes_experimental_candidates() {
        let text = pdb(&[], cysteine_pair(2.05, 90.0, 45.0));
        let result = scan_text(&text, &ScanConfig::default()).unwrap();

        assert_eq!(result.candidates, 0);
        assert!(result.bridges.is_empty());
    }

    #[test]
    fn predictor_marker_switches_to_plddt_rule() {
        let header = ["REMARK   1 PREDICTED BY ALPHAFOLD MONOMER V2.0"];

        let confident = pdb(&header, cysteine_pair(2.05, 90.0, 92.0));
        let result = scan_text(&confident, &ScanConfig::default()).unwrap();
        assert_eq!(result.source, SourceKind::Predicted);
        assert_eq!(result.bridges.len(), 1);

        let low_plddt = pdb(&header, cysteine_pair(2.05, 90.0, 40.0));
        let result = scan_text(&low_plddt, &ScanConfig::default()).unwrap();
        assert_eq!(result.candidates, 0);
    }

    #[test]
    fn explicit_source_overrides_header_scan() {
        let text = pdb(&["REMARK   1 ALPHAFOLD"], cysteine_pair(2.05, 90.0, 12.0));
        let config = ScanConfigBuilder::new()
            .source(SourceSelection::Fixed(SourceKind::Experimental))
            .build()
            .unwrap();

        let result = scan_text(&text, &config).unwrap();
        assert_eq!(result.source, SourceKind::Experimental);
        assert_eq!(result.bridges.len(), 1);
    }

    #[test]
    fn structure_without_cysteines_reports_no_bridges() {
        let atoms = vec![
            atom_line(1, "CA", "GLY", 'A', 1, (0.0, 0.0, 0.0), 10.0),
            atom_line(2, "CB", "SER", 'A', 2, (1.5, 0.0, 0.0), 10.0),
        ];
        let result = scan_text(&pdb(&[], atoms), &ScanConfig::default()).unwrap();

        assert_eq!(result.candidates, 0);
        assert_eq!(result.summary.pairs_evaluated, 0);
        assert_eq!(result.report(), format!("{}\n", NO_BRIDGES_MESSAGE));
    }

    #[test]
    fn first_model_option_limits_scan() {
        let mut atoms = vec!["MODEL        1".to_string()];
        atoms.extend(cysteine_pair(2.05, 90.0, 12.0));
        atoms.push("ENDMDL".to_string());
        atoms.push("MODEL        2".to_string());
        atoms.extend(cysteine_pair(2.05, 90.0, 12.0));
        atoms.push("ENDMDL".to_string());
        let text = pdb(&[], atoms);

        // Candidates in order: model 1 C3, model 1 C40, model 2 C3, model 2 C40.
        // Same-numbered residues of the two models share coordinates and fail
        // on distance; every other pairing, across models too, is a bridge.
        let all = scan_text(&text, &ScanConfig::default()).unwrap();
        assert_eq!(all.models, 2);
        assert_eq!(all.candidates, 4);
        assert_eq!(all.summary.pairs_evaluated, 6);
        assert_eq!(all.summary.distance_rejected, 2);
        let pairs: Vec<((usize, isize), (usize, isize))> = all
            .bridges
            .iter()
            .map(|b| {
                (
                    (b.first_model, b.first.residue_number),
                    (b.second_model, b.second.residue_number),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ((1, 3), (1, 40)),
                ((1, 3), (2, 40)),
                ((1, 40), (2, 3)),
                ((2, 3), (2, 40)),
            ]
        );
        assert_eq!(all.bridges.iter().filter(|b| b.spans_models()).count(), 2);

        let config = ScanConfigBuilder::new()
            .models(ModelSelection::First)
            .build()
            .unwrap();
        let first = scan_text(&text, &config).unwrap();
        assert_eq!(first.candidates, 2);
        assert_eq!(first.bridges.len(), 1);
        assert_eq!((first.bridges[0].first_model, first.bridges[0].second_model), (1, 1));
    }

    #[test]
    fn marker_outside_header_records_is_ignored() {
        let mut atoms = cysteine_pair(2.05, 90.0, 12.0);
        atoms.push("TER       5      CYS A  40   ALPHAFOLD".to_string());
        atoms.push("END".to_string());
        atoms.push("REMARK   1 ALPHAFOLD".to_string());
        let text = atoms.join("\n");

        let result = scan_text(&text, &ScanConfig::default()).unwrap();
        assert_eq!(result.source, SourceKind::Experimental);
        assert_eq!(result.bridges.len(), 1);
    }

    #[test]
    fn run_reads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", pdb(&[], cysteine_pair(2.2, -87.0, 8.0))).unwrap();

        let result = run(file.path(), &ScanConfig::default()).unwrap();
        assert_eq!(result.bridges.len(), 1);
        assert!((result.bridges[0].dihedral + 87.0).abs() < 0.05);
    }

    #[test]
    fn run_reports_path_on_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.pdb");

        let error = run(&missing, &ScanConfig::default()).unwrap_err();
        match error {
            EngineError::StructureRead { path, source } => {
                assert_eq!(path, missing);
                assert!(matches!(source, PdbError::Io(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
