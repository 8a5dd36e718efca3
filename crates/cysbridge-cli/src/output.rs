use cysbridge::core::report::write_report;
use cysbridge::workflows::scan::ScanResult;
use serde::Serialize;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

const BANNER: &str = "\
*********************************************************
* Welcome to CysBridge                                  *
* Finds potential disulfide bridges in protein          *
* structures read from PDB files. Supports experimental *
* data as well as AlphaFold predictions.                *
*********************************************************
";

pub const FAREWELL: &str = "Thank you for using CysBridge. Goodbye!";

pub fn banner() -> &'static str {
    BANNER
}

/// The outcome of scanning one input, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn success(path: &Path, result: ScanResult) -> Self {
        Self {
            path: path.to_path_buf(),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(path: &Path, error: &dyn std::error::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Renders the text block for one successfully scanned input.
///
/// With `with_heading` set the report is preceded by a `==> path <==` line,
/// used when several inputs are scanned in one run.
pub fn write_text_result<W: Write>(
    out: &mut W,
    path: &Path,
    result: &ScanResult,
    with_heading: bool,
) -> fmt::Result {
    if with_heading {
        writeln!(out, "==> {} <== ({} structure)", path.display(), result.source)?;
    }
    write_report(out, &result.bridges)
}

pub fn could_not_process_message(path: &Path, reason: &dyn fmt::Display) -> String {
    format!("Could not process the PDB file '{}': {}", path.display(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cysbridge::core::io::source::SourceKind;
    use cysbridge::core::models::site::{BridgeRecord, ResidueSpecifier};
    use cysbridge::core::report::NO_BRIDGES_MESSAGE;
    use cysbridge::engine::tasks::bridge_detection::DetectionSummary;

    fn result_with(bridges: Vec<BridgeRecord>) -> ScanResult {
        ScanResult {
            source: SourceKind::Predicted,
            models: 1,
            candidates: 2,
            summary: DetectionSummary {
                pairs_evaluated: 1,
                accepted: bridges.len(),
                ..DetectionSummary::default()
            },
            bridges,
        }
    }

    fn bridge() -> BridgeRecord {
        BridgeRecord {
            first: ResidueSpecifier {
                chain_id: 'A',
                residue_number: 3,
            },
            second: ResidueSpecifier {
                chain_id: 'A',
                residue_number: 40,
            },
            first_model: 1,
            second_model: 1,
            distance: 2.04,
            dihedral: -89.5,
        }
    }

    #[test]
    fn banner_lines_share_one_width() {
        let widths: Vec<usize> = banner().lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn text_result_without_heading_is_the_plain_report() {
        let mut out = String::new();
        write_text_result(&mut out, Path::new("x.pdb"), &result_with(vec![]), false).unwrap();
        assert_eq!(out, format!("{}\n", NO_BRIDGES_MESSAGE));
    }

    #[test]
    fn text_result_heading_names_file_and_source() {
        let mut out = String::new();
        write_text_result(
            &mut out,
            Path::new("data/af.pdb"),
            &result_with(vec![bridge()]),
            true,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "==> data/af.pdb <== (predicted structure)");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Distance: 2.04 Å, Dihedral angle: -89.50°");
    }

    #[test]
    fn json_report_carries_result_or_error() {
        let ok = FileReport::success(Path::new("a.pdb"), result_with(vec![bridge()]));
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["path"], "a.pdb");
        assert_eq!(value["result"]["source"], "predicted");
        assert_eq!(value["result"]["bridges"][0]["first"]["chain_id"], "A");
        assert_eq!(value["result"]["bridges"][0]["second"]["residue_number"], 40);
        assert_eq!(value["result"]["bridges"][0]["first_model"], 1);
        assert_eq!(value["result"]["bridges"][0]["second_model"], 1);
        assert!(value.get("error").is_none());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let failed = FileReport::failure(Path::new("b.pdb"), &io);
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["error"], "missing");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn could_not_process_message_names_path_and_reason() {
        let message = could_not_process_message(Path::new("broken.pdb"), &"no atoms");
        assert_eq!(message, "Could not process the PDB file 'broken.pdb': no atoms");
    }
}
