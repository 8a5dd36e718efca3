use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token whose presence marks a file as a structure prediction.
pub const DEFAULT_PREDICTOR_MARKERS: &[&str] = &["ALPHAFOLD"];

/// Where the coordinates of a structure come from.
///
/// Decides how the temperature-factor column is interpreted: as a B-factor
/// (lower is more rigid) for experimental structures, or as pLDDT (higher is
/// more confident) for predicted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Experimental,
    Predicted,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SourceKind::Experimental => "experimental",
                SourceKind::Predicted => "predicted",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid source kind '{0}'. Expected 'experimental' or 'predicted'.")]
pub struct ParseSourceKindError(pub String);

impl FromStr for SourceKind {
    type Err = ParseSourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "experimental" | "xray" | "x-ray" | "nmr" | "em" => Ok(SourceKind::Experimental),
            "predicted" | "prediction" | "alphafold" => Ok(SourceKind::Predicted),
            _ => Err(ParseSourceKindError(s.to_string())),
        }
    }
}

/// Classifies raw file text using the default predictor markers.
pub fn classify_source(raw_text: &str) -> SourceKind {
    classify_source_with_markers(raw_text, DEFAULT_PREDICTOR_MARKERS)
}

/// Classifies raw file text as predicted if any line contains one of
/// `markers`, compared case-insensitively.
pub fn classify_source_with_markers<S: AsRef<str>>(raw_text: &str, markers: &[S]) -> SourceKind {
    let markers: Vec<String> = markers
        .iter()
        .map(|m| m.as_ref().trim().to_uppercase())
        .filter(|m| !m.is_empty())
        .collect();
    if markers.is_empty() {
        return SourceKind::Experimental;
    }

    let is_predicted = raw_text.lines().any(|line| {
        let line = line.to_uppercase();
        markers.iter().any(|marker| line.contains(marker.as_str()))
    });

    if is_predicted {
        SourceKind::Predicted
    } else {
        SourceKind::Experimental
    }
}
