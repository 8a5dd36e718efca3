use crate::core::io::source::{DEFAULT_PREDICTOR_MARKERS, ParseSourceKindError, SourceKind};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid range for {name}: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("Value for {name} must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },
    #[error("Value for {name} is out of bounds: {value} (allowed {allowed})")]
    OutOfBounds {
        name: &'static str,
        value: f64,
        allowed: &'static str,
    },
}

/// Geometric windows a cysteine pair must fall into to be reported.
///
/// Both windows are inclusive. The dihedral window is applied to the
/// absolute value of the signed CB-SG-SG-CB torsion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeCriteria {
    pub min_distance: f64,
    pub max_distance: f64,
    pub min_abs_dihedral: f64,
    pub max_abs_dihedral: f64,
}

impl Default for BridgeCriteria {
    fn default() -> Self {
        Self {
            min_distance: 1.5,
            max_distance: 2.5,
            min_abs_dihedral: 84.0,
            max_abs_dihedral: 96.0,
        }
    }
}

impl BridgeCriteria {
    /// NaN never passes.
    #[inline]
    pub fn accepts_distance(&self, distance: f64) -> bool {
        distance >= self.min_distance && distance <= self.max_distance
    }

    /// NaN never passes.
    #[inline]
    pub fn accepts_dihedral(&self, dihedral: f64) -> bool {
        let magnitude = dihedral.abs();
        magnitude >= self.min_abs_dihedral && magnitude <= self.max_abs_dihedral
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_range("distance", self.min_distance, self.max_distance)?;
        check_range("dihedral", self.min_abs_dihedral, self.max_abs_dihedral)?;
        if self.min_distance < 0.0 {
            return Err(ConfigError::OutOfBounds {
                name: "min_distance",
                value: self.min_distance,
                allowed: ">= 0",
            });
        }
        if self.min_abs_dihedral < 0.0 || self.max_abs_dihedral > 180.0 {
            return Err(ConfigError::OutOfBounds {
                name: "dihedral",
                value: if self.min_abs_dihedral < 0.0 {
                    self.min_abs_dihedral
                } else {
                    self.max_abs_dihedral
                },
                allowed: "0..=180",
            });
        }
        Ok(())
    }
}

/// Per-source confidence thresholds applied to the SG atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidencePolicy {
    /// Experimental structures admit sites with B-factor at or below this value.
    pub max_b_factor: f64,
    /// Predicted structures admit sites with pLDDT at or above this value.
    pub min_plddt: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            max_b_factor: 30.0,
            min_plddt: 50.0,
        }
    }
}

impl ConfidencePolicy {
    #[inline]
    pub fn admits(&self, source: SourceKind, confidence: f64) -> bool {
        match source {
            SourceKind::Experimental => confidence <= self.max_b_factor,
            SourceKind::Predicted => confidence >= self.min_plddt,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_finite("max_b_factor", self.max_b_factor)?;
        check_finite("min_plddt", self.min_plddt)
    }
}

/// How the source type of an input is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSelection {
    /// Scan the file header for predictor markers.
    #[default]
    Auto,
    /// Use this source type regardless of the file content.
    Fixed(SourceKind),
}

impl FromStr for SourceSelection {
    type Err = ParseSourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(SourceSelection::Auto)
        } else {
            s.parse().map(SourceSelection::Fixed)
        }
    }
}

/// Which models of a multi-model file take part in the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSelection {
    #[default]
    All,
    First,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub criteria: BridgeCriteria,
    pub confidence: ConfidencePolicy,
    pub source: SourceSelection,
    pub models: ModelSelection,
    pub predictor_markers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            criteria: BridgeCriteria::default(),
            confidence: ConfidencePolicy::default(),
            source: SourceSelection::default(),
            models: ModelSelection::default(),
            predictor_markers: DEFAULT_PREDICTOR_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    min_distance: Option<f64>,
    max_distance: Option<f64>,
    min_abs_dihedral: Option<f64>,
    max_abs_dihedral: Option<f64>,
    max_b_factor: Option<f64>,
    min_plddt: Option<f64>,
    source: Option<SourceSelection>,
    models: Option<ModelSelection>,
    predictor_markers: Option<Vec<String>>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_distance(mut self, value: f64) -> Self {
        self.min_distance = Some(value);
        self
    }
    pub fn max_distance(mut self, value: f64) -> Self {
        self.max_distance = Some(value);
        self
    }
    pub fn min_abs_dihedral(mut self, value: f64) -> Self {
        self.min_abs_dihedral = Some(value);
        self
    }
    pub fn max_abs_dihedral(mut self, value: f64) -> Self {
        self.max_abs_dihedral = Some(value);
        self
    }
    pub fn max_b_factor(mut self, value: f64) -> Self {
        self.max_b_factor = Some(value);
        self
    }
    pub fn min_plddt(mut self, value: f64) -> Self {
        self.min_plddt = Some(value);
        self
    }
    pub fn source(mut self, selection: SourceSelection) -> Self {
        self.source = Some(selection);
        self
    }
    pub fn models(mut self, selection: ModelSelection) -> Self {
        self.models = Some(selection);
        self
    }
    pub fn predictor_markers(mut self, markers: Vec<String>) -> Self {
        self.predictor_markers = Some(markers);
        self
    }

    /// Fills unset values with the defaults and validates the result.
    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let defaults = ScanConfig::default();
        let criteria = BridgeCriteria {
            min_distance: self.min_distance.unwrap_or(defaults.criteria.min_distance),
            max_distance: self.max_distance.unwrap_or(defaults.criteria.max_distance),
            min_abs_dihedral: self
                .min_abs_dihedral
                .unwrap_or(defaults.criteria.min_abs_dihedral),
            max_abs_dihedral: self
                .max_abs_dihedral
                .unwrap_or(defaults.criteria.max_abs_dihedral),
        };
        let confidence = ConfidencePolicy {
            max_b_factor: self.max_b_factor.unwrap_or(defaults.confidence.max_b_factor),
            min_plddt: self.min_plddt.unwrap_or(defaults.confidence.min_plddt),
        };
        criteria.validate()?;
        confidence.validate()?;

        Ok(ScanConfig {
            criteria,
            confidence,
            source: self.source.unwrap_or(defaults.source),
            models: self.models.unwrap_or(defaults.models),
            predictor_markers: self
                .predictor_markers
                .unwrap_or(defaults.predictor_markers),
        })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn check_range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    check_finite(name, min)?;
    check_finite(name, max)?;
    if min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}
