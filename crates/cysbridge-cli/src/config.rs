use crate::cli::Cli;
use crate::error::{CliError, Result};
use cysbridge::engine::config::{self as core_config, ModelSelection, SourceSelection};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCriteriaConfig {
    #[serde(rename = "distance-min")]
    distance_min: Option<f64>,
    #[serde(rename = "distance-max")]
    distance_max: Option<f64>,
    #[serde(rename = "dihedral-min")]
    dihedral_min: Option<f64>,
    #[serde(rename = "dihedral-max")]
    dihedral_max: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialConfidenceConfig {
    #[serde(rename = "max-b-factor")]
    max_b_factor: Option<f64>,
    #[serde(rename = "min-plddt")]
    min_plddt: Option<f64>,
}

/// Scan settings as read from a TOML file, before CLI overrides.
///
/// ```toml
/// source = "auto"
/// first-model = false
/// predictor-markers = ["ALPHAFOLD"]
///
/// [criteria]
/// distance-min = 1.5
/// distance-max = 2.5
/// dihedral-min = 84.0
/// dihedral-max = 96.0
///
/// [confidence]
/// max-b-factor = 30.0
/// min-plddt = 50.0
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScanConfig {
    source: Option<String>,
    #[serde(rename = "first-model")]
    first_model: Option<bool>,
    #[serde(rename = "predictor-markers")]
    predictor_markers: Option<Vec<String>>,
    criteria: Option<PartialCriteriaConfig>,
    confidence: Option<PartialConfidenceConfig>,
}

impl PartialScanConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty partial.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<core_config::ScanConfig> {
        self.apply_set_values(&cli.set_values)?;

        let criteria = self.criteria.take().unwrap_or_default();
        let confidence = self.confidence.take().unwrap_or_default();

        let source = match (cli.source, self.source.as_deref()) {
            (Some(selection), _) => Some(selection),
            (None, Some(text)) => Some(SourceSelection::from_str(text).map_err(|e| {
                CliError::Config(format!("Invalid value for `source`: {}", e))
            })?),
            (None, None) => None,
        };

        let models = if cli.first_model || self.first_model.unwrap_or(false) {
            ModelSelection::First
        } else {
            ModelSelection::All
        };

        let mut builder = core_config::ScanConfigBuilder::new().models(models);

        if let Some(value) = criteria.distance_min {
            builder = builder.min_distance(value);
        }
        if let Some(value) = criteria.distance_max {
            builder = builder.max_distance(value);
        }
        if let Some(value) = criteria.dihedral_min {
            builder = builder.min_abs_dihedral(value);
        }
        if let Some(value) = criteria.dihedral_max {
            builder = builder.max_abs_dihedral(value);
        }
        if let Some(value) = cli.max_b_factor.or(confidence.max_b_factor) {
            builder = builder.max_b_factor(value);
        }
        if let Some(value) = cli.min_plddt.or(confidence.min_plddt) {
            builder = builder.min_plddt(value);
        }
        if let Some(selection) = source {
            builder = builder.source(selection);
        }
        if let Some(markers) = self.predictor_markers {
            builder = builder.predictor_markers(markers);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "criteria.distance-min" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .distance_min = Some(parse_value(key, value_str, "float")?);
                }
                "criteria.distance-max" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .distance_max = Some(parse_value(key, value_str, "float")?);
                }
                "criteria.dihedral-min" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .dihedral_min = Some(parse_value(key, value_str, "float")?);
                }
                "criteria.dihedral-max" => {
                    self.criteria
                        .get_or_insert_with(Default::default)
                        .dihedral_max = Some(parse_value(key, value_str, "float")?);
                }
                "confidence.max-b-factor" => {
                    self.confidence
                        .get_or_insert_with(Default::default)
                        .max_b_factor = Some(parse_value(key, value_str, "float")?);
                }
                "confidence.min-plddt" => {
                    self.confidence
                        .get_or_insert_with(Default::default)
                        .min_plddt = Some(parse_value(key, value_str, "float")?);
                }
                "source" => {
                    self.source = Some(value_str.to_string());
                }
                "first-model" => {
                    self.first_model = Some(parse_value(key, value_str, "boolean")?);
                }
                "predictor-markers" => {
                    self.predictor_markers = Some(
                        value_str
                            .split(',')
                            .map(str::trim)
                            .filter(|m| !m.is_empty())
                            .map(str::to_string)
                            .collect(),
                    );
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}
