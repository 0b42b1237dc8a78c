//! Estimation configuration loaded from `.fpmeter.toml`.
//!
//! The defaults are the government standard constants; a config file only
//! exists so a review center with a different rate card or weight table
//! can re-run estimates without touching code.

use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::complexity::WeightTable;
use crate::core::errors::{Error, Result};
use crate::core::types::{ComplexityLevel, FunctionPointType};
use crate::effort::EffortRates;

pub const CONFIG_FILE_NAME: &str = ".fpmeter.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Productivity/rate overrides; government standard when absent
    pub rates: Option<EffortRates>,
    /// Weight table overrides keyed by function point type
    pub weights: Option<HashMap<String, LevelWeights>>,
    /// Substitute the neutral GSC default sheet on invalid score input
    /// instead of failing the calculation
    pub default_vaf_on_invalid: bool,
}

/// Weights for one function point type at each tier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelWeights {
    pub low: Option<Decimal>,
    pub medium: Option<Decimal>,
    pub high: Option<Decimal>,
}

impl EstimationConfig {
    /// Effective rate card
    pub fn effort_rates(&self) -> EffortRates {
        self.rates.unwrap_or_default()
    }

    /// Effective weight table: the standard NESMA table, or the
    /// configured override.
    ///
    /// Unknown type keys are a configuration error. An override table
    /// that omits a (type, tier) entry is accepted here and surfaces as
    /// a hard [`Error::MissingWeight`] only if a function point actually
    /// classifies into the hole.
    pub fn weight_table(&self) -> Result<WeightTable> {
        let Some(overrides) = &self.weights else {
            return Ok(WeightTable::standard().clone());
        };

        let mut entries = Vec::new();
        for (key, levels) in overrides {
            let fp_type: FunctionPointType = key
                .parse()
                .map_err(|_| Error::Config(format!("unknown function point type in weights: {key}")))?;
            let tiers = [
                (ComplexityLevel::Low, levels.low),
                (ComplexityLevel::Medium, levels.medium),
                (ComplexityLevel::High, levels.high),
            ];
            for (level, weight) in tiers {
                if let Some(weight) = weight {
                    entries.push(((fp_type, level), weight));
                }
            }
        }
        Ok(WeightTable::from_entries(entries))
    }

    /// Load configuration by walking up from the current directory,
    /// falling back to defaults when no file is found or a file fails to
    /// parse.
    pub fn load() -> EstimationConfig {
        const MAX_TRAVERSAL_DEPTH: usize = 10;

        let current = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!("failed to get current directory: {e}; using default config");
                return EstimationConfig::default();
            }
        };

        directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find_map(|path| try_load_config_from_path(&path))
            .unwrap_or_else(|| {
                log::debug!("no {CONFIG_FILE_NAME} found; using default config");
                EstimationConfig::default()
            })
    }

    /// Load configuration from one specific file
    pub fn load_from(path: &Path) -> Result<EstimationConfig> {
        let contents = read_config_file(path)?;
        let config = parse_and_validate_config(&contents).map_err(Error::Config)?;
        Ok(config)
    }
}

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<EstimationConfig, String> {
    let config = toml::from_str::<EstimationConfig>(contents)
        .map_err(|e| format!("failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(rates) = &config.rates {
        rates.validate().map_err(|e| e.to_string())?;
    }
    config.weight_table().map_err(|e| e.to_string())?;

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<EstimationConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {e}", config_path.display());
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}
