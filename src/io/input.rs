//! Project snapshot input.
//!
//! Snapshots arrive as JSON with string-typed enums; conversion into the
//! domain types happens here so unknown type strings surface as typed
//! validation errors instead of serde noise.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::errors::{Error, Result};
use crate::core::types::{FunctionPoint, FunctionPointType};
use crate::pipeline::CalculationInput;
use crate::reuse::ReuseLevel;
use crate::vaf::{GscFactor, GscScore};

/// Raw JSON form of one project
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub function_points: Vec<FunctionPointRecord>,
    #[serde(default)]
    pub gsc_scores: Vec<GscScoreRecord>,
    #[serde(default)]
    pub reuse_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionPointRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub fp_type: String,
    #[serde(default)]
    pub det_count: Option<u32>,
    #[serde(default)]
    pub ret_count: Option<u32>,
    #[serde(default)]
    pub ftr_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GscScoreRecord {
    pub factor: String,
    pub score: i64,
    #[serde(default)]
    pub weight: Option<Decimal>,
}

impl ProjectSnapshot {
    /// Convert the raw snapshot into a typed calculation input.
    ///
    /// Scores inside 0..=5 pass through untouched; a score the u8 domain
    /// cannot even hold (negative or absurdly large) is rejected here,
    /// while scores like 6 flow on to the VAF engine's validation so the
    /// pipeline can report them as a failed result.
    pub fn into_input(self) -> Result<CalculationInput> {
        let function_points = self
            .function_points
            .into_iter()
            .map(FunctionPointRecord::into_function_point)
            .collect::<Result<Vec<_>>>()?;

        let gsc_scores = self
            .gsc_scores
            .into_iter()
            .map(GscScoreRecord::into_score)
            .collect::<Result<Vec<_>>>()?;

        let reuse_level = self
            .reuse_level
            .as_deref()
            .map(str::parse::<ReuseLevel>)
            .transpose()?;

        Ok(CalculationInput {
            project: self.project,
            function_points,
            gsc_scores,
            reuse_level,
        })
    }
}

impl FunctionPointRecord {
    fn into_function_point(self) -> Result<FunctionPoint> {
        let fp_type: FunctionPointType = self.fp_type.parse()?;
        Ok(FunctionPoint {
            name: self.name,
            fp_type,
            det_count: self.det_count,
            ret_count: self.ret_count,
            ftr_count: self.ftr_count,
        })
    }
}

impl GscScoreRecord {
    fn into_score(self) -> Result<GscScore> {
        let factor: GscFactor = self.factor.parse()?;
        let score = u8::try_from(self.score).map_err(|_| Error::GscScoreOutOfRange {
            factor: factor.id().to_string(),
            score: self.score,
        })?;
        Ok(GscScore {
            factor,
            score,
            weight: self.weight.unwrap_or(Decimal::ONE),
        })
    }
}

/// Parse one project snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> Result<CalculationInput> {
    let snapshot: ProjectSnapshot = serde_json::from_str(json)?;
    snapshot.into_input()
}

/// Load one project snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<CalculationInput> {
    let contents = fs::read_to_string(path)?;
    parse_snapshot(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const REFERENCE: &str = indoc! {r#"
        {
            "project": "registration-portal",
            "function_points": [
                {"name": "citizen file", "type": "ILF", "det_count": 15, "ret_count": 1},
                {"name": "register citizen", "type": "EI", "det_count": 3, "ftr_count": 1}
            ],
            "gsc_scores": [
                {"factor": "TF01", "score": 3}, {"factor": "TF02", "score": 3},
                {"factor": "TF03", "score": 3}, {"factor": "TF04", "score": 3},
                {"factor": "TF05", "score": 3}, {"factor": "TF06", "score": 3},
                {"factor": "TF07", "score": 3}, {"factor": "TF08", "score": 3},
                {"factor": "TF09", "score": 3}, {"factor": "TF10", "score": 3},
                {"factor": "TF11", "score": 3}, {"factor": "TF12", "score": 3},
                {"factor": "TF13", "score": 3}, {"factor": "TF14", "score": 3}
            ],
            "reuse_level": "NONE"
        }
    "#};

    #[test]
    fn reference_snapshot_parses_into_typed_input() {
        let input = parse_snapshot(REFERENCE).unwrap();
        assert_eq!(input.project.as_deref(), Some("registration-portal"));
        assert_eq!(input.function_points.len(), 2);
        assert_eq!(input.function_points[0].fp_type, FunctionPointType::Ilf);
        assert_eq!(input.gsc_scores.len(), 14);
        assert_eq!(input.reuse_level, Some(ReuseLevel::None));
    }

    #[test]
    fn unknown_type_string_is_a_typed_validation_error() {
        let err = parse_snapshot(r#"{"function_points": [{"type": "ILX"}]}"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFunctionPointType(t) if t == "ILX"));
    }

    #[test]
    fn unknown_factor_is_a_typed_validation_error() {
        let err =
            parse_snapshot(r#"{"gsc_scores": [{"factor": "TF99", "score": 1}]}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownGscFactor(f) if f == "TF99"));
    }

    #[test]
    fn negative_score_is_out_of_range() {
        let err =
            parse_snapshot(r#"{"gsc_scores": [{"factor": "TF01", "score": -1}]}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::GscScoreOutOfRange { ref factor, score: -1 } if factor == "TF01"
        ));
    }

    #[test]
    fn score_of_six_parses_and_is_left_to_the_engine() {
        let input = parse_snapshot(r#"{"gsc_scores": [{"factor": "TF01", "score": 6}]}"#).unwrap();
        assert_eq!(input.gsc_scores[0].score, 6);
    }

    #[test]
    fn unknown_reuse_level_is_rejected() {
        let err = parse_snapshot(r#"{"reuse_level": "TOTAL"}"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedReuseLevel(l) if l == "TOTAL"));
    }

    #[test]
    fn missing_fields_default_sensibly() {
        let input = parse_snapshot("{}").unwrap();
        assert!(input.project.is_none());
        assert!(input.function_points.is_empty());
        assert!(input.reuse_level.is_none());
    }
}
