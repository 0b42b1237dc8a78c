//! Common type definitions used across the estimation engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::errors::Error;

/// NESMA function point type.
///
/// ILF and EIF are data functions sized by DET/RET counts; EI, EO and EQ
/// are transaction functions sized by DET/FTR counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionPointType {
    Ilf,
    Eif,
    Ei,
    Eo,
    Eq,
}

impl FunctionPointType {
    /// All five NESMA function point types
    pub const ALL: [FunctionPointType; 5] = [
        FunctionPointType::Ilf,
        FunctionPointType::Eif,
        FunctionPointType::Ei,
        FunctionPointType::Eo,
        FunctionPointType::Eq,
    ];

    /// True for the data function types (ILF, EIF)
    pub const fn is_data_function(self) -> bool {
        matches!(self, FunctionPointType::Ilf | FunctionPointType::Eif)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FunctionPointType::Ilf => "ILF",
            FunctionPointType::Eif => "EIF",
            FunctionPointType::Ei => "EI",
            FunctionPointType::Eo => "EO",
            FunctionPointType::Eq => "EQ",
        }
    }
}

impl std::fmt::Display for FunctionPointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FunctionPointType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ILF" => Ok(FunctionPointType::Ilf),
            "EIF" => Ok(FunctionPointType::Eif),
            "EI" => Ok(FunctionPointType::Ei),
            "EO" => Ok(FunctionPointType::Eo),
            "EQ" => Ok(FunctionPointType::Eq),
            other => Err(Error::UnsupportedFunctionPointType(other.to_string())),
        }
    }
}

/// Complexity tier assigned by the DET/RET and DET/FTR matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            ComplexityLevel::Low => "LOW",
            ComplexityLevel::Medium => "MEDIUM",
            ComplexityLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One counted function of the system under estimation.
///
/// Inputs are never mutated by the engine; classification and weight are
/// returned alongside as [`ClassifiedFunctionPoint`] values. Counts left
/// unset default to 1 before classification so a sparse inventory never
/// lands on a degenerate zero boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPoint {
    pub name: Option<String>,
    pub fp_type: FunctionPointType,
    pub det_count: Option<u32>,
    /// Record element types; meaningful for ILF/EIF only
    pub ret_count: Option<u32>,
    /// File types referenced; meaningful for EI/EO/EQ only
    pub ftr_count: Option<u32>,
}

impl FunctionPoint {
    pub fn new(fp_type: FunctionPointType, det_count: u32) -> Self {
        Self {
            name: None,
            fp_type,
            det_count: Some(det_count),
            ret_count: None,
            ftr_count: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_ret(mut self, ret_count: u32) -> Self {
        self.ret_count = Some(ret_count);
        self
    }

    pub fn with_ftr(mut self, ftr_count: u32) -> Self {
        self.ftr_count = Some(ftr_count);
        self
    }

    /// Effective DET count, defaulting to 1 when unset
    pub fn det(&self) -> u32 {
        self.det_count.unwrap_or(1)
    }

    /// Effective RET count, defaulting to 1 when unset
    pub fn ret(&self) -> u32 {
        self.ret_count.unwrap_or(1)
    }

    /// Effective FTR count, defaulting to 1 when unset
    pub fn ftr(&self) -> u32 {
        self.ftr_count.unwrap_or(1)
    }
}

/// Classification output for a single function point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedFunctionPoint {
    pub name: Option<String>,
    pub fp_type: FunctionPointType,
    pub level: ComplexityLevel,
    pub weight: Decimal,
}

/// Terminal state of one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CalculationStatus {
    Completed,
    Failed,
}

impl CalculationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            CalculationStatus::Completed => "COMPLETED",
            CalculationStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for CalculationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one orchestrated calculation.
///
/// Either every numeric field is populated (`Completed`) or none may be
/// relied upon (`Failed` with a remark); the engine never returns a
/// partially filled result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Caller-supplied project identifier, carried through untouched
    pub project: Option<String>,
    pub status: CalculationStatus,
    pub unadjusted_fp: Option<Decimal>,
    pub vaf: Option<Decimal>,
    /// True when the neutral fallback score set replaced invalid input
    pub vaf_defaulted: bool,
    pub adjusted_fp: Option<Decimal>,
    pub reuse_level: crate::reuse::ReuseLevel,
    pub final_fp: Option<Decimal>,
    pub person_months: Option<Decimal>,
    pub cost: Option<Decimal>,
    /// Per-function-point classification breakdown
    pub breakdown: Vec<ClassifiedFunctionPoint>,
    /// Diagnostic remark, populated on failure
    pub remark: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl CalculationResult {
    /// Assemble a failed result carrying only the diagnostic remark
    pub fn failed(
        project: Option<String>,
        reuse_level: crate::reuse::ReuseLevel,
        remark: impl Into<String>,
    ) -> Self {
        Self {
            project,
            status: CalculationStatus::Failed,
            unadjusted_fp: None,
            vaf: None,
            vaf_defaulted: false,
            adjusted_fp: None,
            reuse_level,
            final_fp: None,
            person_months: None,
            cost: None,
            breakdown: Vec::new(),
            remark: Some(remark.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == CalculationStatus::Completed
    }
}
