//! The calculation orchestrator.
//!
//! One invocation runs the full sizing pipeline: UFP aggregation, VAF
//! derivation, reuse adjustment, effort/cost conversion. Validation
//! failures become `Failed` results; internal defects propagate as hard
//! errors. Batch mode evaluates projects in parallel and isolates
//! failures per project.

use chrono::Utc;
use rayon::prelude::*;

use crate::config::EstimationConfig;
use crate::core::errors::Result;
use crate::core::rounding::round_size;
use crate::core::types::{CalculationResult, CalculationStatus, FunctionPoint};
use crate::effort;
use crate::reuse::{self, ReuseLevel};
use crate::sizing;
use crate::vaf::{self, GscScore};

/// Everything the engine needs for one project's calculation.
///
/// Assembled by the caller from its own records; the engine treats it as
/// an immutable snapshot for the duration of the call.
#[derive(Debug, Clone, Default)]
pub struct CalculationInput {
    /// Caller-side project identifier, carried through untouched
    pub project: Option<String>,
    pub function_points: Vec<FunctionPoint>,
    pub gsc_scores: Vec<GscScore>,
    pub reuse_level: Option<ReuseLevel>,
}

/// Run one calculation.
///
/// Returns `Ok` with a `Completed` result on success, `Ok` with a
/// `Failed` result for validation errors (empty function point set,
/// malformed GSC sheet), and `Err` only for internal defects such as a
/// hole in a configured weight override table.
pub fn calculate(input: &CalculationInput, config: &EstimationConfig) -> Result<CalculationResult> {
    let project = input.project.clone();
    let reuse_level = input.reuse_level.unwrap_or_default();
    log::info!(
        "starting calculation for project {}",
        project.as_deref().unwrap_or("<unnamed>")
    );

    let table = config.weight_table()?;
    let rates = config.effort_rates();
    rates.validate()?;

    let sizing_outcome = match sizing::aggregate(&input.function_points, &table) {
        Ok(outcome) => outcome,
        Err(e) if e.is_validation() => return Ok(fail(project, reuse_level, e.to_string())),
        Err(e) => return Err(e),
    };

    let vaf_outcome =
        match vaf::compute_vaf_or_default(&input.gsc_scores, config.default_vaf_on_invalid) {
            Ok(outcome) => outcome,
            Err(e) if e.is_validation() => return Ok(fail(project, reuse_level, e.to_string())),
            Err(e) => return Err(e),
        };

    let adjusted_fp = round_size(sizing_outcome.unadjusted_fp * vaf_outcome.vaf);
    let final_fp = reuse::apply_reuse(adjusted_fp, reuse_level);
    let effort = effort::convert(final_fp, &rates);

    log::info!(
        "calculation completed: UFP {} VAF {} AFP {} FFP {} person-months {} cost {}",
        sizing_outcome.unadjusted_fp,
        vaf_outcome.vaf,
        adjusted_fp,
        final_fp,
        effort.person_months,
        effort.cost
    );

    Ok(CalculationResult {
        project,
        status: CalculationStatus::Completed,
        unadjusted_fp: Some(sizing_outcome.unadjusted_fp),
        vaf: Some(vaf_outcome.vaf),
        vaf_defaulted: vaf_outcome.defaulted,
        adjusted_fp: Some(adjusted_fp),
        reuse_level,
        final_fp: Some(final_fp),
        person_months: Some(effort.person_months),
        cost: Some(effort.cost),
        breakdown: sizing_outcome.breakdown,
        remark: None,
        timestamp: Utc::now(),
    })
}

/// Run many calculations, one outcome per project.
///
/// Projects are evaluated in parallel; one project's failure (validation
/// or internal) never aborts or disturbs the others. The output order
/// matches the input order.
pub fn calculate_batch(
    inputs: &[CalculationInput],
    config: &EstimationConfig,
) -> Vec<Result<CalculationResult>> {
    inputs
        .par_iter()
        .map(|input| calculate(input, config))
        .collect()
}

fn fail(project: Option<String>, reuse_level: ReuseLevel, remark: String) -> CalculationResult {
    log::warn!(
        "calculation failed for project {}: {remark}",
        project.as_deref().unwrap_or("<unnamed>")
    );
    CalculationResult::failed(project, reuse_level, remark)
}
