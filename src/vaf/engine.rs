//! Value Adjustment Factor derivation from GSC scores.
//!
//! `VAF = 0.65 + 0.01 × Σ(score × weight)`, clamped to [0.65, 1.35].
//! With scores restricted to 0..=5 and exactly 14 unit-weight factors the
//! natural range is already the clamp range; the clamp only guards
//! against malformed weights.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::errors::{Error, Result};
use crate::core::rounding::round_size;
use crate::vaf::factors::{uniform_scores, GscFactor, GscScore};

pub const VAF_BASE: Decimal = dec!(0.65);
pub const VAF_STEP: Decimal = dec!(0.01);
pub const VAF_MIN: Decimal = dec!(0.65);
pub const VAF_MAX: Decimal = dec!(1.35);

/// Influence score a factor falls back to when the neutral default
/// sheet replaces invalid input
pub const NEUTRAL_SCORE: u8 = 0;

const MAX_SCORE: u8 = 5;

/// Result of one VAF derivation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VafOutcome {
    pub vaf: Decimal,
    pub total_influence: Decimal,
    /// True when the neutral default sheet was substituted for invalid
    /// input
    pub defaulted: bool,
}

/// Check a score sheet: exactly 14 entries, each factor once, every
/// score within 0..=5.
pub fn validate_scores(scores: &[GscScore]) -> Result<()> {
    if scores.len() != GscFactor::COUNT {
        return Err(Error::GscScoreCount {
            found: scores.len(),
        });
    }

    let mut seen = HashSet::with_capacity(GscFactor::COUNT);
    for entry in scores {
        if !seen.insert(entry.factor) {
            return Err(Error::DuplicateGscFactor {
                factor: entry.factor.id().to_string(),
            });
        }
        if entry.score > MAX_SCORE {
            return Err(Error::GscScoreOutOfRange {
                factor: entry.factor.id().to_string(),
                score: i64::from(entry.score),
            });
        }
    }

    Ok(())
}

/// Total influence: Σ(score × weight) over the sheet
pub fn total_influence(scores: &[GscScore]) -> Decimal {
    scores.iter().map(GscScore::contribution).sum()
}

/// Derive the VAF from a validated score sheet.
///
/// # Examples
///
/// ```
/// use fpmeter::vaf::{compute_vaf, uniform_scores};
/// use rust_decimal_macros::dec;
///
/// let outcome = compute_vaf(&uniform_scores(3)).unwrap();
/// assert_eq!(outcome.vaf, dec!(1.0700));
/// ```
pub fn compute_vaf(scores: &[GscScore]) -> Result<VafOutcome> {
    validate_scores(scores)?;

    let total = total_influence(scores);
    let raw = VAF_BASE + VAF_STEP * total;
    let clamped = clamp_vaf(raw);

    Ok(VafOutcome {
        vaf: round_size(clamped),
        total_influence: total,
        defaulted: false,
    })
}

/// Derive the VAF, substituting the neutral default sheet when the input
/// fails validation and the caller opted in.
///
/// The substitution is logged and flagged on the outcome; it is never
/// applied silently.
pub fn compute_vaf_or_default(scores: &[GscScore], default_on_invalid: bool) -> Result<VafOutcome> {
    match compute_vaf(scores) {
        Ok(outcome) => Ok(outcome),
        Err(err) if default_on_invalid && err.is_validation() => {
            log::warn!(
                "invalid GSC score sheet ({err}); substituting neutral default scores of {NEUTRAL_SCORE}"
            );
            let outcome = compute_vaf(&uniform_scores(NEUTRAL_SCORE))?;
            Ok(VafOutcome {
                defaulted: true,
                ..outcome
            })
        }
        Err(err) => Err(err),
    }
}

fn clamp_vaf(vaf: Decimal) -> Decimal {
    if vaf < VAF_MIN {
        log::warn!("computed VAF {vaf} below {VAF_MIN}; clamping");
        VAF_MIN
    } else if vaf > VAF_MAX {
        log::warn!("computed VAF {vaf} above {VAF_MAX}; clamping");
        VAF_MAX
    } else {
        vaf
    }
}
