//! Technical complexity assessment: GSC factors and the Value
//! Adjustment Factor

pub mod engine;
pub mod factors;

pub use engine::{
    compute_vaf, compute_vaf_or_default, total_influence, validate_scores, VafOutcome, VAF_BASE,
    VAF_MAX, VAF_MIN, VAF_STEP,
};
pub use factors::{uniform_scores, GscFactor, GscScore};
