//! NESMA complexity classification matrices.
//!
//! Data functions (ILF, EIF) are rated on a DET×RET matrix; transaction
//! functions (EI, EO, EQ) on a DET×FTR matrix with type-dependent DET
//! breakpoints. Classification is a pure function of the counts; the
//! input record is never modified.

use crate::core::types::{ComplexityLevel, FunctionPoint, FunctionPointType};

/// DET breakpoints (low, medium) for EI and EQ transactions
const EI_EQ_DET_BREAKS: (u32, u32) = (4, 15);

/// DET breakpoints (low, medium) for EO transactions
const EO_DET_BREAKS: (u32, u32) = (5, 19);

/// Classify one function point into its complexity tier.
///
/// Unset counts have already been defaulted to 1 by
/// [`FunctionPoint::det`]/[`FunctionPoint::ret`]/[`FunctionPoint::ftr`].
///
/// # Examples
///
/// ```
/// use fpmeter::core::{ComplexityLevel, FunctionPoint, FunctionPointType};
/// use fpmeter::complexity::classify;
///
/// let ilf = FunctionPoint::new(FunctionPointType::Ilf, 19).with_ret(1);
/// assert_eq!(classify(&ilf), ComplexityLevel::Low);
///
/// let ilf = FunctionPoint::new(FunctionPointType::Ilf, 20).with_ret(1);
/// assert_eq!(classify(&ilf), ComplexityLevel::Medium);
/// ```
pub fn classify(fp: &FunctionPoint) -> ComplexityLevel {
    match fp.fp_type {
        FunctionPointType::Ilf | FunctionPointType::Eif => classify_data(fp.det(), fp.ret()),
        FunctionPointType::Ei | FunctionPointType::Eq => {
            classify_transaction(fp.det(), fp.ftr(), EI_EQ_DET_BREAKS)
        }
        FunctionPointType::Eo => classify_transaction(fp.det(), fp.ftr(), EO_DET_BREAKS),
    }
}

/// Pure function: DET×RET → tier for data functions.
///
/// - RET ≤ 1: DET ≤ 19 → Low; DET ≤ 50 → Medium; else High
/// - RET 2–5: DET ≤ 19 → Medium; else High
/// - RET ≥ 6: High regardless of DET
#[inline]
fn classify_data(det: u32, ret: u32) -> ComplexityLevel {
    if ret <= 1 {
        if det <= 19 {
            ComplexityLevel::Low
        } else if det <= 50 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    } else if ret <= 5 {
        if det <= 19 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    } else {
        ComplexityLevel::High
    }
}

/// Pure function: DET×FTR → tier for transaction functions.
///
/// - FTR ≤ 1: DET ≤ low → Low; DET ≤ medium → Medium; else High
/// - FTR = 2: DET ≤ low → Medium; else High
/// - FTR ≥ 3: High regardless of DET
#[inline]
fn classify_transaction(det: u32, ftr: u32, (low, medium): (u32, u32)) -> ComplexityLevel {
    if ftr <= 1 {
        if det <= low {
            ComplexityLevel::Low
        } else if det <= medium {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    } else if ftr == 2 {
        if det <= low {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::High
        }
    } else {
        ComplexityLevel::High
    }
}
