//! Unadjusted size aggregation

use rust_decimal::Decimal;

use crate::complexity::{classify, WeightTable};
use crate::core::errors::{Error, Result};
use crate::core::rounding::round_size;
use crate::core::types::{ClassifiedFunctionPoint, FunctionPoint};

/// Unadjusted Function Points together with the per-item breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SizingOutcome {
    pub unadjusted_fp: Decimal,
    pub breakdown: Vec<ClassifiedFunctionPoint>,
}

/// Classify and weigh every function point, summing into UFP.
///
/// Ordering of the input is irrelevant to the total. An empty inventory
/// is a validation error; a project with zero function points cannot be
/// sized.
pub fn aggregate(function_points: &[FunctionPoint], table: &WeightTable) -> Result<SizingOutcome> {
    if function_points.is_empty() {
        return Err(Error::EmptyFunctionPointSet);
    }

    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(function_points.len());

    for fp in function_points {
        let level = classify(fp);
        let weight = table.weight(fp.fp_type, level)?;
        log::debug!(
            "classified {} ({}) as {} with weight {}",
            fp.name.as_deref().unwrap_or("<unnamed>"),
            fp.fp_type,
            level,
            weight
        );
        total += weight;
        breakdown.push(ClassifiedFunctionPoint {
            name: fp.name.clone(),
            fp_type: fp.fp_type,
            level,
            weight,
        });
    }

    Ok(SizingOutcome {
        unadjusted_fp: round_size(total),
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ComplexityLevel, FunctionPointType};
    use rust_decimal_macros::dec;

    #[test]
    fn empty_set_cannot_be_sized() {
        let err = aggregate(&[], WeightTable::standard()).unwrap_err();
        assert!(matches!(err, Error::EmptyFunctionPointSet));
        assert!(err.is_validation());
    }

    #[test]
    fn single_low_ilf_sums_to_seven() {
        let fps = vec![FunctionPoint::new(FunctionPointType::Ilf, 15).with_ret(1)];
        let outcome = aggregate(&fps, WeightTable::standard()).unwrap();
        assert_eq!(outcome.unadjusted_fp, dec!(7.0000));
        assert_eq!(outcome.breakdown.len(), 1);
        assert_eq!(outcome.breakdown[0].level, ComplexityLevel::Low);
    }

    #[test]
    fn mixed_inventory_sums_weights() {
        // low ILF (7) + low EI (3) = 10
        let fps = vec![
            FunctionPoint::new(FunctionPointType::Ilf, 15)
                .with_ret(1)
                .named("customer file"),
            FunctionPoint::new(FunctionPointType::Ei, 3)
                .with_ftr(1)
                .named("register customer"),
        ];
        let outcome = aggregate(&fps, WeightTable::standard()).unwrap();
        assert_eq!(outcome.unadjusted_fp, dec!(10.0000));
        assert_eq!(outcome.breakdown[0].weight, dec!(7));
        assert_eq!(outcome.breakdown[1].weight, dec!(3));
    }

    #[test]
    fn order_does_not_change_the_total() {
        let mut fps = vec![
            FunctionPoint::new(FunctionPointType::Ilf, 55).with_ret(3),
            FunctionPoint::new(FunctionPointType::Eo, 6).with_ftr(2),
            FunctionPoint::new(FunctionPointType::Eq, 4).with_ftr(1),
        ];
        let forward = aggregate(&fps, WeightTable::standard()).unwrap();
        fps.reverse();
        let backward = aggregate(&fps, WeightTable::standard()).unwrap();
        assert_eq!(forward.unadjusted_fp, backward.unadjusted_fp);
    }

    #[test]
    fn incomplete_override_table_propagates_missing_weight() {
        let table = WeightTable::from_entries([(
            (FunctionPointType::Ilf, ComplexityLevel::Low),
            dec!(7),
        )]);
        let fps = vec![FunctionPoint::new(FunctionPointType::Ei, 3).with_ftr(1)];
        let err = aggregate(&fps, &table).unwrap_err();
        assert!(matches!(err, Error::MissingWeight { .. }));
    }
}
