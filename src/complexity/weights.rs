//! Unadjusted point values per (function point type, complexity tier)

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::errors::{Error, Result};
use crate::core::types::{ComplexityLevel, FunctionPointType};

/// Standard NESMA weight table:
///
/// | Type | LOW | MEDIUM | HIGH |
/// |------|-----|--------|------|
/// | ILF  | 7   | 10     | 15   |
/// | EIF  | 5   | 7      | 10   |
/// | EI   | 3   | 4      | 6    |
/// | EO   | 4   | 5      | 7    |
/// | EQ   | 3   | 4      | 6    |
static STANDARD: Lazy<WeightTable> = Lazy::new(|| {
    let entries = [
        (FunctionPointType::Ilf, dec!(7), dec!(10), dec!(15)),
        (FunctionPointType::Eif, dec!(5), dec!(7), dec!(10)),
        (FunctionPointType::Ei, dec!(3), dec!(4), dec!(6)),
        (FunctionPointType::Eo, dec!(4), dec!(5), dec!(7)),
        (FunctionPointType::Eq, dec!(3), dec!(4), dec!(6)),
    ];

    let mut weights = HashMap::new();
    for (fp_type, low, medium, high) in entries {
        weights.insert((fp_type, ComplexityLevel::Low), low);
        weights.insert((fp_type, ComplexityLevel::Medium), medium);
        weights.insert((fp_type, ComplexityLevel::High), high);
    }
    WeightTable { weights }
});

/// Lookup table from (type, tier) to unadjusted point value.
///
/// The standard table is total over the closed domain. A review center
/// can substitute its own table through configuration; a custom table
/// with a missing entry surfaces as [`Error::MissingWeight`] at lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: HashMap<(FunctionPointType, ComplexityLevel), Decimal>,
}

impl WeightTable {
    /// The standard NESMA table
    pub fn standard() -> &'static WeightTable {
        &STANDARD
    }

    /// Build a table from explicit entries
    pub fn from_entries(
        entries: impl IntoIterator<Item = ((FunctionPointType, ComplexityLevel), Decimal)>,
    ) -> Self {
        Self {
            weights: entries.into_iter().collect(),
        }
    }

    /// Point value for a classified function point
    pub fn weight(&self, fp_type: FunctionPointType, level: ComplexityLevel) -> Result<Decimal> {
        self.weights
            .get(&(fp_type, level))
            .copied()
            .ok_or(Error::MissingWeight { fp_type, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_the_nesma_values() {
        let table = WeightTable::standard();
        let expected = [
            (FunctionPointType::Ilf, 7, 10, 15),
            (FunctionPointType::Eif, 5, 7, 10),
            (FunctionPointType::Ei, 3, 4, 6),
            (FunctionPointType::Eo, 4, 5, 7),
            (FunctionPointType::Eq, 3, 4, 6),
        ];
        for (fp_type, low, medium, high) in expected {
            assert_eq!(
                table.weight(fp_type, ComplexityLevel::Low).unwrap(),
                Decimal::from(low)
            );
            assert_eq!(
                table.weight(fp_type, ComplexityLevel::Medium).unwrap(),
                Decimal::from(medium)
            );
            assert_eq!(
                table.weight(fp_type, ComplexityLevel::High).unwrap(),
                Decimal::from(high)
            );
        }
    }

    #[test]
    fn weights_are_monotone_in_complexity_for_every_type() {
        let table = WeightTable::standard();
        for fp_type in FunctionPointType::ALL {
            let low = table.weight(fp_type, ComplexityLevel::Low).unwrap();
            let medium = table.weight(fp_type, ComplexityLevel::Medium).unwrap();
            let high = table.weight(fp_type, ComplexityLevel::High).unwrap();
            assert!(low <= medium, "{fp_type}: low > medium");
            assert!(medium <= high, "{fp_type}: medium > high");
        }
    }

    #[test]
    fn custom_table_reports_missing_entries() {
        let table = WeightTable::from_entries([(
            (FunctionPointType::Ilf, ComplexityLevel::Low),
            dec!(7),
        )]);
        assert!(table
            .weight(FunctionPointType::Ilf, ComplexityLevel::Low)
            .is_ok());
        let err = table
            .weight(FunctionPointType::Eo, ComplexityLevel::High)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingWeight {
                fp_type: FunctionPointType::Eo,
                level: ComplexityLevel::High,
            }
        ));
        assert!(!err.is_validation());
    }
}
