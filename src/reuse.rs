//! Reuse adjustment: converts AFP into final function points

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::core::errors::Error;
use crate::core::rounding::round_size;
use crate::vaf::{GscFactor, GscScore};

/// Degree to which the project can reuse existing systems or components.
///
/// Each level carries an exact rational coefficient applied to AFP:
/// High 1/3, Medium 2/3, Low and None 1. The coefficient is kept as a
/// numerator/denominator pair so `High` stays exactly AFP/3 up to the
/// single rounding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReuseLevel {
    /// Most functionality (>70%) reuses existing systems
    High,
    /// Part of the functionality (30-70%) can be reused
    Medium,
    /// Little reuse (<30%); mostly new development
    Low,
    /// Entirely new development
    #[default]
    None,
}

impl ReuseLevel {
    pub const ALL: [ReuseLevel; 4] = [
        ReuseLevel::High,
        ReuseLevel::Medium,
        ReuseLevel::Low,
        ReuseLevel::None,
    ];

    /// Exact coefficient as (numerator, denominator)
    pub const fn coefficient(self) -> (Decimal, Decimal) {
        match self {
            ReuseLevel::High => (Decimal::ONE, dec!(3)),
            ReuseLevel::Medium => (Decimal::TWO, dec!(3)),
            ReuseLevel::Low | ReuseLevel::None => (Decimal::ONE, Decimal::ONE),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ReuseLevel::High => "HIGH",
            ReuseLevel::Medium => "MEDIUM",
            ReuseLevel::Low => "LOW",
            ReuseLevel::None => "NONE",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ReuseLevel::High => "most functionality reuses existing systems or components",
            ReuseLevel::Medium => "part of the functionality is reused with moderate integration",
            ReuseLevel::Low => "little reuse; mainly new development",
            ReuseLevel::None => "entirely new development with no reusable components",
        }
    }
}

impl std::fmt::Display for ReuseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReuseLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "NONE" => Ok(ReuseLevel::None),
            "HIGH" => Ok(ReuseLevel::High),
            "MEDIUM" => Ok(ReuseLevel::Medium),
            "LOW" => Ok(ReuseLevel::Low),
            other => Err(Error::UnsupportedReuseLevel(other.to_string())),
        }
    }
}

/// `FFP = round(AFP × coefficient, 4, half-up)`
pub fn apply_reuse(adjusted_fp: Decimal, level: ReuseLevel) -> Decimal {
    let (numerator, denominator) = level.coefficient();
    round_size(adjusted_fp * numerator / denominator)
}

/// Suggest a reuse level from the TF10 (reusability) GSC score:
/// 4-5 → High, 2-3 → Medium, otherwise Low.
pub fn recommend_reuse_level(scores: &[GscScore]) -> ReuseLevel {
    scores
        .iter()
        .find(|entry| entry.factor == GscFactor::Reusability)
        .map(|entry| match entry.score {
            4.. => ReuseLevel::High,
            2..=3 => ReuseLevel::Medium,
            _ => ReuseLevel::Low,
        })
        .unwrap_or(ReuseLevel::Low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaf::uniform_scores;
    use rust_decimal_macros::dec;

    #[test]
    fn none_and_low_are_identity() {
        assert_eq!(apply_reuse(dec!(10.7000), ReuseLevel::None), dec!(10.7000));
        assert_eq!(apply_reuse(dec!(10.7000), ReuseLevel::Low), dec!(10.7000));
    }

    #[test]
    fn high_reuse_is_one_third_within_rounding() {
        assert_eq!(apply_reuse(dec!(30), ReuseLevel::High), dec!(10.0000));
        // 10.7 / 3 = 3.56666... -> 3.5667
        assert_eq!(apply_reuse(dec!(10.7000), ReuseLevel::High), dec!(3.5667));
    }

    #[test]
    fn medium_reuse_is_two_thirds() {
        assert_eq!(apply_reuse(dec!(30), ReuseLevel::Medium), dec!(20.0000));
        // 10.7 * 2/3 = 7.13333... -> 7.1333
        assert_eq!(apply_reuse(dec!(10.7000), ReuseLevel::Medium), dec!(7.1333));
    }

    #[test]
    fn default_level_is_none() {
        assert_eq!(ReuseLevel::default(), ReuseLevel::None);
    }

    #[test]
    fn levels_parse_case_insensitively_and_empty_means_none() {
        assert_eq!("high".parse::<ReuseLevel>().unwrap(), ReuseLevel::High);
        assert_eq!(" MEDIUM ".parse::<ReuseLevel>().unwrap(), ReuseLevel::Medium);
        assert_eq!("".parse::<ReuseLevel>().unwrap(), ReuseLevel::None);
        assert!(matches!(
            "TOTAL".parse::<ReuseLevel>(),
            Err(Error::UnsupportedReuseLevel(level)) if level == "TOTAL"
        ));
    }

    #[test]
    fn recommendation_follows_the_reusability_score() {
        let mut scores = uniform_scores(0);
        assert_eq!(recommend_reuse_level(&scores), ReuseLevel::Low);

        scores[9].score = 2;
        assert_eq!(recommend_reuse_level(&scores), ReuseLevel::Medium);

        scores[9].score = 4;
        assert_eq!(recommend_reuse_level(&scores), ReuseLevel::High);

        assert_eq!(recommend_reuse_level(&[]), ReuseLevel::Low);
    }
}
