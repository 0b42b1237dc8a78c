//! Conversion of final function points into effort and cost

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::core::rounding::{round_money, round_size};

/// Government standard productivity: function points per person-month
pub const STANDARD_PRODUCTIVITY: Decimal = dec!(7.01);

/// Government standard rate: currency units per person-month
pub const STANDARD_MONTHLY_RATE: Decimal = dec!(18000);

/// Productivity and rate card used for the conversion.
///
/// Defaults to the government standard; a review center with a different
/// rate card supplies its own through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortRates {
    /// Function points delivered per person-month
    pub productivity: Decimal,
    /// Cost per person-month
    pub monthly_rate: Decimal,
}

impl Default for EffortRates {
    fn default() -> Self {
        Self {
            productivity: STANDARD_PRODUCTIVITY,
            monthly_rate: STANDARD_MONTHLY_RATE,
        }
    }
}

impl EffortRates {
    pub fn validate(&self) -> Result<()> {
        if self.productivity <= Decimal::ZERO {
            return Err(Error::Config(format!(
                "productivity must be positive, got {}",
                self.productivity
            )));
        }
        if self.monthly_rate < Decimal::ZERO {
            return Err(Error::Config(format!(
                "monthly rate must not be negative, got {}",
                self.monthly_rate
            )));
        }
        Ok(())
    }
}

/// Person-months at 4 fractional digits, cost at currency precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffortCost {
    pub person_months: Decimal,
    pub cost: Decimal,
}

/// `person_months = round(FFP / productivity, 4, half-up)`,
/// `cost = round(person_months × rate, 2, half-up)`.
///
/// The division is performed directly; person-months keep the 4-digit
/// size precision while cost is reported at 2-digit currency precision.
pub fn convert(final_fp: Decimal, rates: &EffortRates) -> EffortCost {
    let person_months = round_size(final_fp / rates.productivity);
    let cost = round_money(person_months * rates.monthly_rate);
    EffortCost { person_months, cost }
}
