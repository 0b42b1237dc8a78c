//! Rounding policy shared by the whole pipeline.
//!
//! Every quantity in the engine is a [`rust_decimal::Decimal`] rounded
//! half-up at defined points: size and effort figures carry 4 fractional
//! digits, currency carries 2. Keeping the policy in one place guarantees
//! reproducible results independent of platform or evaluation order.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits for size and effort quantities (UFP, VAF, AFP, FFP,
/// person-months)
pub const SIZE_SCALE: u32 = 4;

/// Fractional digits for currency amounts
pub const MONEY_SCALE: u32 = 2;

/// Round a size/effort quantity to 4 fractional digits, half-up
pub fn round_size(value: Decimal) -> Decimal {
    rescaled(value, SIZE_SCALE)
}

/// Round a currency amount to 2 fractional digits, half-up
pub fn round_money(value: Decimal) -> Decimal {
    rescaled(value, MONEY_SCALE)
}

fn rescaled(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so 10.7 renders as 10.7000 in reports and serialized output
    rounded.rescale(scale);
    rounded
}
