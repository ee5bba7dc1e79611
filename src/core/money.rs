use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serializer;

/// Number of decimal places every amount is rendered with
pub const DISPLAY_SCALE: u32 = 2;

/// Largest input amount (10^20) accepted from callers. Every amount derived
/// from inputs at or below it still fits `Decimal` at two decimal places.
pub const MAX_AMOUNT: Decimal = dec!(100000000000000000000);

/// Rounds an amount to two decimal places, half away from zero, and pins the
/// scale so `29000` renders as `29000.00`.
pub fn to_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Serializes an amount as a JSON number with exactly two decimals.
///
/// Use with `#[serde(serialize_with = "crate::core::money::serialize")]`.
pub fn serialize<S>(amount: &Decimal, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::arbitrary_precision::serialize(&to_display(*amount), serializer)
}
