use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::modules::taxes::models::{Allowance, AllowanceType};

/// Fixed per-entry ceiling for donations
pub const DONATION_CAP: Decimal = dec!(100000);

/// Subtracts each allowance from `income`, capped per entry.
///
/// Every entry is capped on its own, so two donations of 100000 reduce income
/// by 200000. Unknown allowance types are skipped. Subtraction saturates at
/// `Decimal::MIN`.
pub fn reduce_allowances(income: Decimal, allowances: &[Allowance], kreceipt_cap: Decimal) -> Decimal {
    allowances.iter().fold(income, |remaining, allowance| {
        let cap = match allowance.allowance_type {
            AllowanceType::Donation => DONATION_CAP,
            AllowanceType::KReceipt => kreceipt_cap,
            AllowanceType::Unknown => return remaining,
        };

        remaining.saturating_sub(allowance.amount.min(cap))
    })
}
