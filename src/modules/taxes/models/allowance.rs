use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of deduction claimed against taxable income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowanceType {
    /// Charitable donation, capped at a fixed ceiling
    #[serde(rename = "donation")]
    Donation,
    /// Incentive (k-receipt) purchases, capped at a configurable ceiling
    #[serde(rename = "k-receipt")]
    KReceipt,
    /// Anything else on the wire; accepted and ignored by the reducer
    #[serde(other)]
    Unknown,
}

/// A single allowance entry in a calculation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowance {
    pub allowance_type: AllowanceType,
    pub amount: Decimal,
}

impl Allowance {
    pub fn new(allowance_type: AllowanceType, amount: Decimal) -> Self {
        Self {
            allowance_type,
            amount,
        }
    }

    pub fn donation(amount: Decimal) -> Self {
        Self::new(AllowanceType::Donation, amount)
    }

    pub fn k_receipt(amount: Decimal) -> Self {
        Self::new(AllowanceType::KReceipt, amount)
    }
}
