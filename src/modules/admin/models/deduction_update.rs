use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Body of both admin update endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateDeductionRequest {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalDeductionResponse {
    #[serde(rename = "personalDeduction", serialize_with = "money::serialize")]
    pub personal_deduction: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KReceiptDeductionResponse {
    #[serde(rename = "kReceipt", serialize_with = "money::serialize")]
    pub k_receipt: Decimal,
}
