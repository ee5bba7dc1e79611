use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allowance::Allowance;
use crate::core::{money, AppError, Result};

/// Input to a single tax calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "totalIncome")]
    pub total_income: Decimal,

    #[serde(rename = "wht", default)]
    pub withholding_tax: Decimal,

    #[serde(default)]
    pub allowances: Vec<Allowance>,
}

impl CalculationRequest {
    pub fn new(total_income: Decimal) -> Self {
        Self {
            total_income,
            withholding_tax: Decimal::ZERO,
            allowances: Vec::new(),
        }
    }

    pub fn with_withholding_tax(mut self, withholding_tax: Decimal) -> Self {
        self.withholding_tax = withholding_tax;
        self
    }

    pub fn with_allowance(mut self, allowance: Allowance) -> Self {
        self.allowances.push(allowance);
        self
    }

    /// Rejects negative amounts, and amounts above `money::MAX_AMOUNT`,
    /// before the request reaches the calculator
    pub fn validate(&self) -> Result<()> {
        check_amount("totalIncome", self.total_income)?;
        check_amount("wht", self.withholding_tax)?;

        for (index, allowance) in self.allowances.iter().enumerate() {
            check_amount(&format!("allowances[{}].amount", index), allowance.amount)?;
        }

        Ok(())
    }
}

fn check_amount(field: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!("{} must not be negative", field)));
    }

    if amount > money::MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} must not exceed {}",
            field,
            money::MAX_AMOUNT
        )));
    }

    Ok(())
}

/// Tax attributed to one bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxLevel {
    pub level: &'static str,
    #[serde(serialize_with = "money::serialize")]
    pub tax: Decimal,
}

/// Outcome of a single calculation with its per-bracket breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    #[serde(serialize_with = "money::serialize")]
    pub tax: Decimal,

    #[serde(rename = "taxRefund", serialize_with = "money::serialize")]
    pub tax_refund: Decimal,

    #[serde(rename = "taxLevel")]
    pub tax_levels: Vec<TaxLevel>,
}

/// One row of a batch calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItem {
    #[serde(rename = "totalIncome", serialize_with = "money::serialize")]
    pub total_income: Decimal,

    #[serde(serialize_with = "money::serialize")]
    pub tax: Decimal,

    #[serde(rename = "taxRefund", serialize_with = "money::serialize")]
    pub tax_refund: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchCalculationResult {
    pub taxes: Vec<BatchItem>,
}
