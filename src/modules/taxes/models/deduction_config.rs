use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fallback personal deduction when the store cannot be read
pub const DEFAULT_PERSONAL_DEDUCTION: Decimal = dec!(60000);

/// Fallback k-receipt ceiling when the store cannot be read
pub const DEFAULT_KRECEIPT_DEDUCTION: Decimal = dec!(50000);

/// Highest value an administrator may store for either ceiling
pub const MAX_CONFIGURABLE_DEDUCTION: Decimal = dec!(100000);

/// A named deduction ceiling as persisted in `deduction_configs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DeductionConfig {
    pub name: String,
    pub value: Decimal,
}

impl DeductionConfig {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The two ceilings an administrator can configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeductionKind {
    Personal,
    KReceipt,
}

impl DeductionKind {
    pub const ALL: [DeductionKind; 2] = [DeductionKind::Personal, DeductionKind::KReceipt];

    /// Row name in the configuration store
    pub fn config_name(&self) -> &'static str {
        match self {
            DeductionKind::Personal => "personal_deduction",
            DeductionKind::KReceipt => "kreceipt_deduction",
        }
    }

    pub fn default_value(&self) -> Decimal {
        match self {
            DeductionKind::Personal => DEFAULT_PERSONAL_DEDUCTION,
            DeductionKind::KReceipt => DEFAULT_KRECEIPT_DEDUCTION,
        }
    }
}

impl std::fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config_name())
    }
}

/// Ceilings resolved once and shared by every calculation that uses them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionCeilings {
    pub personal: Decimal,
    pub kreceipt: Decimal,
}

impl Default for DeductionCeilings {
    fn default() -> Self {
        Self {
            personal: DEFAULT_PERSONAL_DEDUCTION,
            kreceipt: DEFAULT_KRECEIPT_DEDUCTION,
        }
    }
}
