mod allowance;
mod calculation;
mod deduction_config;
mod tax_bracket;

pub use allowance::{Allowance, AllowanceType};
pub use calculation::{
    BatchCalculationResult, BatchItem, CalculationRequest, CalculationResult, TaxLevel,
};
pub use deduction_config::{
    DeductionCeilings, DeductionConfig, DeductionKind, DEFAULT_KRECEIPT_DEDUCTION,
    DEFAULT_PERSONAL_DEDUCTION, MAX_CONFIGURABLE_DEDUCTION,
};
pub use tax_bracket::{TaxBracket, TAX_BRACKETS};
