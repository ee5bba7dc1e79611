pub mod allowance_reducer;
pub mod bracket_engine;
pub mod csv_parser;
pub mod deduction_resolver;
pub mod tax_calculator;
pub mod withholding;

pub use allowance_reducer::{reduce_allowances, DONATION_CAP};
pub use bracket_engine::{apply_brackets, BracketOutcome};
pub use csv_parser::{parse_calculation_requests, CsvParseError};
pub use deduction_resolver::DeductionResolver;
pub use tax_calculator::TaxCalculator;
pub use withholding::{net_withholding, Settlement};
