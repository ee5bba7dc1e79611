//! Parses uploaded CSV files into calculation requests.
//!
//! The header row may contain `totalIncome`, `wht` and `donation` in any
//! order. Any other column name rejects the whole file, as does an empty file
//! or a cell that is not a decimal in `0..=money::MAX_AMOUNT`. A column that
//! is absent leaves its field at zero (or, for `donation`, adds no allowance).
//!
//! ```csv
//! totalIncome,wht,donation
//! 500000.0,0.0,0.0
//! 600000.0,40000.0,20000.0
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::{money, AppError};
use crate::modules::taxes::models::{Allowance, CalculationRequest};

/// Errors that abort CSV ingestion before any calculation runs
#[derive(Debug, thiserror::Error)]
pub enum CsvParseError {
    #[error("empty csv file")]
    Empty,

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// `row` is 1-based, the header being row 0
    #[error("failed to parse {column} on row {row}: '{value}' is not a valid amount")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("{column} on row {row} must not be negative")]
    NegativeValue { column: &'static str, row: usize },

    #[error("{column} on row {row} exceeds the largest accepted amount")]
    ValueTooLarge { column: &'static str, row: usize },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CsvParseError> for AppError {
    fn from(err: CsvParseError) -> Self {
        AppError::validation(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    TotalIncome,
    Wht,
    Donation,
}

impl Column {
    fn parse(header: &str) -> Option<Self> {
        match header {
            "totalIncome" => Some(Column::TotalIncome),
            "wht" => Some(Column::Wht),
            "donation" => Some(Column::Donation),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Column::TotalIncome => "totalIncome",
            Column::Wht => "wht",
            Column::Donation => "donation",
        }
    }
}

/// Parse the full contents of an uploaded file. Rows are returned in file
/// order; any error discards everything parsed so far.
pub fn parse_calculation_requests(input: &[u8]) -> Result<Vec<CalculationRequest>, CsvParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input);

    let columns = parse_header(reader.headers()?)?;

    reader
        .records()
        .enumerate()
        .map(|(idx, record)| parse_row(&columns, &record?, idx + 1))
        .collect()
}

fn parse_header(headers: &csv::StringRecord) -> Result<Vec<Column>, CsvParseError> {
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(CsvParseError::Empty);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for header in headers.iter() {
        let column =
            Column::parse(header).ok_or_else(|| CsvParseError::UnknownColumn(header.to_string()))?;
        if columns.contains(&column) {
            return Err(CsvParseError::DuplicateColumn(header.to_string()));
        }
        columns.push(column);
    }

    Ok(columns)
}

fn parse_row(
    columns: &[Column],
    record: &csv::StringRecord,
    row: usize,
) -> Result<CalculationRequest, CsvParseError> {
    let mut request = CalculationRequest::new(Decimal::ZERO);

    for (column, value) in columns.iter().zip(record.iter()) {
        let amount = parse_amount(*column, value, row)?;
        match column {
            Column::TotalIncome => request.total_income = amount,
            Column::Wht => request.withholding_tax = amount,
            Column::Donation => request.allowances.push(Allowance::donation(amount)),
        }
    }

    Ok(request)
}

fn parse_amount(column: Column, value: &str, row: usize) -> Result<Decimal, CsvParseError> {
    let amount = Decimal::from_str(value).map_err(|_| CsvParseError::InvalidValue {
        column: column.name(),
        row,
        value: value.to_string(),
    })?;

    if amount < Decimal::ZERO {
        return Err(CsvParseError::NegativeValue {
            column: column.name(),
            row,
        });
    }

    if amount > money::MAX_AMOUNT {
        return Err(CsvParseError::ValueTooLarge {
            column: column.name(),
            row,
        });
    }

    Ok(amount)
}
