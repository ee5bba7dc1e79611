//! CSV ingestion tests

use incometax::taxes::models::AllowanceType;
use incometax::taxes::services::{parse_calculation_requests, CsvParseError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_parses_rows_in_file_order() {
    let input = b"totalIncome,wht,donation\n500000.0,0.0,0.0\n600000.0,40000.0,20000.0\n750000.0,50000.0,15000.0\n";

    let requests = parse_calculation_requests(input).unwrap();

    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].total_income, dec!(500000));
    assert_eq!(requests[1].withholding_tax, dec!(40000));
    assert_eq!(requests[2].allowances.len(), 1);
    assert_eq!(requests[2].allowances[0].allowance_type, AllowanceType::Donation);
    assert_eq!(requests[2].allowances[0].amount, dec!(15000));
}

#[test]
fn test_absent_columns_default_to_zero() {
    let requests = parse_calculation_requests(b"totalIncome\n300000\n").unwrap();

    assert_eq!(requests[0].withholding_tax, Decimal::ZERO);
    assert!(requests[0].allowances.is_empty());
}

#[test]
fn test_empty_file_is_rejected() {
    let err = parse_calculation_requests(b"").unwrap_err();

    assert!(matches!(err, CsvParseError::Empty));
    assert_eq!(err.to_string(), "empty csv file");
}

#[test]
fn test_duplicate_column_is_rejected() {
    let err = parse_calculation_requests(b"wht,wht\n1,2\n").unwrap_err();

    assert!(matches!(err, CsvParseError::DuplicateColumn(_)));
}

#[test]
fn test_invalid_amount_reports_row_and_column() {
    let err = parse_calculation_requests(b"totalIncome,wht\n500000,0\nabc,0\n").unwrap_err();

    match err {
        CsvParseError::InvalidValue { column, row, value } => {
            assert_eq!(column, "totalIncome");
            assert_eq!(row, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_negative_amount_is_rejected() {
    let err = parse_calculation_requests(b"totalIncome,wht\n500000,-1\n").unwrap_err();

    assert!(matches!(err, CsvParseError::NegativeValue { column: "wht", row: 1 }));
}

#[test]
fn test_amount_above_ceiling_is_rejected() {
    let err = parse_calculation_requests(b"totalIncome,donation\n500000,100000000000000000000.01\n").unwrap_err();

    assert!(matches!(err, CsvParseError::ValueTooLarge { column: "donation", row: 1 }));
}

#[test]
fn test_ragged_row_is_rejected() {
    let err = parse_calculation_requests(b"totalIncome,wht\n500000\n").unwrap_err();

    assert!(matches!(err, CsvParseError::Csv(_)));
}
