//! Property tests for the progressive bracket engine

use incometax::taxes::models::TAX_BRACKETS;
use incometax::taxes::services::apply_brackets;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_worked_example_across_every_bracket() {
    let outcome = apply_brackets(dec!(2500000));

    let levels: Vec<Decimal> = outcome.tax_levels.iter().map(|level| level.tax).collect();
    assert_eq!(
        levels,
        vec![dec!(0), dec!(235000), dec!(300000), dec!(300000), dec!(175000)]
    );
    assert_eq!(outcome.total_tax, dec!(1010000));
}

#[test]
fn test_levels_follow_bracket_order() {
    let outcome = apply_brackets(dec!(440000));

    let labels: Vec<&str> = outcome.tax_levels.iter().map(|level| level.level).collect();
    let expected: Vec<&str> = TAX_BRACKETS.iter().map(|bracket| bracket.label).collect();
    assert_eq!(labels, expected);
    assert_eq!(labels[4], "2,000,001 ขึ้นไป");
}

proptest! {
    #[test]
    fn test_no_tax_at_or_below_exempt_threshold(income in 0u64..=150_000u64) {
        let outcome = apply_brackets(Decimal::from(income));

        prop_assert_eq!(outcome.total_tax, Decimal::ZERO);
        prop_assert!(outcome.tax_levels.iter().all(|level| level.tax.is_zero()));
    }

    #[test]
    fn test_total_is_sum_of_levels(income in 0u64..10_000_000u64, cents in 0u32..100u32) {
        let reduced = Decimal::from(income) + Decimal::new(cents as i64, 2);
        let outcome = apply_brackets(reduced);

        let sum: Decimal = outcome.tax_levels.iter().map(|level| level.tax).sum();
        prop_assert_eq!(outcome.total_tax, sum);
        prop_assert_eq!(outcome.tax_levels.len(), TAX_BRACKETS.len());
    }

    #[test]
    fn test_tax_is_monotonic_in_income(low in 0u64..5_000_000u64, delta in 0u64..5_000_000u64) {
        let lower = apply_brackets(Decimal::from(low));
        let higher = apply_brackets(Decimal::from(low + delta));

        prop_assert!(
            higher.total_tax >= lower.total_tax,
            "tax fell from {} to {} as income rose",
            lower.total_tax,
            higher.total_tax
        );
    }

    #[test]
    fn test_tax_never_negative(income in -1_000_000i64..10_000_000i64) {
        let outcome = apply_brackets(Decimal::from(income));

        prop_assert!(outcome.total_tax >= Decimal::ZERO);
    }
}
