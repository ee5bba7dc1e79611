//! End-to-end calculator tests against an in-memory configuration store

use std::sync::Arc;

use incometax::taxes::models::{Allowance, AllowanceType, CalculationRequest, DeductionKind};
use incometax::taxes::{InMemoryDeductionStore, TaxCalculator};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn calculator(store: &InMemoryDeductionStore) -> TaxCalculator {
    TaxCalculator::new(Arc::new(store.clone()))
}

#[tokio::test]
async fn test_income_only() {
    let store = InMemoryDeductionStore::with_defaults();

    let result = calculator(&store)
        .calculate(&CalculationRequest::new(dec!(500000)))
        .await;

    assert_eq!(result.tax, dec!(29000));
    assert_eq!(result.tax_refund, Decimal::ZERO);
    assert_eq!(result.tax_levels[1].tax, dec!(29000));
}

#[tokio::test]
async fn test_withholding_reduces_tax_due() {
    let store = InMemoryDeductionStore::with_defaults();
    let request = CalculationRequest::new(dec!(500000)).with_withholding_tax(dec!(25000));

    let result = calculator(&store).calculate(&request).await;

    assert_eq!(result.tax, dec!(4000));
    assert_eq!(result.tax_refund, Decimal::ZERO);
}

#[tokio::test]
async fn test_donation_is_capped() {
    let store = InMemoryDeductionStore::with_defaults();
    let request = CalculationRequest::new(dec!(500000)).with_allowance(Allowance::donation(dec!(200000)));

    let result = calculator(&store).calculate(&request).await;

    assert_eq!(result.tax, dec!(19000));
}

#[tokio::test]
async fn test_over_withholding_is_refunded() {
    let store = InMemoryDeductionStore::with_defaults();
    let request = CalculationRequest::new(dec!(500000))
        .with_withholding_tax(dec!(30000))
        .with_allowance(Allowance::donation(dec!(90000)));

    let result = calculator(&store).calculate(&request).await;

    assert_eq!(result.tax, Decimal::ZERO);
    assert_eq!(result.tax_refund, dec!(10000));
}

#[tokio::test]
async fn test_kreceipt_uses_configured_ceiling() {
    let store = InMemoryDeductionStore::with_defaults();
    store.set(DeductionKind::KReceipt.config_name(), dec!(20000)).await;
    let request = CalculationRequest::new(dec!(500000)).with_allowance(Allowance::k_receipt(dec!(50000)));

    let result = calculator(&store).calculate(&request).await;

    // 500000 - 60000 - 20000 = 420000
    assert_eq!(result.tax, dec!(27000));
}

#[tokio::test]
async fn test_unknown_allowance_is_ignored() {
    let store = InMemoryDeductionStore::with_defaults();
    let request = CalculationRequest::new(dec!(500000))
        .with_allowance(Allowance::new(AllowanceType::Unknown, dec!(100000)));

    let result = calculator(&store).calculate(&request).await;

    assert_eq!(result.tax, dec!(29000));
}

#[tokio::test]
async fn test_missing_configuration_falls_back_to_defaults() {
    let store = InMemoryDeductionStore::new();

    let result = calculator(&store)
        .calculate(&CalculationRequest::new(dec!(500000)))
        .await;

    assert_eq!(result.tax, dec!(29000));
}

#[tokio::test]
async fn test_personal_deduction_change_is_visible_to_next_calculation() {
    let store = InMemoryDeductionStore::with_defaults();
    let calculator = calculator(&store);
    let request = CalculationRequest::new(dec!(500000));

    assert_eq!(calculator.calculate(&request).await.tax, dec!(29000));

    store.set(DeductionKind::Personal.config_name(), dec!(100000)).await;

    // 500000 - 100000 = 400000
    assert_eq!(calculator.calculate(&request).await.tax, dec!(25000));
}

#[tokio::test]
async fn test_batch_matches_individual_calculations() {
    let store = InMemoryDeductionStore::with_defaults();
    let calculator = calculator(&store);
    let requests = vec![
        CalculationRequest::new(dec!(500000)),
        CalculationRequest::new(dec!(600000))
            .with_withholding_tax(dec!(40000))
            .with_allowance(Allowance::donation(dec!(20000))),
        CalculationRequest::new(dec!(750000))
            .with_withholding_tax(dec!(50000))
            .with_allowance(Allowance::donation(dec!(15000))),
    ];

    let batch = calculator.batch_calculate(&requests).await;

    assert_eq!(batch.taxes.len(), requests.len());
    for (item, request) in batch.taxes.iter().zip(&requests) {
        let single = calculator.calculate(request).await;
        assert_eq!(item.total_income, request.total_income);
        assert_eq!(item.tax, single.tax);
        assert_eq!(item.tax_refund, single.tax_refund);
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let store = InMemoryDeductionStore::with_defaults();

    let batch = calculator(&store).batch_calculate(&[]).await;

    assert!(batch.taxes.is_empty());
}
