use std::sync::Arc;

use tracing::{debug, info};

use super::allowance_reducer::reduce_allowances;
use super::bracket_engine::apply_brackets;
use super::deduction_resolver::DeductionResolver;
use super::withholding::net_withholding;
use crate::modules::taxes::models::{
    BatchCalculationResult, BatchItem, CalculationRequest, CalculationResult, DeductionCeilings,
};
use crate::modules::taxes::repositories::DeductionConfigRepository;

/// Composes deduction resolution, allowance reduction, bracket application
/// and withholding netting.
///
/// Neither entry point fails; store errors are absorbed by the resolver.
#[derive(Clone)]
pub struct TaxCalculator {
    resolver: DeductionResolver,
}

impl TaxCalculator {
    pub fn new(repository: Arc<dyn DeductionConfigRepository>) -> Self {
        Self {
            resolver: DeductionResolver::new(repository),
        }
    }

    /// Calculate tax for one request using a fresh configuration snapshot
    pub async fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        let ceilings = self.resolver.snapshot().await;
        Self::calculate_with(&ceilings, request)
    }

    /// Calculate tax for every request against a single configuration
    /// snapshot. Results keep input order.
    pub async fn batch_calculate(&self, requests: &[CalculationRequest]) -> BatchCalculationResult {
        let ceilings = self.resolver.snapshot().await;

        info!(
            count = requests.len(),
            personal_deduction = %ceilings.personal,
            kreceipt_deduction = %ceilings.kreceipt,
            "Calculating tax batch"
        );

        let taxes = requests
            .iter()
            .map(|request| {
                let result = Self::calculate_with(&ceilings, request);
                BatchItem {
                    total_income: request.total_income,
                    tax: result.tax,
                    tax_refund: result.tax_refund,
                }
            })
            .collect();

        BatchCalculationResult { taxes }
    }

    /// The pure pipeline shared by single and batch calculation
    pub fn calculate_with(ceilings: &DeductionCeilings, request: &CalculationRequest) -> CalculationResult {
        let income = request.total_income.saturating_sub(ceilings.personal);
        let reduced_income = reduce_allowances(income, &request.allowances, ceilings.kreceipt);
        let outcome = apply_brackets(reduced_income);
        let settlement = net_withholding(outcome.total_tax, request.withholding_tax);

        debug!(
            total_income = %request.total_income,
            reduced_income = %reduced_income,
            total_tax = %outcome.total_tax,
            tax = %settlement.tax,
            refund = %settlement.refund,
            "Calculated tax"
        );

        CalculationResult {
            tax: settlement.tax,
            tax_refund: settlement.refund,
            tax_levels: outcome.tax_levels,
        }
    }
}
