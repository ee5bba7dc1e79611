use rust_decimal::Decimal;

use crate::modules::taxes::models::{TaxBracket, TaxLevel, TAX_BRACKETS};

/// Total tax plus the amount attributed to each bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketOutcome {
    pub total_tax: Decimal,
    pub tax_levels: Vec<TaxLevel>,
}

/// Applies the marginal-rate schedule to post-deduction income.
///
/// Each taxable bracket is evaluated on its own: when `reduced_income`
/// exceeds the bracket's lower bound, `(reduced_income - lower_bound) * rate`
/// is charged to that bracket. Upper bounds are not consulted. Every bracket
/// is reported, in ascending order, with zero when nothing applies.
pub fn apply_brackets(reduced_income: Decimal) -> BracketOutcome {
    let tax_levels: Vec<TaxLevel> = TAX_BRACKETS
        .iter()
        .map(|bracket| TaxLevel {
            level: bracket.label,
            tax: bracket_tax(bracket, reduced_income),
        })
        .collect();

    let total_tax = tax_levels.iter().map(|level| level.tax).sum();

    BracketOutcome {
        total_tax,
        tax_levels,
    }
}

fn bracket_tax(bracket: &TaxBracket, reduced_income: Decimal) -> Decimal {
    if !bracket.is_taxable() || reduced_income <= bracket.lower_bound {
        return Decimal::ZERO;
    }

    (reduced_income - bracket.lower_bound) * bracket.rate
}
