use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A contiguous income range taxed at one marginal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub label: &'static str,
    pub lower_bound: Decimal,
    /// `None` for the open-ended top bracket
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn is_taxable(&self) -> bool {
        self.rate > Decimal::ZERO
    }
}

/// Progressive income tax schedule, ascending by lower bound
pub const TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        label: "0-150,000",
        lower_bound: dec!(0),
        upper_bound: Some(dec!(150000)),
        rate: dec!(0),
    },
    TaxBracket {
        label: "150,001-500,000",
        lower_bound: dec!(150000),
        upper_bound: Some(dec!(500000)),
        rate: dec!(0.10),
    },
    TaxBracket {
        label: "500,001-1,000,000",
        lower_bound: dec!(500000),
        upper_bound: Some(dec!(1000000)),
        rate: dec!(0.15),
    },
    TaxBracket {
        label: "1,000,001-2,000,000",
        lower_bound: dec!(1000000),
        upper_bound: Some(dec!(2000000)),
        rate: dec!(0.20),
    },
    TaxBracket {
        label: "2,000,001 ขึ้นไป",
        lower_bound: dec!(2000000),
        upper_bound: None,
        rate: dec!(0.35),
    },
];
