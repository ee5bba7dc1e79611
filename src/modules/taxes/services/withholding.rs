use rust_decimal::Decimal;

/// Tax still owed and tax to be refunded after withholding is netted.
/// At most one of the two is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub tax: Decimal,
    pub refund: Decimal,
}

pub fn net_withholding(total_tax: Decimal, withheld: Decimal) -> Settlement {
    let balance = total_tax.saturating_sub(withheld);

    if balance < Decimal::ZERO {
        Settlement {
            tax: Decimal::ZERO,
            refund: -balance,
        }
    } else {
        Settlement {
            tax: balance,
            refund: Decimal::ZERO,
        }
    }
}
