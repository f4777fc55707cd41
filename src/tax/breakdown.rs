use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::Jurisdiction;
use crate::core::{InvoiceTotals, TaxConfiguration, TaxKind, round_half_up};

/// How a tax line affects the payable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxEffect {
    /// Charged on top of the amount after discount.
    Added,
    /// Withheld from the amount after discount (TDS).
    Deducted,
    /// Already contained in the quoted prices.
    Included,
}

/// One presented tax line (e.g. "CGST (9%)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub label: String,
    /// Rate shown next to the label. `None` when lines carry their own rates.
    pub rate: Option<Decimal>,
    pub amount: Decimal,
    pub effect: TaxEffect,
}

impl TaxLine {
    /// Label with the rate appended, e.g. "IGST (18%)".
    pub fn display_label(&self) -> String {
        match self.rate {
            Some(rate) => format!("{} ({}%)", self.label, rate.normalize()),
            None => self.label.clone(),
        }
    }
}

/// The tax lines an invoice should present, in print order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub jurisdiction: Jurisdiction,
    pub lines: Vec<TaxLine>,
}

impl TaxBreakdown {
    /// Sum of the presented lines. Equals the tax amount rounded to the cent.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

/// Derive the presented tax lines from calculated totals.
///
/// - GST, same region: CGST and SGST, each at half the rate.
/// - GST, different regions: a single IGST line.
/// - TDS / TCS: one line under the configured label.
/// - No tax: no lines.
///
/// Line amounts are rounded half-up to two places, with a split tax divided
/// by [`InvoiceTotals::rounded_tax_halves`] so both lines add up exactly.
pub fn tax_breakdown(totals: &InvoiceTotals, tax: &TaxConfiguration) -> TaxBreakdown {
    let effect = if totals.tax_inclusive {
        TaxEffect::Included
    } else if totals.tax_kind.is_deducted() {
        TaxEffect::Deducted
    } else {
        TaxEffect::Added
    };
    let rate = (!tax.is_per_line()).then_some(tax.rate);
    let rounded_tax = round_half_up(totals.tax_amount, 2);

    let line = |label: &str, rate: Option<Decimal>, amount: Decimal| TaxLine {
        label: label.to_string(),
        rate,
        amount,
        effect,
    };

    let lines = match totals.tax_kind {
        TaxKind::None => Vec::new(),
        TaxKind::ConsumptionTax => match totals.rounded_tax_halves() {
            Some((first, second)) => {
                let half_rate = rate.map(|r| r / Decimal::TWO);
                vec![
                    line("CGST", half_rate, first),
                    line("SGST", half_rate, second),
                ]
            }
            None => vec![line("IGST", rate, rounded_tax)],
        },
        TaxKind::WithholdingDebit | TaxKind::WithholdingCredit => {
            vec![line(tax.display_label(), rate, rounded_tax)]
        }
    };

    TaxBreakdown {
        jurisdiction: totals.jurisdiction,
        lines,
    }
}
