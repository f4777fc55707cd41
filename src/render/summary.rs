use rust_decimal::Decimal;

use super::money::{format_amount, format_signed};
use crate::core::InvoiceDraft;
use crate::tax::{TaxEffect, tax_breakdown};

/// One label/value row of the totals block at the foot of an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Rows of the totals block, in print order: subtotal, discount, tax lines,
/// adjustment, total. Zero discount, zero tax and zero adjustment rows are
/// omitted.
pub fn summary_rows(draft: &InvoiceDraft) -> Vec<SummaryRow> {
    let totals = draft.totals();
    let mut rows = vec![SummaryRow::new("Sub Total", format_amount(totals.sub_total))];

    if draft.discount.percent > Decimal::ZERO {
        rows.push(SummaryRow::new(
            format!("Discount ({}%)", draft.discount.percent.normalize()),
            format!("-{}", format_amount(totals.discount_amount)),
        ));
    }

    let breakdown = tax_breakdown(&totals, &draft.tax);
    let lines = if breakdown.total().is_zero() {
        Vec::new()
    } else {
        breakdown.lines
    };
    for line in lines {
        let prefix = match line.effect {
            TaxEffect::Added => "+",
            TaxEffect::Deducted => "-",
            TaxEffect::Included => "(incl.) ",
        };
        rows.push(SummaryRow::new(
            line.display_label(),
            format!("{prefix}{}", format_amount(line.amount)),
        ));
    }

    if !draft.adjustment.amount.is_zero() {
        let label = match draft.adjustment.description.trim() {
            "" => "Adjustment",
            d => d,
        };
        rows.push(SummaryRow::new(label, format_signed(draft.adjustment.amount)));
    }

    rows.push(SummaryRow::new("Total", format_amount(totals.total_amount)));
    rows
}

/// Plain-text rendering of [`summary_rows`], one `label: value` per line.
pub fn render_summary(draft: &InvoiceDraft) -> String {
    summary_rows(draft)
        .iter()
        .map(|r| format!("{}: {}", r.label, r.value))
        .collect::<Vec<_>>()
        .join("\n")
}
