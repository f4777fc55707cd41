use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BillsumError;
use crate::tax::Jurisdiction;

/// Invoice draft: everything the editing surface holds before the invoice
/// is saved. Totals are never stored here; see [`InvoiceDraft::totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Invoice number (e.g. "INV-000042").
    pub number: String,
    /// Free-text subject line.
    pub subject: Option<String>,
    /// Invoice issue date.
    pub issue_date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Payment terms free text (e.g. "Net 30").
    pub terms: Option<String>,
    /// Invoice currency code (ISO 4217, e.g. "INR").
    pub currency_code: String,
    /// Location of the party issuing the invoice.
    pub issuer: PartyLocation,
    /// Location of the party being billed.
    pub recipient: PartyLocation,
    /// Line items, in display order.
    pub items: Vec<LineItem>,
    pub discount: Discount,
    pub tax: TaxConfiguration,
    pub adjustment: Adjustment,
    /// Free-text notes printed under the totals.
    pub notes: Option<String>,
}

/// A single billable line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-form description, must not be blank.
    pub description: String,
    /// Quantity, must be > 0.
    pub quantity: Decimal,
    /// Price per unit, must not be negative.
    pub unit_rate: Decimal,
    /// Tax rate percentage for this line, only read when tax is computed per line.
    pub tax_rate: Option<Decimal>,
}

impl LineItem {
    /// Line amount = quantity × unit rate. Fails if the product overflows.
    pub fn amount(&self) -> Result<Decimal, BillsumError> {
        self.quantity.checked_mul(self.unit_rate).ok_or_else(|| {
            BillsumError::Arithmetic(format!(
                "line amount {} x {} overflows",
                self.quantity, self.unit_rate
            ))
        })
    }
}

/// Which tax regime applies to the invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxKind {
    /// No tax.
    #[default]
    None,
    /// GST: consumption tax added to the sale price, split CGST/SGST when
    /// both parties share a state.
    ConsumptionTax,
    /// TDS: tax deducted at source, subtracted from the amount payable.
    WithholdingDebit,
    /// TCS: tax collected at source, added to the amount payable.
    WithholdingCredit,
}

impl TaxKind {
    /// Label shown when the configuration carries no label of its own.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::None => "No Tax",
            Self::ConsumptionTax => "GST",
            Self::WithholdingDebit => "TDS",
            Self::WithholdingCredit => "TCS",
        }
    }

    /// Parse from the short source-domain code ("GST", "TDS", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "GST" => Some(Self::ConsumptionTax),
            "TDS" => Some(Self::WithholdingDebit),
            "TCS" => Some(Self::WithholdingCredit),
            _ => None,
        }
    }

    /// True when the tax is subtracted from the total instead of added.
    pub fn is_deducted(&self) -> bool {
        matches!(self, Self::WithholdingDebit)
    }
}

/// Whether one rate applies to the whole invoice or each line carries its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxMethod {
    #[default]
    Global,
    /// Each line's own `tax_rate` is used. Only honored for `ConsumptionTax`.
    PerLine,
}

/// Tax settings for an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    pub kind: TaxKind,
    /// Rate percentage used by the global method.
    pub rate: Decimal,
    pub method: TaxMethod,
    /// Prices already contain the tax. Only honored for `ConsumptionTax`.
    pub inclusive: bool,
    /// Display label (e.g. "TDS 194J"). No effect on amounts.
    pub label: String,
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self::none()
    }
}

impl TaxConfiguration {
    pub fn none() -> Self {
        Self {
            kind: TaxKind::None,
            rate: Decimal::ZERO,
            method: TaxMethod::Global,
            inclusive: false,
            label: TaxKind::None.default_label().to_string(),
        }
    }

    /// GST at a single invoice-wide rate.
    pub fn gst(rate: Decimal) -> Self {
        Self {
            kind: TaxKind::ConsumptionTax,
            rate,
            method: TaxMethod::Global,
            inclusive: false,
            label: TaxKind::ConsumptionTax.default_label().to_string(),
        }
    }

    /// GST computed from each line's own rate.
    pub fn gst_per_line() -> Self {
        Self {
            method: TaxMethod::PerLine,
            ..Self::gst(Decimal::ZERO)
        }
    }

    pub fn tds(rate: Decimal) -> Self {
        Self::withholding(TaxKind::WithholdingDebit, rate)
    }

    pub fn tcs(rate: Decimal) -> Self {
        Self::withholding(TaxKind::WithholdingCredit, rate)
    }

    fn withholding(kind: TaxKind, rate: Decimal) -> Self {
        Self {
            kind,
            rate,
            method: TaxMethod::Global,
            inclusive: false,
            label: String::new(),
        }
    }

    /// Mark prices as tax-inclusive.
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Inclusive treatment is only meaningful for consumption tax.
    pub fn is_inclusive(&self) -> bool {
        self.inclusive && self.kind == TaxKind::ConsumptionTax
    }

    /// Per-line computation is only meaningful for consumption tax.
    pub fn is_per_line(&self) -> bool {
        self.method == TaxMethod::PerLine && self.kind == TaxKind::ConsumptionTax
    }

    /// Label to print, falling back to the kind's default.
    pub fn display_label(&self) -> &str {
        let label = self.label.trim();
        if label.is_empty() {
            self.kind.default_label()
        } else {
            label
        }
    }
}

/// Issuer or recipient location. Only the region (state/province) matters
/// for tax purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyLocation {
    pub region: String,
}

impl PartyLocation {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

/// Invoice-level discount, as a percentage of the raw subtotal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub percent: Decimal,
}

impl Discount {
    pub fn percent(percent: Decimal) -> Self {
        Self { percent }
    }
}

/// Free adjustment (rounding, shipping, goodwill). Positive adds to the
/// total, negative subtracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub description: String,
    pub amount: Decimal,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self {
            description: "Adjustment".to_string(),
            amount: Decimal::ZERO,
        }
    }
}

impl Adjustment {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Calculated totals. Derived from a draft on demand, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line amounts, before discount and tax.
    pub sub_total: Decimal,
    /// `sub_total × discount%`.
    pub discount_amount: Decimal,
    /// `sub_total - discount_amount`.
    pub amount_after_discount: Decimal,
    /// Amount the tax was computed on, net of tax. For inclusive tax this is
    /// the back-calculated base.
    pub taxable_amount: Decimal,
    /// Tax magnitude. Whether it is added or deducted follows `tax_kind`.
    pub tax_amount: Decimal,
    /// Final payable amount.
    pub total_amount: Decimal,
    /// Equal to `total_amount`; partial payments are not modelled.
    pub balance_due: Decimal,
    /// Tax regime the totals were computed under.
    pub tax_kind: TaxKind,
    /// Whether `tax_amount` is already contained in `amount_after_discount`.
    pub tax_inclusive: bool,
    /// Issuer/recipient relationship, drives the CGST/SGST vs IGST split.
    pub jurisdiction: Jurisdiction,
}

impl InvoiceTotals {
    /// True when the tax should be presented as two equal halves.
    pub fn is_tax_split(&self) -> bool {
        self.tax_kind == TaxKind::ConsumptionTax && self.jurisdiction == Jurisdiction::IntraRegion
    }

    /// The two halves of a split tax. The second half absorbs any remainder
    /// so both always add back to `tax_amount`.
    pub fn tax_halves(&self) -> Option<(Decimal, Decimal)> {
        if !self.is_tax_split() {
            return None;
        }
        let first = self.tax_amount / Decimal::TWO;
        Some((first, self.tax_amount - first))
    }

    /// Split halves for printing: the tax is rounded to the cent first, the
    /// first half is rounded to the cent and the second half takes the rest,
    /// so the printed halves always add up to the printed tax.
    pub fn rounded_tax_halves(&self) -> Option<(Decimal, Decimal)> {
        if !self.is_tax_split() {
            return None;
        }
        let tax = super::calculator::round_half_up(self.tax_amount, 2);
        let first = super::calculator::round_half_up(tax / Decimal::TWO, 2);
        Some((first, tax - first))
    }

    /// Copy with every amount rounded half-up to two decimal places, for
    /// display and persistence. Amounts keep a scale of two ("2000.00").
    pub fn rounded(&self) -> Self {
        let r = |d: Decimal| {
            let mut v = super::calculator::round_half_up(d, 2);
            v.rescale(2);
            v
        };
        Self {
            sub_total: r(self.sub_total),
            discount_amount: r(self.discount_amount),
            amount_after_discount: r(self.amount_after_discount),
            taxable_amount: r(self.taxable_amount),
            tax_amount: r(self.tax_amount),
            total_amount: r(self.total_amount),
            balance_due: r(self.balance_due),
            ..self.clone()
        }
    }
}
