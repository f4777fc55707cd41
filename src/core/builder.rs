use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::calculator;
use super::error::{BillsumError, join_errors};
use super::types::*;
use super::validation;

/// Builder for constructing validated invoice drafts.
///
/// ```
/// use billsum::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let draft = InvoiceDraftBuilder::new("INV-000001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .issuer(PartyLocation::new("Maharashtra"))
///     .recipient(PartyLocation::new("Maharashtra"))
///     .add_item(LineItemBuilder::new("Consulting", dec!(10), dec!(150)).build())
///     .tax(TaxConfiguration::gst(dec!(18)))
///     .build()
///     .unwrap();
///
/// assert_eq!(draft.totals().total_amount, dec!(1770));
/// ```
pub struct InvoiceDraftBuilder {
    number: String,
    subject: Option<String>,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    terms: Option<String>,
    currency_code: String,
    issuer: PartyLocation,
    recipient: PartyLocation,
    items: Vec<LineItem>,
    discount: Discount,
    tax: TaxConfiguration,
    adjustment: Adjustment,
    notes: Option<String>,
}

impl InvoiceDraftBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            subject: None,
            issue_date,
            due_date: None,
            terms: None,
            currency_code: "INR".to_string(),
            issuer: PartyLocation::default(),
            recipient: PartyLocation::default(),
            items: Vec::new(),
            discount: Discount::default(),
            tax: TaxConfiguration::default(),
            adjustment: Adjustment::default(),
            notes: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn issuer(mut self, location: PartyLocation) -> Self {
        self.issuer = location;
        self
    }

    pub fn recipient(mut self, location: PartyLocation) -> Self {
        self.recipient = location;
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn discount_percent(mut self, percent: Decimal) -> Self {
        self.discount = Discount::percent(percent);
        self
    }

    pub fn tax(mut self, tax: TaxConfiguration) -> Self {
        self.tax = tax;
        self
    }

    pub fn adjustment(mut self, description: impl Into<String>, amount: Decimal) -> Self {
        self.adjustment = Adjustment::new(description, amount);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the draft and run boundary validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<InvoiceDraft, BillsumError> {
        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BillsumError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.number.len() > 200 {
            return Err(BillsumError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let draft = self.build_unchecked();

        let errors = validation::validate_draft(&draft);
        if !errors.is_empty() {
            debug!(errors = errors.len(), number = %draft.number, "rejected invoice draft");
            return Err(join_errors(&errors));
        }

        Ok(draft)
    }

    /// Build without validation, for live editing or importing
    /// external data.
    pub fn build_unchecked(self) -> InvoiceDraft {
        InvoiceDraft {
            number: self.number,
            subject: self.subject,
            issue_date: self.issue_date,
            due_date: self.due_date,
            terms: self.terms,
            currency_code: self.currency_code,
            issuer: self.issuer,
            recipient: self.recipient,
            items: self.items,
            discount: self.discount,
            tax: self.tax,
            adjustment: self.adjustment,
            notes: self.notes,
        }
    }
}

impl InvoiceDraft {
    /// Recompute totals from the current state of the draft.
    pub fn totals(&self) -> InvoiceTotals {
        calculator::calculate_totals(self)
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    quantity: Decimal,
    unit_rate: Decimal,
    tax_rate: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_rate,
            tax_rate: None,
        }
    }

    /// Line tax rate, used when the invoice computes GST per line.
    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = Some(rate);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            quantity: self.quantity,
            unit_rate: self.unit_rate,
            tax_rate: self.tax_rate,
        }
    }
}
