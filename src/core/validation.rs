use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::*;

/// Validate a draft at the input boundary.
/// Returns all validation errors found (not just the first).
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    }

    let currency = draft.currency_code.as_str();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationError::new(
            "currency_code",
            format!("currency code must be 3 uppercase letters (ISO 4217), got: '{currency}'"),
        ));
    }

    if let Some(due) = draft.due_date {
        if due < draft.issue_date {
            errors.push(ValidationError::new(
                "due_date",
                format!(
                    "due date {due} must not be before issue date {}",
                    draft.issue_date
                ),
            ));
        }
    }

    for (i, item) in draft.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    validate_percent(draft.discount.percent, "discount.percent", &mut errors);
    validate_percent(draft.tax.rate, "tax.rate", &mut errors);

    errors
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "description is required",
        ));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must be greater than 0, got: {}", item.quantity),
        ));
    }

    if item.unit_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_rate"),
            format!("unit rate must not be negative, got: {}", item.unit_rate),
        ));
    }

    if let Some(rate) = item.tax_rate {
        validate_percent(rate, &format!("{prefix}.tax_rate"), errors);
    }
}

/// Percentages must lie in [0, 100]. This also keeps the inclusive-tax
/// divisor `1 + rate/100` away from zero.
fn validate_percent(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            field,
            format!("percentage must be between 0 and 100, got: {value}"),
        ));
    }
}
