use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::{BillsumError, join_errors};
use super::types::*;
use super::validation;
use crate::tax::determine_jurisdiction;

/// Calculate totals for a draft.
///
/// Pure: reads only the draft and always recomputes from scratch. Inputs
/// are assumed to be validated (see [`validate_draft`](super::validate_draft));
/// out-of-range rates never panic but may produce meaningless amounts.
pub fn calculate_totals(draft: &InvoiceDraft) -> InvoiceTotals {
    compute_totals(
        &draft.items,
        &draft.discount,
        &draft.tax,
        &draft.adjustment,
        &draft.issuer,
        &draft.recipient,
    )
}

/// Validate the draft first and return every violation as an error.
///
/// Unlike [`calculate_totals`], amounts too large for `Decimal` surface as
/// [`BillsumError::Arithmetic`].
pub fn checked_totals(draft: &InvoiceDraft) -> Result<InvoiceTotals, BillsumError> {
    let errors = validation::validate_draft(draft);
    if !errors.is_empty() {
        return Err(join_errors(&errors));
    }
    try_compute_totals(
        &draft.items,
        &draft.discount,
        &draft.tax,
        &draft.adjustment,
        &draft.issuer,
        &draft.recipient,
    )
}

/// Calculate totals from the individual inputs.
///
/// Per-line tax is computed on raw line amounts: the invoice discount is not
/// distributed across lines, while global tax is computed after discount.
///
/// If an intermediate amount overflows `Decimal`, a warning is logged and
/// every amount is reported as zero.
pub fn compute_totals(
    items: &[LineItem],
    discount: &Discount,
    tax: &TaxConfiguration,
    adjustment: &Adjustment,
    issuer: &PartyLocation,
    recipient: &PartyLocation,
) -> InvoiceTotals {
    try_compute_totals(items, discount, tax, adjustment, issuer, recipient).unwrap_or_else(|e| {
        warn!(error = %e, items = items.len(), "totals overflowed, reporting zero amounts");
        InvoiceTotals {
            sub_total: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            amount_after_discount: Decimal::ZERO,
            taxable_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            balance_due: Decimal::ZERO,
            tax_kind: tax.kind,
            tax_inclusive: tax.is_inclusive(),
            jurisdiction: determine_jurisdiction(issuer, recipient),
        }
    })
}

fn try_compute_totals(
    items: &[LineItem],
    discount: &Discount,
    tax: &TaxConfiguration,
    adjustment: &Adjustment,
    issuer: &PartyLocation,
    recipient: &PartyLocation,
) -> Result<InvoiceTotals, BillsumError> {
    let sub_total = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        add(acc, item.amount()?)
    })?;
    let discount_amount = mul(sub_total, discount.percent / Decimal::ONE_HUNDRED)?;
    let amount_after_discount = sub(sub_total, discount_amount)?;

    let inclusive = tax.is_inclusive();

    let (taxable_amount, tax_amount) = match tax.kind {
        TaxKind::None => (amount_after_discount, Decimal::ZERO),
        _ if tax.is_per_line() => {
            let tax_amount = items.iter().try_fold(Decimal::ZERO, |acc, item| {
                let amount = item.amount()?;
                let rate = item.tax_rate.unwrap_or(Decimal::ZERO);
                add(acc, tax_portion(amount, rate, inclusive)?)
            })?;
            let base = if inclusive {
                sub(sub_total, tax_amount)?
            } else {
                sub_total
            };
            (base, tax_amount)
        }
        _ if tax.rate > Decimal::ZERO => {
            let tax_amount = tax_portion(amount_after_discount, tax.rate, inclusive)?;
            let base = if inclusive {
                sub(amount_after_discount, tax_amount)?
            } else {
                amount_after_discount
            };
            (base, tax_amount)
        }
        _ => (amount_after_discount, Decimal::ZERO),
    };

    let total_amount = if inclusive {
        add(amount_after_discount, adjustment.amount)?
    } else if tax.kind.is_deducted() {
        add(sub(amount_after_discount, tax_amount)?, adjustment.amount)?
    } else {
        add(add(amount_after_discount, tax_amount)?, adjustment.amount)?
    };

    let jurisdiction = determine_jurisdiction(issuer, recipient);

    debug!(
        items = items.len(),
        kind = ?tax.kind,
        method = ?tax.method,
        inclusive,
        %total_amount,
        "calculated invoice totals"
    );

    Ok(InvoiceTotals {
        sub_total,
        discount_amount,
        amount_after_discount,
        taxable_amount,
        tax_amount,
        total_amount,
        balance_due: total_amount,
        tax_kind: tax.kind,
        tax_inclusive: inclusive,
        jurisdiction,
    })
}

/// Tax contained in (inclusive) or charged on top of (exclusive) `amount`.
fn tax_portion(amount: Decimal, rate: Decimal, inclusive: bool) -> Result<Decimal, BillsumError> {
    if !inclusive {
        return mul(amount, rate / Decimal::ONE_HUNDRED);
    }
    let divisor = Decimal::ONE + rate / Decimal::ONE_HUNDRED;
    if divisor.is_zero() {
        warn!(%rate, %amount, "inclusive tax divisor is zero, treating tax as 0");
        return Ok(Decimal::ZERO);
    }
    let base = amount.checked_div(divisor).ok_or_else(|| overflow("division"))?;
    sub(amount, base)
}

fn overflow(op: &str) -> BillsumError {
    BillsumError::Arithmetic(format!("decimal overflow in {op}"))
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, BillsumError> {
    a.checked_add(b).ok_or_else(|| overflow("addition"))
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal, BillsumError> {
    a.checked_sub(b).ok_or_else(|| overflow("subtraction"))
}

fn mul(a: Decimal, b: Decimal) -> Result<Decimal, BillsumError> {
    a.checked_mul(b).ok_or_else(|| overflow("multiplication"))
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
