//! JSON import and export of drafts and totals.
//!
//! Decimals are written as strings (`"1800.00"`) so no precision is lost;
//! on input both strings and JSON numbers are accepted.

use crate::core::{BillsumError, InvoiceDraft, InvoiceTotals};

/// Parse a draft from JSON. The draft is not validated.
pub fn draft_from_json(input: &str) -> Result<InvoiceDraft, BillsumError> {
    serde_json::from_str(input).map_err(|e| BillsumError::Json(e.to_string()))
}

/// Serialize a draft as pretty-printed JSON.
pub fn draft_to_json(draft: &InvoiceDraft) -> Result<String, BillsumError> {
    serde_json::to_string_pretty(draft).map_err(|e| BillsumError::Json(e.to_string()))
}

/// Serialize totals for persistence. Amounts are rounded to two places first.
pub fn totals_to_json(totals: &InvoiceTotals) -> Result<String, BillsumError> {
    serde_json::to_string_pretty(&totals.rounded()).map_err(|e| BillsumError::Json(e.to_string()))
}
