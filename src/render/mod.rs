//! Presentation helpers for invoice documents.
//!
//! Amounts are rounded half-up to two places for display; the calculator
//! itself keeps full decimal precision.

mod money;
mod summary;
mod words;

pub use money::{format_amount, format_signed};
pub use summary::{SummaryRow, render_summary, summary_rows};
pub use words::{CurrencyWords, amount_in_words, amount_in_words_with};
