//! Core invoice types, totals calculation, validation, and numbering.
//!
//! This module holds the invoice draft model and the pure totals
//! calculator. Everything here is side-effect free.

mod builder;
mod calculator;
mod error;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use calculator::{calculate_totals, checked_totals, compute_totals};
pub(crate) use calculator::round_half_up;
pub use error::{BillsumError, ValidationError};
pub use numbering::*;
pub use types::*;
pub use validation::*;
