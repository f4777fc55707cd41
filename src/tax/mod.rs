//! Jurisdiction detection and tax breakdown for presentation.
//!
//! The calculator produces a single scalar tax amount. How that amount is
//! shown on an invoice (CGST + SGST halves, one IGST line, or a TDS/TCS
//! line) is derived here once, so every renderer lays out the same lines.
//!
//! # Example
//!
//! ```
//! use billsum::core::*;
//! use billsum::tax::*;
//! use rust_decimal_macros::dec;
//!
//! let tax = TaxConfiguration::gst(dec!(18));
//! let totals = compute_totals(
//!     &[LineItemBuilder::new("Service", dec!(1), dec!(1000)).build()],
//!     &Discount::default(),
//!     &tax,
//!     &Adjustment::default(),
//!     &PartyLocation::new("Kerala"),
//!     &PartyLocation::new("KERALA"),
//! );
//!
//! let breakdown = tax_breakdown(&totals, &tax);
//! assert_eq!(breakdown.jurisdiction, Jurisdiction::IntraRegion);
//! assert_eq!(breakdown.lines[0].display_label(), "CGST (9%)");
//! assert_eq!(breakdown.lines[1].amount, dec!(90));
//! ```

mod breakdown;
mod jurisdiction;

pub use breakdown::{TaxBreakdown, TaxEffect, TaxLine, tax_breakdown};
pub use jurisdiction::{Jurisdiction, determine_jurisdiction};
