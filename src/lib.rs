//! # billsum
//!
//! Invoice totals engine for small-business billing: line items, discount,
//! GST (CGST/SGST or IGST), TDS and TCS withholding, inclusive or exclusive
//! pricing, and free adjustments.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Totals are always recomputed from the full draft; nothing is cached.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use billsum::core::*;
//! use rust_decimal_macros::dec;
//!
//! let draft = InvoiceDraftBuilder::new("INV-000001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .issuer(PartyLocation::new("Karnataka"))
//!     .recipient(PartyLocation::new("Karnataka"))
//!     .add_item(LineItemBuilder::new("Design work", dec!(1), dec!(1000)).build())
//!     .add_item(LineItemBuilder::new("Hosting", dec!(2), dec!(500)).build())
//!     .discount_percent(dec!(10))
//!     .tax(TaxConfiguration::gst(dec!(18)))
//!     .build()
//!     .unwrap();
//!
//! let totals = draft.totals();
//! assert_eq!(totals.sub_total, dec!(2000));
//! assert_eq!(totals.tax_amount, dec!(324));
//! assert_eq!(totals.tax_halves(), Some((dec!(162), dec!(162))));
//! assert_eq!(totals.total_amount, dec!(2124));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Draft types, totals calculator, validation, numbering, tax breakdown |
//! | `render` | Indian-grouped amounts, amount in words, totals summary rows |
//! | `json` | Draft/totals JSON import and export |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tax;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::tax::*;
