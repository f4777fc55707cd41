use billsum::core::*;
use billsum::render::*;
use billsum::tax::tax_breakdown;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=billsum=debug shows the calculator trace
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut numbers = InvoiceNumberSequence::from_existing("INV-", ["INV-000041", "INV-000007"]);

    let draft = InvoiceDraftBuilder::new(numbers.next_number(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .subject("Website redesign")
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .terms("Net 30")
        .issuer(PartyLocation::new("Karnataka"))
        .recipient(PartyLocation::new("karnataka"))
        .add_item(LineItemBuilder::new("Website design", dec!(1), dec!(1000)).build())
        .add_item(LineItemBuilder::new("Hosting (annual)", dec!(2), dec!(500)).build())
        .discount_percent(dec!(10))
        .tax(TaxConfiguration::gst(dec!(18)))
        .adjustment("Round off", dec!(0.40))
        .build()
        .expect("draft should be valid");

    let totals = draft.totals();
    let breakdown = tax_breakdown(&totals, &draft.tax);

    println!("Invoice {} ({:?})", draft.number, breakdown.jurisdiction);
    println!("{}", render_summary(&draft));
    println!();
    println!("{}", amount_in_words(totals.rounded().total_amount));
}
