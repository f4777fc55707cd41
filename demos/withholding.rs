use billsum::core::*;
use billsum::tax::tax_breakdown;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let issue = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for tax in [
        TaxConfiguration::tds(dec!(10)).label("TDS 194J"),
        TaxConfiguration::tcs(dec!(1)),
    ] {
        let draft = InvoiceDraftBuilder::new("INV-000050", issue)
            .add_item(LineItemBuilder::new("Professional fees", dec!(1), dec!(25000)).build())
            .tax(tax)
            .build()
            .expect("draft should be valid");

        let totals = draft.totals().rounded();
        println!("{}", draft.tax.display_label());
        println!("  Sub Total:   {}", totals.sub_total);
        for line in tax_breakdown(&totals, &draft.tax).lines {
            println!("  {:<12} {} ({:?})", line.display_label(), line.amount, line.effect);
        }
        println!("  Balance due: {}", totals.balance_due);
    }
}
