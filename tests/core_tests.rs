use billsum::core::*;
use billsum::tax::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base_builder() -> InvoiceDraftBuilder {
    InvoiceDraftBuilder::new("INV-000001", date(2024, 6, 15))
        .due_date(date(2024, 7, 15))
        .issuer(PartyLocation::new("Same"))
        .recipient(PartyLocation::new("Same"))
}

fn scenario_b_builder() -> InvoiceDraftBuilder {
    base_builder()
        .add_item(LineItemBuilder::new("Website design", dec!(1), dec!(1000)).build())
        .add_item(LineItemBuilder::new("Hosting", dec!(2), dec!(500)).build())
        .discount_percent(dec!(10))
}

// --- Scenario A: no discount, no tax ---

#[test]
fn single_item_no_tax() {
    let draft = base_builder()
        .add_item(LineItemBuilder::new("Widget", dec!(2), dec!(500)).build())
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.sub_total, dec!(1000));
    assert_eq!(totals.discount_amount, dec!(0));
    assert_eq!(totals.tax_amount, dec!(0));
    assert_eq!(totals.total_amount, dec!(1000));
    assert_eq!(totals.balance_due, dec!(1000));
    assert!(!totals.is_tax_split());
}

// --- Scenario B: GST exclusive, intra-region ---

#[test]
fn gst_exclusive_intra_region() {
    let draft = scenario_b_builder()
        .tax(TaxConfiguration::gst(dec!(18)))
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.sub_total, dec!(2000));
    assert_eq!(totals.discount_amount, dec!(200));
    assert_eq!(totals.amount_after_discount, dec!(1800));
    assert_eq!(totals.taxable_amount, dec!(1800));
    assert_eq!(totals.tax_amount, dec!(324));
    assert_eq!(totals.jurisdiction, Jurisdiction::IntraRegion);
    assert_eq!(totals.tax_halves(), Some((dec!(162), dec!(162))));
    assert_eq!(totals.total_amount, dec!(2124));
    assert_eq!(totals.balance_due, dec!(2124));
}

// --- Scenario C: GST inclusive ---

#[test]
fn gst_inclusive_does_not_add_tax_again() {
    let draft = scenario_b_builder()
        .tax(TaxConfiguration::gst(dec!(18)).inclusive())
        .build()
        .unwrap();

    let totals = draft.totals();
    assert!(totals.tax_inclusive);
    assert_eq!(totals.taxable_amount + totals.tax_amount, dec!(1800));
    assert_eq!(totals.total_amount, dec!(1800));

    let rounded = totals.rounded();
    assert_eq!(rounded.taxable_amount, dec!(1525.42));
    assert_eq!(rounded.tax_amount, dec!(274.58));
    assert_eq!(rounded.total_amount, dec!(1800.00));
}

// --- Scenario D: TDS ---

#[test]
fn tds_is_subtracted() {
    let draft = base_builder()
        .add_item(LineItemBuilder::new("Audit", dec!(1), dec!(1000)).build())
        .tax(TaxConfiguration::tds(dec!(10)))
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.tax_amount, dec!(100));
    assert_eq!(totals.total_amount, dec!(900));
    assert_eq!(totals.balance_due, dec!(900));
    assert_eq!(totals.tax_halves(), None);
}

#[test]
fn tcs_is_added() {
    let draft = base_builder()
        .add_item(LineItemBuilder::new("Scrap", dec!(10), dec!(100)).build())
        .tax(TaxConfiguration::tcs(dec!(1)))
        .adjustment("Round off", dec!(-0.5))
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.tax_amount, dec!(10));
    assert_eq!(totals.total_amount, dec!(1009.5));
}

// --- Inter-region ---

#[test]
fn gst_inter_region_is_not_split() {
    let draft = scenario_b_builder()
        .recipient(PartyLocation::new("Elsewhere"))
        .tax(TaxConfiguration::gst(dec!(18)))
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.jurisdiction, Jurisdiction::InterRegion);
    assert!(!totals.is_tax_split());
    assert_eq!(totals.tax_amount, dec!(324));
    assert_eq!(totals.total_amount, dec!(2124));
}

// --- Per-line GST ---

#[test]
fn per_line_gst_uses_line_rates_on_raw_amounts() {
    let draft = base_builder()
        .add_item(
            LineItemBuilder::new("Laptop", dec!(1), dec!(1000))
                .tax_rate(dec!(18))
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Books", dec!(2), dec!(500))
                .tax_rate(dec!(5))
                .build(),
        )
        .add_item(LineItemBuilder::new("Exempt service", dec!(1), dec!(200)).build())
        .discount_percent(dec!(10))
        .tax(TaxConfiguration::gst_per_line())
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.sub_total, dec!(2200));
    assert_eq!(totals.amount_after_discount, dec!(1980));
    // 1000 * 18% + 1000 * 5% + 200 * 0%; the 10% discount is not applied
    assert_eq!(totals.tax_amount, dec!(230));
    assert_eq!(totals.total_amount, dec!(2210));
}

#[test]
fn per_line_gst_inclusive() {
    let draft = base_builder()
        .add_item(
            LineItemBuilder::new("Phone", dec!(1), dec!(1180))
                .tax_rate(dec!(18))
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Case", dec!(1), dec!(105))
                .tax_rate(dec!(5))
                .build(),
        )
        .tax(TaxConfiguration::gst_per_line().inclusive())
        .build()
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.tax_amount, dec!(185));
    assert_eq!(totals.taxable_amount, dec!(1100));
    assert_eq!(totals.total_amount, dec!(1285));
}

#[test]
fn per_line_ignores_global_rate() {
    let mut tax = TaxConfiguration::gst_per_line();
    tax.rate = dec!(28);
    let draft = base_builder()
        .add_item(
            LineItemBuilder::new("Item", dec!(1), dec!(100))
                .tax_rate(dec!(12))
                .build(),
        )
        .tax(tax)
        .build()
        .unwrap();
    assert_eq!(draft.totals().tax_amount, dec!(12));
}

// --- Adjustment ---

#[test]
fn adjustment_applies_to_every_kind() {
    for (tax, expected) in [
        (TaxConfiguration::none(), dec!(1050)),
        (TaxConfiguration::gst(dec!(10)), dec!(1150)),
        (TaxConfiguration::gst(dec!(10)).inclusive(), dec!(1050)),
        (TaxConfiguration::tds(dec!(10)), dec!(950)),
        (TaxConfiguration::tcs(dec!(10)), dec!(1150)),
    ] {
        let draft = base_builder()
            .add_item(LineItemBuilder::new("Item", dec!(1), dec!(1000)).build())
            .tax(tax.clone())
            .adjustment("Shipping", dec!(50))
            .build()
            .unwrap();
        assert_eq!(draft.totals().total_amount, expected, "{:?}", tax.kind);
    }
}

// --- Checked totals ---

#[test]
fn checked_totals_surfaces_validation_errors() {
    let mut draft = base_builder()
        .add_item(LineItemBuilder::new("Item", dec!(1), dec!(1000)).build())
        .build()
        .unwrap();
    draft.tax = TaxConfiguration::gst(dec!(-100)).inclusive();

    let err = checked_totals(&draft).unwrap_err();
    assert!(matches!(err, BillsumError::Validation(_)));
    assert!(err.to_string().contains("tax.rate"));
}

#[test]
fn checked_totals_matches_unchecked_for_valid_input() {
    let draft = scenario_b_builder()
        .tax(TaxConfiguration::gst(dec!(18)))
        .build()
        .unwrap();
    assert_eq!(checked_totals(&draft).unwrap(), calculate_totals(&draft));
}

// --- Numbering ---

#[test]
fn next_number_after_existing_drafts() {
    let drafts = [
        base_builder().build_unchecked(),
        InvoiceDraftBuilder::new("INV-000041", date(2024, 6, 1)).build_unchecked(),
    ];
    let mut seq = InvoiceNumberSequence::from_existing("INV-", drafts.iter().map(|d| d.number.as_str()));
    assert_eq!(seq.next_number(), "INV-000042");
}
