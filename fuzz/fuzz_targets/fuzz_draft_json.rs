#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Unvalidated drafts must never panic the calculator.
        if let Ok(draft) = billsum::json::draft_from_json(s) {
            let totals = billsum::core::calculate_totals(&draft);
            let _ = billsum::tax::tax_breakdown(&totals, &draft.tax);
            let _ = billsum::render::render_summary(&draft);
            let _ = billsum::core::checked_totals(&draft);
        }
    }
});
