//! Built-in demo snapshot
//!
//! Three expenses dated on the given day, used to try the tool out before any
//! real data exists.

use chrono::NaiveDate;

use crate::models::{Amount, ExpenseId, ExpenseRecord, RECORD_DATE_FORMAT};

/// The demo expenses, all dated `today`
pub fn demo_records(today: NaiveDate) -> Vec<ExpenseRecord> {
    let date = today.format(RECORD_DATE_FORMAT).to_string();
    [
        ("d1", 110.0, "Food", "Chicken +eggs"),
        ("d2", 2600.0, "Shopping", "Trousers"),
        ("d3", 7800.0, "Other", "House rent"),
    ]
    .into_iter()
    .map(|(id, amount, category, description)| ExpenseRecord {
        id: ExpenseId::from_raw(id),
        amount: Amount::Number(amount),
        category: Some(category.to_string()),
        date: Some(date.clone()),
        description: Some(description.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::compute_grand_total;

    #[test]
    fn test_demo_records() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let records = demo_records(today);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.parsed_date() == Some(today)));
        assert_eq!(compute_grand_total(&records).cents(), 1_051_000);
        assert_eq!(records[2].description(), "House rent");
    }
}
