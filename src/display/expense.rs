//! Expense list display

use chrono::format::{Item, StrftimeItems};

use crate::models::{ExpenseRecord, RECORD_DATE_FORMAT};

/// `date_format` if chrono accepts it, otherwise the record date format
fn usable_date_format(date_format: &str) -> &str {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        tracing::warn!(date_format, "invalid date format in settings, using default");
        RECORD_DATE_FORMAT
    } else {
        date_format
    }
}

/// Format records as a list, one per line, in the order given
///
/// Unparseable dates are shown as stored. Amounts show their contribution,
/// so malformed amounts print as zero.
pub fn format_expense_list(records: &[&ExpenseRecord], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No expenses found.".to_string();
    }

    let date_format = usable_date_format(date_format);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<13} {:<16} {:>14}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for record in records {
        let date = match record.parsed_date() {
            Some(d) => d.format(date_format).to_string(),
            None => record.date.clone().unwrap_or_default(),
        };
        let category = record.normalized_category();

        output.push_str(&format!(
            "{:<10} {:<13} {} {:<13} {:>14}  {}\n",
            record.id.short(),
            date,
            category.icon(),
            record.category_text(),
            record.contribution().format_with_symbol(symbol),
            record.description()
        ));
    }

    output.push_str(&format!("\n{} expense(s)\n", records.len()));
    output
}
