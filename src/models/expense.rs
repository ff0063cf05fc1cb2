//! Expense record model
//!
//! Records are kept exactly as the expense store hands them over. Stores
//! written in other languages are loose about types (an amount may arrive as
//! `"12.50"` or `null`), so the raw shape is preserved and coerced at query
//! time rather than rejected on load.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format of the `date` field
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw amount as supplied by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    /// Null, booleans, objects or a missing field
    Other(serde_json::Value),
}

impl Amount {
    /// Contribution to any total: the amount in cents when it is a positive
    /// finite number (numeric text included), zero otherwise
    pub fn contribution(&self) -> Money {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        };

        value
            .filter(|v| v.is_finite() && *v > 0.0)
            .and_then(Money::from_amount)
            .unwrap_or_default()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Read a field as `T`, falling back to `T::default()` when the value has
/// the wrong type or cannot be represented (such as `1e400`)
///
/// The raw JSON is captured first so a bad field never aborts the
/// surrounding snapshot.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = <Box<RawValue>>::deserialize(deserializer)?;
    Ok(serde_json::from_str(raw.get()).unwrap_or_else(|e| {
        tracing::trace!(value = raw.get(), error = %e, "coercing malformed record field");
        T::default()
    }))
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount in currency units
    #[serde(default, deserialize_with = "lenient")]
    pub amount: Amount,

    /// Category name; free-form, normalized on aggregation. Non-string
    /// values read as missing.
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,

    /// Calendar date, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,

    /// Free-form description
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl ExpenseRecord {
    /// Create a new validated record with a fresh id
    ///
    /// This is the creation-time gate: the amount must be a positive finite
    /// number. Category text is stored as given.
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> ExpenseResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseError::Validation(format!(
                "Enter a valid amount (got {})",
                amount
            )));
        }

        let category: String = category.into();
        let category = if category.trim().is_empty() {
            Category::Other.name().to_string()
        } else {
            category
        };

        let description: String = description.into();

        Ok(Self {
            id: ExpenseId::new(),
            amount: Amount::Number(amount),
            category: Some(category),
            date: Some(date.format(RECORD_DATE_FORMAT).to_string()),
            description: Some(description.trim().to_string()),
        })
    }

    /// This record's contribution to totals
    pub fn contribution(&self) -> Money {
        self.amount.contribution()
    }

    /// Category after normalization onto the closed set
    pub fn normalized_category(&self) -> Category {
        Category::normalize(self.category.as_deref())
    }

    /// Parsed calendar date, or `None` when the date is missing or malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), RECORD_DATE_FORMAT).ok())
    }

    /// Description text, empty when absent
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Category text as stored, falling back to the normalized name
    pub fn category_text(&self) -> &str {
        match self.category.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => self.normalized_category().name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let record = ExpenseRecord::new(12.5, "Food", date(2025, 1, 3), "  Lunch ").unwrap();
        assert_eq!(record.contribution().cents(), 1250);
        assert_eq!(record.normalized_category(), Category::Food);
        assert_eq!(record.date.as_deref(), Some("2025-01-03"));
        assert_eq!(record.description(), "Lunch");
    }

    #[test]
    fn test_new_rejects_non_positive_amounts() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = ExpenseRecord::new(bad, "Food", date(2025, 1, 3), "").unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_new_defaults_blank_category_to_other() {
        let record = ExpenseRecord::new(1.0, " ", date(2025, 1, 3), "").unwrap();
        assert_eq!(record.category.as_deref(), Some("Other"));
    }

    #[test]
    fn test_amount_coercion() {
        assert_eq!(Amount::Number(110.0).contribution().cents(), 11000);
        assert_eq!(Amount::from(" 42.10 ").contribution().cents(), 4210);
        assert!(Amount::Number(-5.0).contribution().is_zero());
        assert!(Amount::Number(0.0).contribution().is_zero());
        assert!(Amount::Number(f64::NAN).contribution().is_zero());
        assert!(Amount::from("abc").contribution().is_zero());
        assert!(Amount::from("-3").contribution().is_zero());
        assert!(Amount::default().contribution().is_zero());
        assert!(Amount::Other(serde_json::json!(true)).contribution().is_zero());
    }

    #[test]
    fn test_lenient_deserialization() {
        let json = r#"[
            {"id": "a", "amount": 10, "category": "Food", "date": "2025-01-05", "description": "x"},
            {"id": "b", "amount": "abc", "category": "Unknown", "date": "not-a-date"},
            {"id": "c", "amount": null, "category": null},
            {"id": "d"}
        ]"#;
        let records: Vec<ExpenseRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].contribution().cents(), 1000);
        assert_eq!(records[0].parsed_date(), Some(date(2025, 1, 5)));

        assert!(records[1].contribution().is_zero());
        assert_eq!(records[1].normalized_category(), Category::Other);
        assert_eq!(records[1].parsed_date(), None);

        assert!(records[2].contribution().is_zero());
        assert_eq!(records[3].description(), "");
        assert_eq!(records[3].category_text(), "Other");
    }

    #[test]
    fn test_wrongly_typed_fields_do_not_reject_the_snapshot() {
        let json = r#"[
            {"id": "a", "amount": 5, "category": "Food", "date": "2025-01-05", "description": "kept"},
            {"id": "b", "amount": 7, "category": 5, "date": 20250101, "description": ["x"]},
            {"id": "c", "amount": 1e400, "category": "Bills", "date": "2025-02-01"},
            {"id": "d", "amount": {"value": 3}, "category": true, "date": null, "description": 12}
        ]"#;
        let records: Vec<ExpenseRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].contribution().cents(), 500);
        assert_eq!(records[0].description(), "kept");

        assert_eq!(records[1].contribution().cents(), 700);
        assert_eq!(records[1].category, None);
        assert_eq!(records[1].normalized_category(), Category::Other);
        assert_eq!(records[1].parsed_date(), None);
        assert_eq!(records[1].description(), "");

        assert!(records[2].contribution().is_zero());
        assert_eq!(records[2].normalized_category(), Category::Bills);
        assert_eq!(records[2].parsed_date(), Some(date(2025, 2, 1)));

        assert!(records[3].contribution().is_zero());
        assert_eq!(records[3].normalized_category(), Category::Other);
        assert_eq!(records[3].description(), "");
    }

    #[test]
    fn test_category_text_keeps_raw_value() {
        let json = r#"{"id": "a", "amount": 1, "category": "Groceries"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_text(), "Groceries");
        assert_eq!(record.normalized_category(), Category::Other);
    }

    #[test]
    fn test_serde_round_trip_keeps_shape() {
        let record = ExpenseRecord::new(7800.0, "Other", date(2025, 2, 1), "House rent").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
