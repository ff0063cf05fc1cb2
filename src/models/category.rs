//! Expense categories
//!
//! The category set is closed. Records may still carry free-form category
//! text; it is mapped onto this set at query time, with anything unknown
//! landing in `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Health,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Canonical name, as stored on records
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Badge shown next to a record in list views
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Bills => "💡",
            Self::Entertainment => "🎮",
            Self::Shopping => "🛍️",
            Self::Health => "💊",
            Self::Other => "🔖",
        }
    }

    /// Look up a category by its exact canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Map raw record text onto the closed set; missing or unknown is `Other`
    ///
    /// Only exact names count: `"food"` is an unknown category.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Category;
    /// assert_eq!(Category::normalize(Some("Food")), Category::Food);
    /// assert_eq!(Category::normalize(Some("Unknown")), Category::Other);
    /// assert_eq!(Category::normalize(None), Category::Other);
    /// ```
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_name).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category selection for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every record passes category matching
    #[default]
    All,
    /// Only records whose normalized category is this one
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel text meaning "no category restriction"
    pub const ALL_SENTINEL: &'static str = "All";

    /// Check whether a record's normalized category passes this filter
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(Self::All, Self::Only)
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            return Ok(Self::All);
        }
        // Typed input is forgiving about case; record data is not
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .map(Self::Only)
            .ok_or_else(|| CategoryParseError::Unknown(trimmed.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_SENTINEL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Error for category filter text that names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "Unknown category '{}' (expected All or one of: {})",
                    name,
                    known.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
