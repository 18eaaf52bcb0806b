//! Product Model

use crate::util::{contains_ci, normalize};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product entity (one menu row)
///
/// Owned by menu management; read-only for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Free text; may encode set composition and size-upgrade offers
    #[serde(default)]
    pub description: Option<String>,
    /// Free text, e.g. "zestawy", "california", "hosomaki"
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            subcategory: None,
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Description or empty string
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Subcategory or empty string
    pub fn subcategory(&self) -> &str {
        self.subcategory.as_deref().unwrap_or_default()
    }

    /// Name and description joined, for keyword checks
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description())
    }

    /// Derive the product kind from subcategory, falling back to the name
    pub fn kind(&self) -> ProductKind {
        match ProductKind::from_text(self.subcategory()) {
            ProductKind::Other => ProductKind::from_text(&self.name),
            kind => kind,
        }
    }
}

/// Roll category
///
/// The four roll families that appear in set compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RollCategory {
    /// Thick roll
    Futomaki,
    /// Thin roll
    Hosomaki,
    /// Outer-rice roll
    California,
    /// Single piece
    Nigiri,
}

impl RollCategory {
    pub const ALL: [RollCategory; 4] = [
        RollCategory::Futomaki,
        RollCategory::Hosomaki,
        RollCategory::California,
        RollCategory::Nigiri,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Futomaki => "Futomaki",
            Self::Hosomaki => "Hosomaki",
            Self::California => "California",
            Self::Nigiri => "Nigiri",
        }
    }
}

impl fmt::Display for RollCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names none of the roll categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown roll category: {0:?}")]
pub struct InvalidRollCategory(pub String);

impl FromStr for RollCategory {
    type Err = InvalidRollCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == key)
            .ok_or_else(|| InvalidRollCategory(s.to_string()))
    }
}

/// Product kind derived from free-text category fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum ProductKind {
    /// Set (zestaw) bundling several rolls
    Set,
    Roll(RollCategory),
    /// Chef's specials (specjały)
    Special,
    Other,
}

impl ProductKind {
    /// Classify a single free-text field
    pub fn from_text(text: &str) -> Self {
        if contains_ci(text, "zestaw") {
            return Self::Set;
        }
        if let Some(category) = RollCategory::ALL
            .into_iter()
            .find(|c| contains_ci(text, c.label()))
        {
            return Self::Roll(category);
        }
        if contains_ci(text, "specja") {
            return Self::Special;
        }
        Self::Other
    }

    pub fn roll_category(&self) -> Option<RollCategory> {
        match self {
            Self::Roll(category) => Some(*category),
            _ => None,
        }
    }
}
