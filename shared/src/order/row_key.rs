//! Composite key identifying one roll inside a set

use crate::models::RollCategory;
use crate::util::{normalize, strip_prefix_ci};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Row key: roll category plus the original ingredient label
///
/// Textual form is `"<Category> <ingredient>"`, e.g. `"Futomaki Łosoś surowy"`.
/// Two identical rows in one set share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RowKey {
    pub category: RollCategory,
    pub ingredient: String,
}

impl RowKey {
    pub fn new(category: RollCategory, ingredient: impl Into<String>) -> Self {
        Self {
            category,
            ingredient: ingredient.into().trim().to_string(),
        }
    }

    /// Whether `candidate` names this row's original ingredient.
    ///
    /// Accepts the bare ingredient or a full product name carrying the
    /// category prefix ("Futomaki Łosoś surowy").
    pub fn is_original(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        let bare = strip_prefix_ci(candidate, self.category.label())
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .unwrap_or(candidate);
        normalize(bare) == normalize(&self.ingredient)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.ingredient)
    }
}

/// Returned when a string is not `"<Category> <ingredient>"`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid row key: {0:?}")]
pub struct InvalidRowKey(pub String);

impl FromStr for RowKey {
    type Err = InvalidRowKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, ingredient) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| InvalidRowKey(s.to_string()))?;
        let category: RollCategory = category
            .parse()
            .map_err(|_| InvalidRowKey(s.to_string()))?;
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(InvalidRowKey(s.to_string()));
        }
        Ok(Self::new(category, ingredient))
    }
}

impl TryFrom<String> for RowKey {
    type Error = InvalidRowKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RowKey> for String {
    fn from(key: RowKey) -> Self {
        key.to_string()
    }
}

/// Roll reference carried by per-roll labels
///
/// Stored labels sometimes name a roll outside the known categories; such
/// references are kept verbatim so the label still prices by its prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RollRef {
    Row(RowKey),
    Raw(String),
}

impl RollRef {
    /// Parse a reference; never fails
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse() {
            Ok(row) => Self::Row(row),
            Err(_) => Self::Raw(text.to_string()),
        }
    }

    /// The row key, when the reference names a known category
    pub fn row(&self) -> Option<&RowKey> {
        match self {
            Self::Row(row) => Some(row),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for RollRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => row.fmt(f),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

impl From<RowKey> for RollRef {
    fn from(row: RowKey) -> Self {
        Self::Row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let key: RowKey = "Futomaki Łosoś surowy".parse().unwrap();
        assert_eq!(key.category, RollCategory::Futomaki);
        assert_eq!(key.ingredient, "Łosoś surowy");
        assert_eq!(key.to_string(), "Futomaki Łosoś surowy");
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!("Uramaki Krab".parse::<RowKey>().is_err());
        assert!("California".parse::<RowKey>().is_err());
        assert!("".parse::<RowKey>().is_err());
    }

    #[test]
    fn test_is_original_with_and_without_prefix() {
        let key = RowKey::new(RollCategory::California, "Krab");
        assert!(key.is_original("Krab"));
        assert!(key.is_original("  krab "));
        assert!(key.is_original("California Krab"));
        assert!(!key.is_original("California Łosoś"));
        assert!(!key.is_original("Californiakrab"));
    }

    #[test]
    fn test_roll_ref_keeps_unknown_references() {
        assert_eq!(
            RollRef::parse(" Futomaki Łosoś "),
            RollRef::Row(RowKey::new(RollCategory::Futomaki, "Łosoś"))
        );
        let raw = RollRef::parse("Uramaki Krab");
        assert_eq!(raw, RollRef::Raw("Uramaki Krab".to_string()));
        assert!(raw.row().is_none());
        assert_eq!(raw.to_string(), "Uramaki Krab");
    }

    #[test]
    fn test_serde_as_string() {
        let key = RowKey::new(RollCategory::Hosomaki, "Ogórek");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Hosomaki Ogórek\"");
        let back: RowKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
