//! Set composition parser
//!
//! A set's description lists its rolls after a header, e.g.
//! `"W zestawie: 2x Futomaki Łosoś surowy, 1x California Krab"`.
//! The same text may also carry other sentences, such as the upgrade offer,
//! before or after the list.

use regex::Regex;
use shared::{RollCategory, RowKey};
use std::sync::LazyLock;

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*x\s*(futomaki|hosomaki|california|nigiri)\s+([^,;.:\n]+)")
        .expect("composition pattern is valid")
});

/// One roll entry of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCompositionRow {
    pub quantity: u32,
    pub category: RollCategory,
    /// Original ingredient label, e.g. "Łosoś surowy"
    pub ingredient: String,
}

impl SetCompositionRow {
    pub fn row_key(&self) -> RowKey {
        RowKey::new(self.category, self.ingredient.clone())
    }
}

/// Parse `<qty>x <Category> <ingredient>` entries anywhere in `description`.
///
/// An ingredient runs until the next `,`, `;`, `.`, `:` or newline, so
/// surrounding sentences never leak into a row. Text that does not match is
/// skipped; order and duplicates are kept.
pub fn parse_set_composition(description: &str) -> Vec<SetCompositionRow> {
    ENTRY_RE
        .captures_iter(description)
        .filter_map(|caps| {
            let ingredient = caps[3].trim();
            if ingredient.is_empty() {
                return None;
            }
            Some(SetCompositionRow {
                quantity: caps[1].parse().ok()?,
                category: caps[2].parse().ok()?,
                ingredient: ingredient.to_string(),
            })
        })
        .collect()
}
