//! Product classifier
//!
//! Decides which garnish extras a product (or one roll of a set) offers.
//! The rules are keyword checks over free-text menu fields; they encode
//! real menu semantics, so they stay as substring heuristics but live
//! behind pure functions. Every input returns a boolean.

use super::composition::{SetCompositionRow, parse_set_composition};
use shared::util::contains_ci;
use shared::{Extra, Product, ProductKind, RollCategory};

/// Marks a raw (not baked) ingredient: surowy / surowa / surowym
const RAW: &str = "surow";
/// łosoś / łososia / łososiem
const SALMON: &str = "łoso";
const TUNA: &str = "tuńczyk";
/// Crab stick (paluszek krabowy)
const CRAB_STICK: &str = "krab";
/// krewetka / krewetki / krewetką
const SHRIMP: &str = "krewet";

/// Product kind derived from subcategory, then name
pub fn classify(product: &Product) -> ProductKind {
    product.kind()
}

/// Whether `extra` is offered for `product`
pub fn extra_allowed(product: &Product, extra: Extra) -> bool {
    match classify(product) {
        ProductKind::Set => set_extra_allowed(product, extra),
        ProductKind::Roll(category) => roll_extra_allowed(category, &product.search_text(), extra),
        ProductKind::Special | ProductKind::Other => false,
    }
}

/// Whether `extra` is offered for one roll inside a set
pub fn row_extra_allowed(row: &SetCompositionRow, extra: Extra) -> bool {
    roll_extra_allowed(row.category, &row.ingredient, extra)
}

/// Extras offered for `product`, in menu order
pub fn available_extras(product: &Product) -> Vec<Extra> {
    Extra::ALL
        .into_iter()
        .filter(|e| extra_allowed(product, *e))
        .collect()
}

/// Extras offered for one roll inside a set, in menu order
pub fn available_row_extras(row: &SetCompositionRow) -> Vec<Extra> {
    Extra::ALL
        .into_iter()
        .filter(|e| row_extra_allowed(row, *e))
        .collect()
}

fn set_extra_allowed(product: &Product, extra: Extra) -> bool {
    let description = product.description();
    match extra {
        Extra::Tamago => parse_set_composition(description)
            .iter()
            .any(|row| row.category == RollCategory::Futomaki),
        Extra::BakedFish => contains_ci(description, RAW),
        Extra::Tempura | Extra::SoyFlake => false,
    }
}

fn roll_extra_allowed(category: RollCategory, text: &str, extra: Extra) -> bool {
    let has = |keyword: &str| contains_ci(text, keyword);

    match category {
        RollCategory::Hosomaki => extra == Extra::Tempura,
        RollCategory::Futomaki => match extra {
            Extra::BakedFish => has(RAW),
            Extra::Tamago | Extra::Tempura | Extra::SoyFlake => true,
        },
        RollCategory::California => {
            extra == Extra::BakedFish && has(SALMON) && has(RAW) && has(CRAB_STICK) && has(SHRIMP)
        }
        RollCategory::Nigiri => extra == Extra::BakedFish && (has(SALMON) || has(TUNA)),
    }
}
