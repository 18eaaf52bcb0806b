//! Line Price Calculator
//!
//! `line_total = (unit_price + Σ addon_unit_price) × quantity`
//!
//! Duplicate addons are priced independently (two "bake this roll" addons
//! for two different rolls are two charges).

use super::addon_price::addon_unit_price;
use rust_decimal::Decimal;
use shared::LineItem;
use tracing::debug;

/// Result of line price calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreakdown {
    /// Unit price of the product
    pub base: Decimal,
    /// Sum of addon unit prices (per unit of product)
    pub addons_total: Decimal,
    /// base + addons_total
    pub unit_total: Decimal,
    pub quantity: u32,
    /// unit_total × quantity
    pub line_total: Decimal,
}

/// Calculate the price breakdown of one line
pub fn calculate_line(item: &LineItem) -> LineBreakdown {
    let addons_total: Decimal = item
        .addons
        .iter()
        .map(|addon| addon_unit_price(addon, &item.product))
        .sum();

    let unit_total = item.unit_price + addons_total;
    let line_total = unit_total * Decimal::from(item.quantity);

    debug!(
        product_id = item.product.id,
        product_name = %item.name,
        unit_price = %item.unit_price,
        addons_count = item.addons.len(),
        addons_total = %addons_total,
        quantity = item.quantity,
        line_total = %line_total,
        "[Pricing] line calculated"
    );

    LineBreakdown {
        base: item.unit_price,
        addons_total,
        unit_total,
        quantity: item.quantity,
        line_total,
    }
}

/// Total charge for one line
pub fn line_total(item: &LineItem) -> Decimal {
    calculate_line(item).line_total
}

/// Sum of line totals
pub fn order_total(items: &[LineItem]) -> Decimal {
    items.iter().map(line_total).sum()
}
