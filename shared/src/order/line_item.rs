//! Line item model

use super::addon::Addon;
use super::row_key::RowKey;
use crate::models::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ingredient substitution for one roll of a set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub from: RowKey,
    /// Replacement product name
    pub to: String,
}

impl SwapRecord {
    pub fn new(from: RowKey, to: impl Into<String>) -> Self {
        Self { from, to: to.into() }
    }

    /// A swap is active when the replacement differs from the original ingredient
    pub fn is_active(&self) -> bool {
        !self.from.is_original(&self.to)
    }
}

/// One product on an order with its chosen modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    /// Display name
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
    /// Ordered multiset; duplicates are separate charges
    #[serde(default)]
    pub addons: Vec<Addon>,
    /// At most one record per `from`
    #[serde(default)]
    pub swaps: Vec<SwapRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LineItem {
    /// New line with quantity 1 at the product's menu price
    pub fn from_product(product: &Product) -> Self {
        Self {
            product: product.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            addons: Vec::new(),
            swaps: Vec::new(),
            note: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_addons(mut self, addons: impl IntoIterator<Item = Addon>) -> Self {
        self.addons.extend(addons);
        self
    }

    /// Number of occurrences of `addon`
    pub fn addon_count(&self, addon: &Addon) -> usize {
        self.addons.iter().filter(|a| *a == addon).count()
    }

    pub fn has_addon(&self, addon: &Addon) -> bool {
        self.addons.contains(addon)
    }

    pub fn swap_for(&self, row: &RowKey) -> Option<&SwapRecord> {
        self.swaps.iter().find(|s| &s.from == row)
    }

    /// Swaps whose replacement differs from the original ingredient
    pub fn active_swap_count(&self) -> usize {
        self.swaps.iter().filter(|s| s.is_active()).count()
    }

    /// No modifiers at all; such lines merge when the same product is added again
    pub fn is_plain(&self) -> bool {
        self.addons.is_empty() && self.swaps.is_empty() && self.note.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RollCategory;

    fn set_product() -> Product {
        Product::new(5, "Zestaw 5", Decimal::from(60)).with_subcategory("zestawy")
    }

    #[test]
    fn test_from_product_defaults() {
        let item = LineItem::from_product(&set_product());
        assert_eq!(item.name, "Zestaw 5");
        assert_eq!(item.unit_price, Decimal::from(60));
        assert_eq!(item.quantity, 1);
        assert!(item.is_plain());
    }

    #[test]
    fn test_addon_count_counts_duplicates() {
        let item = LineItem::from_product(&set_product())
            .with_addons([Addon::SwapFee, Addon::parse("Sos sojowy"), Addon::SwapFee]);
        assert_eq!(item.addon_count(&Addon::SwapFee), 2);
        assert!(!item.is_plain());
    }

    #[test]
    fn test_active_swap_count_ignores_identity_swaps() {
        let mut item = LineItem::from_product(&set_product());
        item.swaps = vec![
            SwapRecord::new(RowKey::new(RollCategory::Futomaki, "Łosoś surowy"), "Futomaki Tuńczyk"),
            SwapRecord::new(RowKey::new(RollCategory::California, "Krab"), "California Krab"),
        ];
        assert_eq!(item.active_swap_count(), 1);
    }
}
