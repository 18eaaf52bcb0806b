//! Wire payloads for order persistence
//!
//! PATCH body: `{ items: [{product_id, name, quantity, unit_price,
//! options: {addons, swaps, note}}], selected_option, total_price }`.
//! The backend echoes the persisted order in the same shape plus `id`.

use super::addon::Addon;
use super::line_item::{LineItem, SwapRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-line options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemOptions {
    #[serde(default)]
    pub addons: Vec<Addon>,
    #[serde(default)]
    pub swaps: Vec<SwapRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One line of the PATCH body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemPayload {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(default)]
    pub options: ItemOptions,
}

impl From<&LineItem> for OrderItemPayload {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            options: ItemOptions {
                addons: item.addons.clone(),
                swaps: item.swaps.clone(),
                note: item.note.clone(),
            },
        }
    }
}

/// PATCH body for an edited order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub items: Vec<OrderItemPayload>,
    #[serde(default)]
    pub selected_option: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Order as echoed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedOrder {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<OrderItemPayload>,
    #[serde(default)]
    pub selected_option: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}
