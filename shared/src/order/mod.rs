//! Order line items and their modifiers
//!
//! - Addons: priced modifiers attached to a line (sauces, extras, swap fees, bake/upgrade markers)
//! - Row keys and swap records: per-roll substitutions inside a set
//! - Line items: one product on an order with its chosen modifiers
//! - Payloads: the PATCH body and the echoed order exchanged with the backend

pub mod addon;
pub mod line_item;
pub mod payload;
pub mod row_key;

// Re-exports
pub use addon::{Addon, Extra, SAUCES};
pub use line_item::{LineItem, SwapRecord};
pub use payload::{ItemOptions, OrderItemPayload, OrderUpdate, PersistedOrder};
pub use row_key::{InvalidRowKey, RollRef, RowKey};
