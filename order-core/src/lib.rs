//! Order customization core
//!
//! Pure, synchronous logic shared by the storefront cart and the admin
//! order editor:
//! - `pricing`: addon price table and line/order totals
//! - `catalog`: product classification and free-text description parsers
//! - `editor`: line and order reducers (`(state, action) -> state`)
//!
//! Nothing here performs I/O or returns errors for malformed menu text;
//! unknown inputs fall back to safe defaults.

pub mod catalog;
pub mod editor;
pub mod money;
pub mod pricing;

pub use catalog::{Catalog, SetCompositionRow, UpgradeOffer};
pub use editor::{LineAction, OrderAction, OrderDraft, reduce_line, reduce_order};
pub use pricing::{LineBreakdown, addon_unit_price, calculate_line, line_total, order_total};
