//! Shared types for the sushi ordering back-office
//!
//! Common types used across the pricing core and the persistence client:
//! menu products, addon labels, line items, order wire payloads and the
//! unified error types.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{InvalidRollCategory, Product, ProductKind, RollCategory};
pub use order::{Addon, Extra, LineItem, RollRef, RowKey, SwapRecord};
