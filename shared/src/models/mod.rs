//! Data models
//!
//! Menu rows as the managed backend returns them. All IDs are `i64`.

pub mod product;

// Re-exports
pub use product::*;
