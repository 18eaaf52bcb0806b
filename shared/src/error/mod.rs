//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//!
//! The pricing core itself never fails: unknown labels and unparseable
//! descriptions fall back to defaults. Errors exist only at the edges,
//! when an edited order is validated or persisted.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderEmpty);
//! assert_eq!(err.code.code(), 4001);
//!
//! let err = AppError::invalid_quantity("quantity must be at least 1")
//!     .with_detail("line", 2);
//! assert!(err.details.is_some());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
