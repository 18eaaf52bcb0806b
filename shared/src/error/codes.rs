//! Unified error codes
//!
//! Error codes are organized by range:
//! - 4xxx: Order errors
//! - 6xxx: Product errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Order ====================
    /// Order has no line items
    OrderEmpty = 4001,
    /// Line item quantity is invalid
    InvalidQuantity = 4002,
    /// Price or total is invalid
    InvalidAmount = 4003,

    // ==================== 6xxx: Product ====================
    /// Product not found in the menu
    ProductNotFound = 6001,
}

impl ErrorCode {
    /// Numeric value of the code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::OrderEmpty => "Order has no items",
            Self::InvalidQuantity => "Invalid quantity",
            Self::InvalidAmount => "Invalid amount",
            Self::ProductNotFound => "Product not found",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            4001 => Ok(Self::OrderEmpty),
            4002 => Ok(Self::InvalidQuantity),
            4003 => Ok(Self::InvalidAmount),
            6001 => Ok(Self::ProductNotFound),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
