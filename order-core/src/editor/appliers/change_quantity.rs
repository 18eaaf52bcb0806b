//! ChangeQuantity applier

use crate::editor::LineApplier;
use shared::LineItem;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: u32 = 9999;

/// Add `delta` to the quantity. Reaching zero removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeQuantity {
    pub delta: i32,
}

impl LineApplier for ChangeQuantity {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let quantity = i64::from(item.quantity) + i64::from(self.delta);
        if quantity <= 0 {
            return None;
        }

        let mut next = item.clone();
        next.quantity = u32::try_from(quantity)
            .unwrap_or(MAX_QUANTITY)
            .min(MAX_QUANTITY);
        Some(next)
    }
}
