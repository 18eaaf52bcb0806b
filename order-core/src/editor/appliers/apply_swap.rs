//! ApplySwap applier
//!
//! Swaps one roll of a set for another product of the same category.
//! Choosing the original ingredient again reverts the swap. After every
//! swap the swap-fee addons are resynchronised to the active swap count.

use crate::editor::LineApplier;
use shared::{Addon, LineItem, RowKey, SwapRecord};
use tracing::debug;

/// Swap the roll identified by `row` (whose original ingredient is
/// `row.ingredient`) for `replacement`
#[derive(Debug, Clone, PartialEq)]
pub struct ApplySwap {
    pub row: RowKey,
    /// Replacement product name
    pub replacement: String,
}

impl LineApplier for ApplySwap {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let mut next = item.clone();
        let existing = next.swaps.iter().position(|s| s.from == self.row);

        if self.row.is_original(&self.replacement) {
            if let Some(idx) = existing {
                next.swaps.remove(idx);
                debug!(row = %self.row, "Swap reverted to original ingredient");
            }
        } else {
            match existing {
                Some(idx) => next.swaps[idx].to = self.replacement.clone(),
                None => next
                    .swaps
                    .push(SwapRecord::new(self.row.clone(), self.replacement.clone())),
            }
        }

        sync_swap_fees(&mut next);
        Some(next)
    }
}

/// Make the swap-fee addon count equal the active swap count.
///
/// Missing fees are appended; surplus fees are removed from the end.
/// Other addons keep their order.
pub fn sync_swap_fees(item: &mut LineItem) {
    let target = item.active_swap_count();
    let current = item.addon_count(&Addon::SwapFee);

    if current < target {
        item.addons
            .extend(std::iter::repeat_n(Addon::SwapFee, target - current));
    } else {
        for _ in target..current {
            if let Some(idx) = item.addons.iter().rposition(|a| *a == Addon::SwapFee) {
                item.addons.remove(idx);
            }
        }
    }
}
