//! Line applier implementations
//!
//! One applier per [`LineAction`](super::LineAction) variant.

mod add_addon;
mod apply_swap;
mod change_quantity;
mod remove_addon;
mod set_note;
mod toggle_addon;

pub use add_addon::AddAddon;
pub use apply_swap::{ApplySwap, sync_swap_fees};
pub use change_quantity::{ChangeQuantity, MAX_QUANTITY};
pub use remove_addon::{RemoveAddon, RemoveMode};
pub use set_note::SetNote;
pub use toggle_addon::ToggleAddon;

use shared::Addon;
use tracing::warn;

/// Swap fees are owned by the swap resync; manual edits of them are ignored
fn is_managed(addon: &Addon, action: &'static str) -> bool {
    if matches!(addon, Addon::SwapFee) {
        warn!(action, "Swap fee is derived from swaps, ignoring manual edit");
        return true;
    }
    false
}
