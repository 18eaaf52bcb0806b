//! Editor state controller
//!
//! Line items and order drafts are edited through explicit reducers:
//! `(state, action) -> state`. Each line action is handled by one applier;
//! appliers are PURE functions of the current line.
//!
//! Invariant kept by every applier: the number of swap-fee addons on a line
//! equals the number of its active swaps (swaps whose replacement differs
//! from the original ingredient).

mod appliers;
mod draft;

pub use appliers::{
    AddAddon, ApplySwap, ChangeQuantity, MAX_QUANTITY, RemoveAddon, RemoveMode, SetNote,
    ToggleAddon, sync_swap_fees,
};
pub use draft::{OrderAction, OrderDraft, reduce_order};

use enum_dispatch::enum_dispatch;
use shared::{Addon, LineItem, RowKey};

/// Applies one action to a line item
#[enum_dispatch]
pub trait LineApplier {
    /// New state of the line, or `None` when the action removes it
    fn apply(&self, item: &LineItem) -> Option<LineItem>;
}

/// LineAction enum - dispatches to concrete applier implementations
#[enum_dispatch(LineApplier)]
#[derive(Debug, Clone, PartialEq)]
pub enum LineAction {
    AddAddon(AddAddon),
    RemoveAddon(RemoveAddon),
    ToggleAddon(ToggleAddon),
    ApplySwap(ApplySwap),
    ChangeQuantity(ChangeQuantity),
    SetNote(SetNote),
}

impl LineAction {
    pub fn add_addon(addon: impl Into<Addon>) -> Self {
        AddAddon { addon: addon.into() }.into()
    }

    pub fn remove_one(addon: impl Into<Addon>) -> Self {
        RemoveAddon {
            addon: addon.into(),
            mode: RemoveMode::One,
        }
        .into()
    }

    pub fn remove_all(addon: impl Into<Addon>) -> Self {
        RemoveAddon {
            addon: addon.into(),
            mode: RemoveMode::All,
        }
        .into()
    }

    pub fn toggle_addon(addon: impl Into<Addon>) -> Self {
        ToggleAddon { addon: addon.into() }.into()
    }

    pub fn swap(row: RowKey, replacement: impl Into<String>) -> Self {
        ApplySwap {
            row,
            replacement: replacement.into(),
        }
        .into()
    }

    pub fn change_quantity(delta: i32) -> Self {
        ChangeQuantity { delta }.into()
    }

    pub fn set_note(note: Option<String>) -> Self {
        SetNote { note }.into()
    }
}

/// Apply `action` to `item`; `None` means the line is removed
pub fn reduce_line(item: &LineItem, action: &LineAction) -> Option<LineItem> {
    action.apply(item)
}
