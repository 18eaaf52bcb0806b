//! AddAddon applier

use super::is_managed;
use crate::editor::LineApplier;
use shared::{Addon, LineItem};

/// Append one occurrence of an addon
#[derive(Debug, Clone, PartialEq)]
pub struct AddAddon {
    pub addon: Addon,
}

impl LineApplier for AddAddon {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let mut next = item.clone();
        if !is_managed(&self.addon, "add_addon") {
            next.addons.push(self.addon.clone());
        }
        Some(next)
    }
}
