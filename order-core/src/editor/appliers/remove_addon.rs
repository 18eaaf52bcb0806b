//! RemoveAddon applier

use super::is_managed;
use crate::editor::LineApplier;
use shared::{Addon, LineItem};

/// How many matching occurrences to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoveMode {
    /// The most recent occurrence
    #[default]
    One,
    /// Every occurrence
    All,
}

/// Remove an addon from a line
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveAddon {
    pub addon: Addon,
    pub mode: RemoveMode,
}

impl LineApplier for RemoveAddon {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let mut next = item.clone();
        if is_managed(&self.addon, "remove_addon") {
            return Some(next);
        }
        match self.mode {
            RemoveMode::One => {
                if let Some(idx) = next.addons.iter().rposition(|a| a == &self.addon) {
                    next.addons.remove(idx);
                }
            }
            RemoveMode::All => next.addons.retain(|a| a != &self.addon),
        }
        Some(next)
    }
}
