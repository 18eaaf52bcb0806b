//! SetNote applier

use crate::editor::LineApplier;
use shared::LineItem;

/// Replace the kitchen note; blank notes clear it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNote {
    pub note: Option<String>,
}

impl LineApplier for SetNote {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let mut next = item.clone();
        next.note = self
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Some(next)
    }
}
