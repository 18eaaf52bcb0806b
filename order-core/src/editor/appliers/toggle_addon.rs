//! ToggleAddon applier (checkbox-style editing)

use super::is_managed;
use crate::editor::LineApplier;
use shared::{Addon, LineItem};

/// Present: remove every occurrence. Absent: add one.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleAddon {
    pub addon: Addon,
}

impl LineApplier for ToggleAddon {
    fn apply(&self, item: &LineItem) -> Option<LineItem> {
        let mut next = item.clone();
        if is_managed(&self.addon, "toggle_addon") {
            return Some(next);
        }
        if next.has_addon(&self.addon) {
            next.addons.retain(|a| a != &self.addon);
        } else {
            next.addons.push(self.addon.clone());
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::Product;

    #[test]
    fn test_toggle_on_and_off() {
        let item = LineItem::from_product(&Product::new(1, "Zestaw Duży", Decimal::from(90)));
        let action = ToggleAddon {
            addon: Addon::BakeWholeSet,
        };
        let on = action.apply(&item).unwrap();
        assert_eq!(on.addons, vec![Addon::BakeWholeSet]);
        let off = action.apply(&on).unwrap();
        assert!(off.addons.is_empty());
    }

    #[test]
    fn test_toggle_off_clears_duplicates() {
        let sauce = Addon::parse("Sos teriyaki");
        let mut item = LineItem::from_product(&Product::new(1, "Zestaw 5", Decimal::from(60)));
        item.addons = vec![sauce.clone(), sauce.clone()];
        let off = ToggleAddon { addon: sauce }.apply(&item).unwrap();
        assert!(off.addons.is_empty());
    }

    #[test]
    fn test_toggle_matches_sauce_regardless_of_casing() {
        let mut item = LineItem::from_product(&Product::new(1, "Zestaw 5", Decimal::from(60)));
        item.addons = vec![Addon::parse("sos sojowy")];
        let off = ToggleAddon {
            addon: Addon::parse("Sos sojowy"),
        }
        .apply(&item)
        .unwrap();
        assert!(off.addons.is_empty());
    }
}
