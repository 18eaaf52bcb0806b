//! Property tests for the line editor
//!
//! The swap-fee count must always equal the number of active swaps, no
//! matter which sequence of edits produced the line.

use order_core::editor::{LineAction, reduce_line, sync_swap_fees};
use order_core::{line_total, SetCompositionRow};
use order_core::catalog::parse_set_composition;
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{Addon, Extra, LineItem, Product, RowKey};
use std::collections::HashSet;

const SET_DESCRIPTION: &str =
    "W zestawie: 2x Futomaki Łosoś surowy, 1x California Krab, 1x Hosomaki Ogórek";

fn set_product() -> Product {
    Product::new(5, "Zestaw 5", Decimal::from(60))
        .with_subcategory("zestawy")
        .with_description(SET_DESCRIPTION)
}

fn rows() -> Vec<SetCompositionRow> {
    parse_set_composition(SET_DESCRIPTION)
}

/// Replacement names for each row; index 0 is always the original
fn replacements(row: &SetCompositionRow) -> Vec<String> {
    vec![
        row.ingredient.clone(),
        row.row_key().to_string(),
        format!("{} Tuńczyk", row.category),
        format!("{} Węgorz", row.category),
    ]
}

fn addon_pool() -> Vec<Addon> {
    vec![
        Addon::parse("Sos sojowy"),
        Addon::SwapFee,
        Addon::BakeWholeSet,
        Addon::UpgradeSet,
        Addon::Extra(Extra::Tamago),
        Addon::BakeRoll(RowKey::new(shared::RollCategory::California, "Krab").into()),
    ]
}

fn arb_action() -> impl Strategy<Value = LineAction> {
    let swap = (0..3usize, 0..4usize).prop_map(|(r, c)| {
        let row = &rows()[r];
        LineAction::swap(row.row_key(), replacements(row)[c].clone())
    });
    let add = (0..6usize).prop_map(|i| LineAction::add_addon(addon_pool()[i].clone()));
    let remove_one = (0..6usize).prop_map(|i| LineAction::remove_one(addon_pool()[i].clone()));
    let remove_all = (0..6usize).prop_map(|i| LineAction::remove_all(addon_pool()[i].clone()));
    let toggle = (0..6usize).prop_map(|i| LineAction::toggle_addon(addon_pool()[i].clone()));
    let quantity = (-2i32..=3).prop_map(LineAction::change_quantity);

    prop_oneof![3 => swap, 1 => add, 1 => remove_one, 1 => remove_all, 1 => toggle, 1 => quantity]
}

fn assert_invariant(item: &LineItem) -> Result<(), TestCaseError> {
    prop_assert_eq!(item.addon_count(&Addon::SwapFee), item.active_swap_count());
    let froms: HashSet<_> = item.swaps.iter().map(|s| s.from.clone()).collect();
    prop_assert_eq!(froms.len(), item.swaps.len());
    prop_assert!(item.swaps.iter().all(|s| s.is_active()));
    Ok(())
}

proptest! {
    #[test]
    fn prop_swap_fee_count_tracks_active_swaps(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut item = LineItem::from_product(&set_product());
        for action in &actions {
            if let Some(next) = reduce_line(&item, action) {
                item = next;
            }
            assert_invariant(&item)?;
        }
    }

    #[test]
    fn prop_resync_is_idempotent(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut item = LineItem::from_product(&set_product());
        for action in &actions {
            if let Some(next) = reduce_line(&item, action) {
                item = next;
            }
        }
        let mut once = item.clone();
        sync_swap_fees(&mut once);
        let mut twice = once.clone();
        sync_swap_fees(&mut twice);
        prop_assert_eq!(&once, &item);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_revert_drops_exactly_one_fee(
        actions in prop::collection::vec(arb_action(), 0..40),
        r in 0..3usize,
    ) {
        let mut item = LineItem::from_product(&set_product());
        for action in &actions {
            if let Some(next) = reduce_line(&item, action) {
                item = next;
            }
        }
        let row = rows()[r].row_key();
        let fees_before = item.addon_count(&Addon::SwapFee);
        let was_active = item.swap_for(&row).is_some();

        let reverted = reduce_line(&item, &LineAction::swap(row.clone(), row.ingredient.clone())).unwrap();

        prop_assert!(reverted.swap_for(&row).is_none());
        let expected = if was_active { fees_before - 1 } else { fees_before };
        prop_assert_eq!(reverted.addon_count(&Addon::SwapFee), expected);
    }

    #[test]
    fn prop_line_total_linear_in_quantity(
        picks in prop::collection::vec(0..6usize, 0..8),
        q in 1u32..500,
    ) {
        let addons = picks.into_iter().map(|i| addon_pool()[i].clone());
        let base = LineItem::from_product(&set_product()).with_addons(addons);
        let single = line_total(&base);
        prop_assert_eq!(line_total(&base.with_quantity(q)), single * Decimal::from(q));
    }
}

#[test]
fn test_n_swaps_with_k_active() {
    let rows = rows();
    let mut item = LineItem::from_product(&set_product());
    // Three swaps, one of which names the original ingredient
    let swaps = [
        (rows[0].row_key(), "Futomaki Tuńczyk".to_string()),
        (rows[1].row_key(), "California Krab".to_string()),
        (rows[2].row_key(), "Hosomaki Łosoś".to_string()),
    ];
    for (row, to) in swaps {
        item = reduce_line(&item, &LineAction::swap(row, to)).unwrap();
    }
    assert_eq!(item.swaps.len(), 2);
    assert_eq!(item.addon_count(&Addon::SwapFee), 2);
    assert_eq!(line_total(&item), Decimal::from(70));
}
