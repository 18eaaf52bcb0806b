//! Order draft and order-level reducer
//!
//! The admin editor works on a draft: the visible form for one order.
//! A draft is validated and turned into the PATCH payload only when saved.

use super::appliers::{MAX_QUANTITY, sync_swap_fees};
use super::{LineAction, reduce_line};
use crate::catalog::Catalog;
use crate::pricing::order_total;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{OrderItemPayload, OrderUpdate, PersistedOrder};
use shared::{AppError, AppResult, ErrorCode, LineItem, Product};
use tracing::warn;

/// Editable order state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub items: Vec<LineItem>,
    /// Fulfilment choice passed through to the backend (e.g. delivery/pickup)
    #[serde(default)]
    pub selected_option: Option<String>,
}

/// Order-level actions
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Add a product; merges into an existing line of the same product
    /// when neither carries modifiers
    AddProduct { product: Product, quantity: u32 },
    EditLine { index: usize, action: LineAction },
    RemoveLine { index: usize },
    SelectOption(Option<String>),
}

/// Apply `action` to `draft`
pub fn reduce_order(draft: &OrderDraft, action: &OrderAction) -> OrderDraft {
    let mut next = draft.clone();

    match action {
        OrderAction::AddProduct { product, quantity } => {
            let quantity = (*quantity).clamp(1, MAX_QUANTITY);
            match next
                .items
                .iter_mut()
                .find(|item| item.product.id == product.id && item.is_plain())
            {
                Some(item) => item.quantity = (item.quantity + quantity).min(MAX_QUANTITY),
                None => next
                    .items
                    .push(LineItem::from_product(product).with_quantity(quantity)),
            }
        }
        OrderAction::EditLine { index, action } => {
            let Some(item) = next.items.get(*index) else {
                warn!(index, lines = next.items.len(), "Edit of missing order line ignored");
                return next;
            };
            match reduce_line(item, action) {
                Some(updated) => next.items[*index] = updated,
                None => {
                    next.items.remove(*index);
                }
            }
        }
        OrderAction::RemoveLine { index } => {
            if *index < next.items.len() {
                next.items.remove(*index);
            } else {
                warn!(index, lines = next.items.len(), "Removal of missing order line ignored");
            }
        }
        OrderAction::SelectOption(option) => next.selected_option = option.clone(),
    }

    next
}

impl OrderDraft {
    /// Sum of line totals
    pub fn total(&self) -> Decimal {
        order_total(&self.items)
    }

    /// Check the draft can be persisted
    pub fn validate(&self) -> AppResult<()> {
        if self.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        for (line, item) in self.items.iter().enumerate() {
            if item.quantity == 0 || item.quantity > MAX_QUANTITY {
                return Err(AppError::invalid_quantity(format!(
                    "quantity must be between 1 and {}, got {}",
                    MAX_QUANTITY, item.quantity
                ))
                .with_detail("line", line));
            }
            if item.unit_price.is_sign_negative() {
                return Err(AppError::invalid_amount(format!(
                    "unit price must be non-negative, got {}",
                    item.unit_price
                ))
                .with_detail("line", line));
            }
        }
        Ok(())
    }

    /// Validate and build the PATCH payload
    pub fn to_update(&self) -> AppResult<OrderUpdate> {
        self.validate()?;
        Ok(OrderUpdate {
            items: self.items.iter().map(OrderItemPayload::from).collect(),
            selected_option: self.selected_option.clone(),
            total_price: self.total(),
        })
    }

    /// Rebuild a draft from a stored order.
    ///
    /// Products are resolved against the current menu; swap fees are
    /// resynchronised in case the stored order drifted.
    pub fn from_persisted(order: &PersistedOrder, catalog: &Catalog) -> AppResult<Self> {
        let items = order
            .items
            .iter()
            .map(|payload| {
                let product = catalog.require(payload.product_id)?;
                let mut item = LineItem {
                    product: product.clone(),
                    name: payload.name.clone(),
                    unit_price: payload.unit_price,
                    quantity: payload.quantity,
                    addons: payload.options.addons.clone(),
                    swaps: payload.options.swaps.clone(),
                    note: payload.options.note.clone(),
                };
                sync_swap_fees(&mut item);
                Ok(item)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            items,
            selected_option: order.selected_option.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::ItemOptions;
    use shared::{Addon, RollCategory, RowKey, SwapRecord};

    fn zestaw_5() -> Product {
        Product::new(5, "Zestaw 5", Decimal::from(60))
            .with_subcategory("zestawy")
            .with_description("W zestawie: 2x Futomaki Łosoś surowy, 1x California Krab")
    }

    fn hosomaki() -> Product {
        Product::new(4, "Hosomaki Ogórek", Decimal::from(14)).with_subcategory("hosomaki")
    }

    fn add(product: Product, quantity: u32) -> OrderAction {
        OrderAction::AddProduct { product, quantity }
    }

    #[test]
    fn test_add_product_merges_plain_lines() {
        let draft = reduce_order(&OrderDraft::default(), &add(hosomaki(), 1));
        let draft = reduce_order(&draft, &add(hosomaki(), 2));
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 3);
    }

    #[test]
    fn test_add_product_keeps_customized_line_separate() {
        let draft = reduce_order(&OrderDraft::default(), &add(zestaw_5(), 1));
        let draft = reduce_order(
            &draft,
            &OrderAction::EditLine {
                index: 0,
                action: LineAction::add_addon("Sos sojowy"),
            },
        );
        let draft = reduce_order(&draft, &add(zestaw_5(), 1));
        assert_eq!(draft.items.len(), 2);
    }

    #[test]
    fn test_edit_line_to_zero_removes_it() {
        let draft = reduce_order(&OrderDraft::default(), &add(hosomaki(), 1));
        let draft = reduce_order(
            &draft,
            &OrderAction::EditLine {
                index: 0,
                action: LineAction::change_quantity(-1),
            },
        );
        assert!(draft.items.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let draft = reduce_order(&OrderDraft::default(), &add(hosomaki(), 1));
        let edited = reduce_order(
            &draft,
            &OrderAction::EditLine {
                index: 3,
                action: LineAction::change_quantity(1),
            },
        );
        assert_eq!(edited, draft);
        assert_eq!(reduce_order(&draft, &OrderAction::RemoveLine { index: 9 }), draft);
    }

    #[test]
    fn test_to_update_builds_payload_with_total() {
        let draft = reduce_order(&OrderDraft::default(), &add(zestaw_5(), 2));
        let draft = reduce_order(
            &draft,
            &OrderAction::EditLine {
                index: 0,
                action: LineAction::add_addon("Sos sojowy"),
            },
        );
        let draft = reduce_order(
            &draft,
            &OrderAction::EditLine {
                index: 0,
                action: LineAction::swap(
                    RowKey::new(RollCategory::Futomaki, "Łosoś surowy"),
                    "Futomaki Tuńczyk",
                ),
            },
        );
        let draft = reduce_order(&draft, &OrderAction::SelectOption(Some("dostawa".into())));

        let update = draft.to_update().unwrap();
        assert_eq!(update.total_price, Decimal::from(136));
        assert_eq!(update.selected_option.as_deref(), Some("dostawa"));
        assert_eq!(update.items[0].options.addons, vec![Addon::parse("Sos sojowy"), Addon::SwapFee]);
        assert_eq!(update.items[0].options.swaps.len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_and_bad_lines() {
        let err = OrderDraft::default().to_update().unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);

        let mut draft = reduce_order(&OrderDraft::default(), &add(hosomaki(), 1));
        draft.items[0].unit_price = Decimal::from(-1);
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::InvalidAmount);

        draft.items[0].unit_price = Decimal::from(14);
        draft.items[0].quantity = 0;
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_from_persisted_resyncs_fees() {
        let catalog = Catalog::new(vec![zestaw_5(), hosomaki()]);
        let order = PersistedOrder {
            id: 77,
            items: vec![OrderItemPayload {
                product_id: 5,
                name: "Zestaw 5".into(),
                quantity: 1,
                unit_price: Decimal::from(60),
                options: ItemOptions {
                    addons: vec![Addon::SwapFee, Addon::SwapFee],
                    swaps: vec![SwapRecord::new(
                        RowKey::new(RollCategory::California, "Krab"),
                        "California Łosoś",
                    )],
                    note: None,
                },
            }],
            selected_option: None,
            total_price: Decimal::from(70),
        };

        let draft = OrderDraft::from_persisted(&order, &catalog).unwrap();
        assert_eq!(draft.items[0].addon_count(&Addon::SwapFee), 1);
        assert_eq!(draft.total(), Decimal::from(65));
    }

    #[test]
    fn test_from_persisted_unknown_product() {
        let order = PersistedOrder {
            id: 1,
            items: vec![OrderItemPayload {
                product_id: 404,
                name: "Usunięty".into(),
                quantity: 1,
                unit_price: Decimal::from(10),
                options: ItemOptions::default(),
            }],
            selected_option: None,
            total_price: Decimal::from(10),
        };
        let err = OrderDraft::from_persisted(&order, &Catalog::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }
}
