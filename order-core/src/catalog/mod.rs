//! Menu catalog
//!
//! Products as fetched from the backend, plus the free-text parsers and
//! classification rules evaluated over them.

pub mod classifier;
pub mod composition;
pub mod upgrade;

pub use classifier::{
    available_extras, available_row_extras, classify, extra_allowed, row_extra_allowed,
};
pub use composition::{SetCompositionRow, parse_set_composition};
pub use upgrade::{UpgradeOffer, parse_upgrade_offer};

use shared::{AppError, AppResult, Product, ProductKind, RollCategory};
use std::collections::HashMap;

/// Read-only view over the fetched menu
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id, idx))
            .collect();
        Self { products, by_id }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// Like [`Catalog::get`] but reports a missing product as an error
    pub fn require(&self, id: i64) -> AppResult<&Product> {
        self.get(id).ok_or_else(|| AppError::product_not_found(id))
    }

    /// Products a roll of `category` can be swapped to
    pub fn swap_candidates(&self, category: RollCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.kind() == ProductKind::Roll(category))
            .collect()
    }

    /// Composition rows of a set product; empty for anything else
    pub fn set_rows(&self, product: &Product) -> Vec<SetCompositionRow> {
        match product.kind() {
            ProductKind::Set => parse_set_composition(product.description()),
            _ => Vec::new(),
        }
    }
}
