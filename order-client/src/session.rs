//! Order edit session
//!
//! Holds two copies of an order: `form`, which every edit touches, and
//! `saved`, the last state the backend confirmed. Saving is not
//! optimistic: `saved` only moves after the backend accepts the update.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use order_core::{Catalog, OrderAction, OrderDraft, reduce_order};
use rust_decimal::Decimal;
use shared::Product;
use shared::order::{OrderUpdate, PersistedOrder};
use tracing::{error, info, warn};

/// Backend operations needed to edit an order
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;

    async fn fetch_order(&self, id: i64) -> ClientResult<PersistedOrder>;

    async fn update_order(&self, id: i64, update: &OrderUpdate) -> ClientResult<PersistedOrder>;
}

#[async_trait]
impl OrderStore for HttpClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        HttpClient::fetch_products(self).await
    }

    async fn fetch_order(&self, id: i64) -> ClientResult<PersistedOrder> {
        HttpClient::fetch_order(self, id).await
    }

    async fn update_order(&self, id: i64, update: &OrderUpdate) -> ClientResult<PersistedOrder> {
        HttpClient::update_order(self, id, update).await
    }
}

/// Editing state of one stored order
pub struct OrderEditSession<S: OrderStore> {
    store: S,
    order_id: i64,
    catalog: Catalog,
    form: OrderDraft,
    saved: OrderDraft,
}

impl<S: OrderStore> OrderEditSession<S> {
    /// Load the menu and the order, and start editing
    pub async fn open(store: S, order_id: i64) -> ClientResult<Self> {
        let catalog = Catalog::new(store.fetch_products().await?);
        let order = store.fetch_order(order_id).await?;
        let draft = OrderDraft::from_persisted(&order, &catalog)?;

        info!(
            order_id,
            lines = draft.items.len(),
            products = catalog.len(),
            "Order edit session opened"
        );
        Ok(Self::from_parts(store, order_id, catalog, draft))
    }

    /// Start editing an already loaded draft
    pub fn from_parts(store: S, order_id: i64, catalog: Catalog, draft: OrderDraft) -> Self {
        Self {
            store,
            order_id,
            catalog,
            saved: draft.clone(),
            form: draft,
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current visible state
    pub fn form(&self) -> &OrderDraft {
        &self.form
    }

    /// Last state accepted by the backend
    pub fn saved(&self) -> &OrderDraft {
        &self.saved
    }

    /// Whether `form` has edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.form != self.saved
    }

    /// Total of the visible form
    pub fn total(&self) -> Decimal {
        self.form.total()
    }

    /// Apply an edit to the form only
    pub fn apply(&mut self, action: &OrderAction) {
        self.form = reduce_order(&self.form, action);
    }

    /// Persist the form.
    ///
    /// On success the form becomes the saved state. On failure the error is
    /// logged and returned; both `form` and `saved` are left as they were.
    pub async fn save(&mut self) -> ClientResult<PersistedOrder> {
        let update = self.form.to_update()?;

        match self.store.update_order(self.order_id, &update).await {
            Ok(persisted) => {
                if persisted.total_price != update.total_price {
                    warn!(
                        order_id = self.order_id,
                        sent = %update.total_price,
                        stored = %persisted.total_price,
                        "Backend stored a different total"
                    );
                }
                info!(
                    order_id = self.order_id,
                    total = %update.total_price,
                    lines = update.items.len(),
                    "Order saved"
                );
                self.saved = self.form.clone();
                Ok(persisted)
            }
            Err(e) => {
                error!(order_id = self.order_id, error = %e, "Failed to save order");
                Err(e)
            }
        }
    }

    /// Drop unsaved edits
    pub fn discard(&mut self) {
        self.form = self.saved.clone();
    }
}
