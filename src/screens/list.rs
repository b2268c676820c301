use tracing::{error, info, instrument};

use crate::clients::ProductClient;
use crate::domain::Product;
use crate::error::ScreenError;
use crate::query::{query, ListQuery, SortKey, SortOrder};
use crate::stock::{InventorySummary, StockStatus};

/// Answer to a [`DeletePrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

/// First step of a deletion: what the user is asked to confirm.
///
/// Only [`ListScreen::request_delete`] builds prompts, and
/// [`ListScreen::resolve_delete`] consumes them, so every deletion goes
/// through an explicit decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    code: u64,
    name: String,
}

impl DeletePrompt {
    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(u64),
    Cancelled,
}

/// Product table with search, sort and delete.
///
/// Holds the loaded collection; the visible rows are recomputed from it on
/// every call to [`ListScreen::visible`].
pub struct ListScreen {
    client: ProductClient,
    products: Vec<Product>,
    query: ListQuery,
    low_stock_threshold: u32,
}

impl ListScreen {
    pub fn new(client: ProductClient, low_stock_threshold: u32) -> Self {
        Self {
            client,
            products: Vec::new(),
            query: ListQuery::default(),
            low_stock_threshold,
        }
    }

    /// Reloads the collection. On failure the previous rows stay in place.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<usize, ScreenError> {
        match self.client.list_products().await {
            Ok(products) => {
                info!(count = products.len(), "Products loaded");
                self.products = products;
                Ok(self.products.len())
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                Err(e.into())
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.query.sort_key = key;
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.query.sort_order = order;
    }

    pub fn toggle_order(&mut self) {
        self.query.sort_order = self.query.sort_order.toggle();
    }

    /// Rows to render for the current search and sort.
    pub fn visible(&self) -> Vec<Product> {
        query(&self.products, &self.query)
    }

    pub fn stock_status(&self, product: &Product) -> StockStatus {
        StockStatus::classify(product.stock, self.low_stock_threshold)
    }

    /// Counts over the whole collection, ignoring the search.
    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_products(&self.products, self.low_stock_threshold)
    }

    pub fn request_delete(&self, code: u64) -> Result<DeletePrompt, ScreenError> {
        self.products
            .iter()
            .find(|p| p.code == code)
            .map(|p| DeletePrompt {
                code: p.code,
                name: p.name.clone(),
            })
            .ok_or(ScreenError::UnknownProduct(code))
    }

    /// Applies the user's decision. The local row is removed only after the
    /// collaborator confirms the deletion.
    #[instrument(skip(self, prompt), fields(code = prompt.code))]
    pub async fn resolve_delete(
        &mut self,
        prompt: DeletePrompt,
        decision: Decision,
    ) -> Result<DeleteOutcome, ScreenError> {
        if decision == Decision::Declined {
            info!("Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.client.delete_product(prompt.code).await {
            error!(error = %e, "Failed to delete product");
            return Err(e.into());
        }

        if let Some(index) = self.products.iter().position(|p| p.code == prompt.code) {
            self.products.remove(index);
        }
        info!(name = %prompt.name, "Product deleted");
        Ok(DeleteOutcome::Deleted(prompt.code))
    }
}
