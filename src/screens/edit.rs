use tracing::{error, info, instrument, warn};

use crate::clients::ProductClient;
use crate::diff::{describe_changes, has_changes, DisplayFormat, FieldChange};
use crate::domain::{Field, Product, ProductDraft};
use crate::error::ScreenError;
use crate::validation::{validate, FieldErrors, ValidationPolicy};

/// Edit form for an existing product.
///
/// Keeps the last stored copy of the product as a snapshot. The snapshot is
/// only replaced after a successful save and is the baseline for
/// [`EditScreen::has_changes`] and [`EditScreen::changes`].
pub struct EditScreen {
    client: ProductClient,
    policy: ValidationPolicy,
    snapshot: Product,
    draft: ProductDraft,
    errors: FieldErrors,
}

impl EditScreen {
    #[instrument(skip(client, policy))]
    pub async fn load(
        client: ProductClient,
        policy: ValidationPolicy,
        code: u64,
    ) -> Result<Self, ScreenError> {
        let snapshot = client.get_product(code).await.map_err(|e| {
            error!(error = %e, "Failed to load product");
            ScreenError::from(e)
        })?;
        info!(name = %snapshot.name, "Product loaded for editing");

        Ok(Self {
            client,
            policy,
            draft: snapshot.to_draft(),
            snapshot,
            errors: FieldErrors::new(),
        })
    }

    pub fn snapshot(&self) -> &Product {
        &self.snapshot
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft = self.draft.with(field, value);
        self.errors.clear(field);
    }

    /// Discards every edit since the last load or save.
    pub fn revert(&mut self) {
        self.draft = self.snapshot.to_draft();
        self.errors = FieldErrors::new();
    }

    pub fn has_changes(&self) -> bool {
        has_changes(&self.snapshot, &self.draft)
    }

    /// Save is offered only when something differs, whatever the validation state.
    pub fn can_save(&self) -> bool {
        self.has_changes()
    }

    pub fn changes(&self, format: &DisplayFormat) -> Vec<FieldChange> {
        describe_changes(&self.snapshot, &self.draft, format)
    }

    #[instrument(skip(self), fields(code = self.snapshot.code))]
    pub async fn submit(&mut self) -> Result<Product, ScreenError> {
        if !self.has_changes() {
            return Err(ScreenError::NoChanges);
        }

        let input = match validate(&self.draft, &self.policy) {
            Ok(input) => input,
            Err(errors) => {
                warn!(invalid_fields = errors.len(), "Draft rejected");
                self.errors = errors.clone();
                return Err(ScreenError::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();

        match self.client.update_product(self.snapshot.code, input).await {
            Ok(updated) => {
                info!(name = %updated.name, price = updated.price, stock = updated.stock, "Product updated");
                self.draft = updated.to_draft();
                self.snapshot = updated.clone();
                Ok(updated)
            }
            Err(e) => {
                error!(error = %e, "Failed to update product");
                Err(e.into())
            }
        }
    }
}
