use tracing::{error, info, instrument, warn};

use crate::clients::ProductClient;
use crate::domain::{Field, Product, ProductDraft};
use crate::error::ScreenError;
use crate::validation::{validate, FieldErrors, ValidationPolicy};

/// New-product form.
pub struct CreateScreen {
    client: ProductClient,
    policy: ValidationPolicy,
    draft: ProductDraft,
    errors: FieldErrors,
}

impl CreateScreen {
    pub fn new(client: ProductClient, policy: ValidationPolicy) -> Self {
        Self {
            client,
            policy,
            draft: ProductDraft::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replaces one field of the draft and clears that field's error.
    /// Other errors stay until the next submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft = self.draft.with(field, value);
        self.errors.clear(field);
    }

    /// Validates and creates the product.
    ///
    /// Invalid drafts are not sent; the errors are kept on the screen and
    /// returned. The draft is cleared only after the product is stored.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Product, ScreenError> {
        let input = match validate(&self.draft, &self.policy) {
            Ok(input) => input,
            Err(errors) => {
                warn!(invalid_fields = errors.len(), "Draft rejected");
                self.errors = errors.clone();
                return Err(ScreenError::Invalid(errors));
            }
        };
        self.errors = FieldErrors::new();

        match self.client.create_product(input).await {
            Ok(product) => {
                info!(code = product.code, name = %product.name, "Product created");
                self.draft = ProductDraft::default();
                Ok(product)
            }
            Err(e) => {
                error!(error = %e, "Failed to create product");
                Err(e.into())
            }
        }
    }
}
