use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductInput};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
///
/// This is the persistence collaborator the screens talk to: `list`, `get`,
/// `create`, `update` and `delete`, each answering with a [`ProductError`] on
/// failure.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(input).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, code: u64, input: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(code, input).await?)
    }
}
