//! Product persistence: the [`Entity`](crate::actor_framework::Entity) impl
//! for [`Product`] and the constructor for its actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;

/// Creates a new Product actor and its client.
///
/// Codes are handed out from 1 upwards and never reused, even when a create
/// is rejected or a product is deleted.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let mut next_code = 0u64;
    let next_product_code = move || {
        next_code += 1;
        next_code
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_product_code);
    (actor, ProductClient::new(generic_client))
}
