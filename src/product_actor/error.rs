use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors returned by [`ProductClient`](crate::clients::ProductClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(code) => ProductError::NotFound(code),
            FrameworkError::Rejected(reason) => ProductError::Rejected(reason),
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                ProductError::ActorCommunicationError(other.to_string())
            }
        }
    }
}
