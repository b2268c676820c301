use thiserror::Error;

use crate::product_actor::ProductError;
use crate::validation::FieldErrors;

/// Errors returned by screen operations.
///
/// None of these are fatal: the screen keeps its state and the user can retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreenError {
    #[error("Invalid product: {0}")]
    Invalid(FieldErrors),
    #[error("Nothing to save: the product is unchanged")]
    NoChanges,
    #[error("Product {0} is not on this screen")]
    UnknownProduct(u64),
    #[error(transparent)]
    Persistence(#[from] ProductError),
}
