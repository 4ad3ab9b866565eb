use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;

use crate::graphql::model::cart::CartId;

/// Result type of cart repository and store operations.
pub type CartResult<T> = Result<T, CartError>;

/// Errors surfaced by cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A cart or one of its items violates a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The operation targets a cart which does not exist.
    #[error("Cart with UUID: `{id}` not found.")]
    NotFound { id: CartId },
    /// The document store failed to execute the operation.
    #[error("Cart operation failed in MongoDB: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Field constraint violations of a cart.
///
/// `index` always refers to the position of the offending item in the submitted item list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cart requires a user.")]
    MissingUser,
    #[error("Cart item at index {index} requires a product.")]
    MissingProduct { index: usize },
    #[error("Cart item at index {index} requires a quantity.")]
    MissingQuantity { index: usize },
    #[error("Cart item at index {index} has quantity {quantity}, the minimum is 1.")]
    QuantityBelowMinimum { index: usize, quantity: i32 },
    #[error("`{value}` is not a valid {entity} reference.")]
    InvalidReference { entity: &'static str, value: String },
}

impl CartError {
    /// Machine readable error code exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            CartError::Validation(_) => "VALIDATION_ERROR",
            CartError::NotFound { .. } => "NOT_FOUND",
            CartError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl ErrorExtensions for CartError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", self.code()))
    }
}
