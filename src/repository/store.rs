use async_trait::async_trait;

use crate::{
    error::CartResult,
    graphql::model::{cart::Cart, cart::CartId, foreign_types::UserId},
};

/// Persistence of cart documents.
///
/// Stores neither validate nor touch timestamps, they persist what `CartRepository` hands them.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Inserts a new cart.
    async fn insert(&self, cart: &Cart) -> CartResult<()>;

    /// Retrieves the cart of `id`, `None` if it does not exist.
    async fn find_by_id(&self, id: CartId) -> CartResult<Option<Cart>>;

    /// Retrieves all carts owned by `user`, oldest first.
    async fn find_by_user(&self, user: UserId) -> CartResult<Vec<Cart>>;

    /// Replaces the stored cart with the same id.
    ///
    /// Fails with `CartError::NotFound` if no cart matched.
    async fn replace(&self, cart: &Cart) -> CartResult<()>;

    /// Removes the cart of `id`.
    ///
    /// Fails with `CartError::NotFound` if no cart matched.
    async fn delete(&self, id: CartId) -> CartResult<()>;
}
