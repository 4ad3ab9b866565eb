use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::{CartError, CartResult},
    graphql::{
        model::{cart::Cart, cart::CartId, foreign_types::UserId},
        mutation_input_structs::{CartInput, UpdateCartInput},
    },
};

#[cfg(test)]
pub mod memory;
pub mod mongo;
pub mod store;

use store::CartStore;

/// Entry point for all cart operations.
///
/// Constructed once at startup and handed to the GraphQL schema as data. Validates inputs and
/// maintains timestamps, persistence is delegated to the wrapped `CartStore`.
#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn CartStore>,
}

impl CartRepository {
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }

    /// Validates and inserts a new cart.
    ///
    /// * `input` - Owning user and initial items of the cart.
    pub async fn create(&self, input: &CartInput) -> CartResult<Cart> {
        let (user, items) = input.validate()?;
        let cart = Cart::new(user, items);
        self.store.insert(&cart).await?;
        info!("Created cart `{}` of user `{}`.", cart.id, cart.user);
        Ok(cart)
    }

    /// Retrieves cart of specific id.
    pub async fn find_by_id(&self, id: CartId) -> CartResult<Cart> {
        debug!("Retrieving cart `{}`.", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CartError::NotFound { id })
    }

    /// Retrieves all carts of a user, oldest first.
    ///
    /// A user may own any number of carts, including none.
    pub async fn find_by_user(&self, user: UserId) -> CartResult<Vec<Cart>> {
        debug!("Retrieving carts of user `{}`.", user);
        self.store.find_by_user(user).await
    }

    /// Applies field changes to the cart of `id` and refreshes `updated_at`.
    ///
    /// * `id` - UUID of cart to update.
    /// * `input` - Field changes, validated before anything is written.
    pub async fn update(&self, id: CartId, input: &UpdateCartInput) -> CartResult<Cart> {
        let mut cart = self.find_by_id(id).await?;
        input.apply_to(&mut cart)?;
        cart.touch();
        self.store.replace(&cart).await?;
        info!("Updated cart `{}`.", cart.id);
        Ok(cart)
    }

    /// Deletes cart of `id`.
    pub async fn delete(&self, id: CartId) -> CartResult<()> {
        self.store.delete(id).await?;
        info!("Deleted cart `{}`.", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ValidationError,
        graphql::{model::foreign_types::ProductId, mutation_input_structs::CartItemInput},
        repository::memory::InMemoryCartStore,
    };

    fn repository() -> (CartRepository, Arc<InMemoryCartStore>) {
        let store = Arc::new(InMemoryCartStore::new());
        (CartRepository::new(store.clone()), store)
    }

    fn item_input(product: ProductId, quantity: i32) -> CartItemInput {
        CartItemInput {
            product: Some(product.to_string()),
            quantity: Some(quantity),
        }
    }

    fn cart_input(user: UserId, items: Vec<CartItemInput>) -> CartInput {
        CartInput {
            user: Some(user.to_string()),
            items,
        }
    }

    #[tokio::test]
    async fn create_then_find_by_user_returns_item() {
        let (repository, _) = repository();
        let user = UserId::new();
        let product = ProductId::new();

        repository
            .create(&cart_input(user, vec![item_input(product, 2)]))
            .await
            .expect("create should succeed");

        let carts = repository
            .find_by_user(user)
            .await
            .expect("find_by_user should succeed");
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].items.len(), 1);
        assert_eq!(carts[0].items[0].product, product);
        assert_eq!(carts[0].items[0].quantity, 2);
    }

    #[tokio::test]
    async fn create_without_user_is_rejected() {
        let (repository, store) = repository();
        let result = repository.create(&CartInput::default()).await;
        assert!(matches!(
            result,
            Err(CartError::Validation(ValidationError::MissingUser))
        ));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn create_with_zero_quantity_is_rejected() {
        let (repository, store) = repository();
        let input = cart_input(UserId::new(), vec![item_input(ProductId::new(), 0)]);
        let result = repository.create(&input).await;
        assert!(matches!(
            result,
            Err(CartError::Validation(
                ValidationError::QuantityBelowMinimum { index: 0, quantity: 0 }
            ))
        ));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn create_with_missing_product_is_rejected() {
        let (repository, _) = repository();
        let input = cart_input(
            UserId::new(),
            vec![CartItemInput {
                product: None,
                quantity: Some(1),
            }],
        );
        let result = repository.create(&input).await;
        assert!(matches!(
            result,
            Err(CartError::Validation(ValidationError::MissingProduct { index: 0 }))
        ));
    }

    #[tokio::test]
    async fn create_empty_cart_sets_equal_timestamps() {
        let (repository, _) = repository();
        let cart = repository
            .create(&cart_input(UserId::new(), Vec::new()))
            .await
            .expect("empty cart should be valid");
        assert!(cart.items.is_empty());
        assert_eq!(cart.created_at, cart.updated_at);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at() {
        let (repository, _) = repository();
        let cart = repository
            .create(&cart_input(UserId::new(), Vec::new()))
            .await
            .expect("create should succeed");

        let product = ProductId::new();
        let update = UpdateCartInput {
            user: None,
            items: Some(vec![item_input(product, 3)]),
        };
        let updated = repository
            .update(cart.id, &update)
            .await
            .expect("update should succeed");

        assert!(updated.updated_at > cart.updated_at);
        assert_eq!(updated.created_at, cart.created_at);
        assert_eq!(updated.user, cart.user);

        let stored = repository
            .find_by_id(cart.id)
            .await
            .expect("cart should exist");
        assert_eq!(stored, updated);
        assert_eq!(stored.items[0].quantity, 3);
    }

    #[tokio::test]
    async fn consecutive_updates_strictly_increase_updated_at() {
        let (repository, _) = repository();
        let cart = repository
            .create(&cart_input(UserId::new(), Vec::new()))
            .await
            .expect("create should succeed");
        let first = repository
            .update(cart.id, &UpdateCartInput::default())
            .await
            .expect("update should succeed");
        let second = repository
            .update(cart.id, &UpdateCartInput::default())
            .await
            .expect("update should succeed");
        assert!(first.updated_at > cart.updated_at);
        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn invalid_update_keeps_stored_cart() {
        let (repository, _) = repository();
        let cart = repository
            .create(&cart_input(UserId::new(), vec![item_input(ProductId::new(), 1)]))
            .await
            .expect("create should succeed");
        let update = UpdateCartInput {
            user: None,
            items: Some(vec![item_input(ProductId::new(), 0)]),
        };
        let result = repository.update(cart.id, &update).await;
        assert!(matches!(result, Err(CartError::Validation(_))));
        let stored = repository
            .find_by_id(cart.id)
            .await
            .expect("cart should exist");
        assert_eq!(stored, cart);
    }

    #[tokio::test]
    async fn update_unknown_cart_is_not_found() {
        let (repository, _) = repository();
        let id = CartId::new();
        let result = repository.update(id, &UpdateCartInput::default()).await;
        assert!(matches!(result, Err(CartError::NotFound { id: missing }) if missing == id));
    }

    #[tokio::test]
    async fn delete_unknown_cart_is_not_found() {
        let (repository, _) = repository();
        let id = CartId::new();
        let result = repository.delete(id).await;
        assert!(matches!(result, Err(CartError::NotFound { id: missing }) if missing == id));
    }

    #[tokio::test]
    async fn delete_removes_cart() {
        let (repository, store) = repository();
        let cart = repository
            .create(&cart_input(UserId::new(), Vec::new()))
            .await
            .expect("create should succeed");
        repository
            .delete(cart.id)
            .await
            .expect("delete should succeed");
        assert_eq!(store.len().await, 0);
        assert!(matches!(
            repository.find_by_id(cart.id).await,
            Err(CartError::NotFound { .. })
        ));
        assert!(matches!(
            repository.delete(cart.id).await,
            Err(CartError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn user_may_own_multiple_carts() {
        let (repository, _) = repository();
        let user = UserId::new();
        let first = repository
            .create(&cart_input(user, Vec::new()))
            .await
            .expect("create should succeed");
        let second = repository
            .create(&cart_input(user, Vec::new()))
            .await
            .expect("create should succeed");
        repository
            .create(&cart_input(UserId::new(), Vec::new()))
            .await
            .expect("create should succeed");

        let carts = repository
            .find_by_user(user)
            .await
            .expect("find_by_user should succeed");
        let mut ids: Vec<CartId> = carts.iter().map(|cart| cart.id).collect();
        let mut expected = vec![first.id, second.id];
        ids.sort();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn duplicate_products_are_not_merged() {
        let (repository, _) = repository();
        let product = ProductId::new();
        let cart = repository
            .create(&cart_input(
                UserId::new(),
                vec![item_input(product, 1), item_input(product, 4)],
            ))
            .await
            .expect("create should succeed");
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.items[1].quantity, 4);
    }

    #[tokio::test]
    async fn find_by_user_without_carts_is_empty() {
        let (repository, _) = repository();
        let carts = repository
            .find_by_user(UserId::new())
            .await
            .expect("find_by_user should succeed");
        assert!(carts.is_empty());
    }
}
