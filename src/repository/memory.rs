use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{CartError, CartResult},
    graphql::model::{cart::Cart, cart::CartId, foreign_types::UserId},
};

use super::store::CartStore;

/// Cart store keeping carts in process memory, used in place of MongoDB in tests.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<CartId, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored carts.
    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn insert(&self, cart: &Cart) -> CartResult<()> {
        self.carts.write().await.insert(cart.id, cart.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CartId) -> CartResult<Option<Cart>> {
        Ok(self.carts.read().await.get(&id).cloned())
    }

    async fn find_by_user(&self, user: UserId) -> CartResult<Vec<Cart>> {
        let mut carts: Vec<Cart> = self
            .carts
            .read()
            .await
            .values()
            .filter(|cart| cart.user == user)
            .cloned()
            .collect();
        carts.sort_by(|first_cart, second_cart| {
            first_cart
                .created_at
                .cmp(&second_cart.created_at)
                .then_with(|| first_cart.id.cmp(&second_cart.id))
        });
        Ok(carts)
    }

    async fn replace(&self, cart: &Cart) -> CartResult<()> {
        match self.carts.write().await.get_mut(&cart.id) {
            Some(stored_cart) => {
                *stored_cart = cart.clone();
                Ok(())
            }
            None => Err(CartError::NotFound { id: cart.id }),
        }
    }

    async fn delete(&self, id: CartId) -> CartResult<()> {
        match self.carts.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CartError::NotFound { id }),
        }
    }
}
