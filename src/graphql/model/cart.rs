use async_graphql::{ComplexObject, SimpleObject};
use bson::datetime::DateTime;
use serde::{Deserialize, Serialize};

use super::{
    cart_item::CartItem,
    foreign_types::{User, UserId},
    identifier::identifier,
};

identifier!(
    /// UUID of a cart.
    CartId,
    "cart"
);

/// The cart of a user.
///
/// Persisted as one document per cart, items are embedded.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Cart {
    /// Cart UUID.
    #[serde(rename = "_id")]
    pub id: CartId,
    #[graphql(skip)]
    /// User owning the cart.
    pub user: UserId,
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,
    /// Timestamp when cart was created.
    pub created_at: DateTime,
    /// Timestamp when cart was last updated.
    pub updated_at: DateTime,
}

impl Cart {
    /// Constructs a cart with a fresh id, `created_at` and `updated_at` are the same instant.
    pub fn new(user: UserId, items: Vec<CartItem>) -> Self {
        let current_timestamp = DateTime::now();
        Self {
            id: CartId::new(),
            user,
            items,
            created_at: current_timestamp,
            updated_at: current_timestamp,
        }
    }

    /// Refreshes `updated_at`.
    ///
    /// BSON timestamps have millisecond precision, a second update within the same millisecond
    /// still moves `updated_at` forward by one millisecond.
    pub fn touch(&mut self) {
        let previous = self.updated_at.timestamp_millis();
        let now = DateTime::now().timestamp_millis();
        self.updated_at = DateTime::from_millis(now.max(previous.saturating_add(1)));
    }
}

#[ComplexObject]
impl Cart {
    /// User owning the cart.
    #[graphql(name = "user")]
    async fn user_reference(&self) -> User {
        User { id: self.user }
    }
}
