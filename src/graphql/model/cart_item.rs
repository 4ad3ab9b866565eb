use async_graphql::{ComplexObject, SimpleObject};
use serde::{Deserialize, Serialize};

use super::foreign_types::{Product, ProductId};

/// Line item embedded in a cart.
///
/// Has no identity of its own, two items may reference the same product.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, SimpleObject)]
#[graphql(complex)]
pub struct CartItem {
    #[graphql(skip)]
    /// Product referenced by the cart item.
    pub product: ProductId,
    /// Count of the product in the cart, at least 1.
    // Signed, stored as BSON Int32.
    pub quantity: i32,
}

#[ComplexObject]
impl CartItem {
    /// Product of cart item.
    #[graphql(name = "product")]
    async fn product_reference(&self) -> Product {
        Product { id: self.product }
    }
}
