use async_graphql::{ComplexObject, Context, ErrorExtensions, Result, SimpleObject};

use crate::repository::CartRepository;

use super::{
    connection::cart_connection::CartConnection, identifier::identifier,
    order_datatypes::CartOrderInput,
};

identifier!(
    /// UUID of a user owned by the user service.
    UserId,
    "user"
);

identifier!(
    /// UUID of a product owned by the catalog service.
    ProductId,
    "product"
);

/// Foreign type of a user owning carts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, SimpleObject)]
#[graphql(complex)]
pub struct User {
    /// UUID of the user.
    pub id: UserId,
}

#[ComplexObject]
impl User {
    /// Retrieves carts of user.
    async fn carts<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "Describes that the `first` N carts should be retrieved.")]
        first: Option<usize>,
        #[graphql(desc = "Describes how many carts should be skipped at the beginning.")]
        skip: Option<usize>,
        #[graphql(desc = "Specifies the order in which carts are retrieved.")]
        order_by: Option<CartOrderInput>,
    ) -> Result<CartConnection> {
        let repository = ctx.data::<CartRepository>()?;
        let mut carts = repository
            .find_by_user(self.id)
            .await
            .map_err(|error| error.extend())?;
        order_by.unwrap_or_default().sort(&mut carts);
        Ok(CartConnection::paginate(carts, first, skip))
    }
}

/// Foreign type of a product referenced by cart items.
#[derive(Debug, PartialEq, Eq, Clone, Copy, SimpleObject)]
pub struct Product {
    /// UUID of the product.
    pub id: ProductId,
}
