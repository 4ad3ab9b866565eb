use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::repository::CartRepository;

use super::model::{
    cart::{Cart, CartId},
    connection::cart_connection::CartConnection,
    foreign_types::{User, UserId},
    identifier::parse_identifier,
    order_datatypes::CartOrderInput,
};

/// Describes GraphQL cart queries.
pub struct Query;

#[Object]
impl Query {
    /// Retrieves cart of specific id.
    async fn cart<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "UUID of cart to retrieve.")] id: String,
    ) -> Result<Cart> {
        let repository = ctx.data::<CartRepository>()?;
        let id: CartId = parse_identifier(&id)?;
        repository.find_by_id(id).await.map_err(|error| error.extend())
    }

    /// Retrieves carts of a user.
    async fn carts_of_user<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "UUID of user owning the carts.")] user: String,
        #[graphql(desc = "Describes that the `first` N carts should be retrieved.")]
        first: Option<usize>,
        #[graphql(desc = "Describes how many carts should be skipped at the beginning.")]
        skip: Option<usize>,
        #[graphql(desc = "Specifies the order in which carts are retrieved.")]
        order_by: Option<CartOrderInput>,
    ) -> Result<CartConnection> {
        let repository = ctx.data::<CartRepository>()?;
        let user: UserId = parse_identifier(&user)?;
        let mut carts = repository
            .find_by_user(user)
            .await
            .map_err(|error| error.extend())?;
        order_by.unwrap_or_default().sort(&mut carts);
        Ok(CartConnection::paginate(carts, first, skip))
    }

    /// Entity resolver for cart of specific id.
    #[graphql(entity)]
    async fn cart_entity_resolver<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(key, desc = "UUID of cart to retrieve.")] id: CartId,
    ) -> Result<Cart> {
        let repository = ctx.data::<CartRepository>()?;
        repository.find_by_id(id).await.map_err(|error| error.extend())
    }

    /// Entity resolver for user of specific id.
    #[graphql(entity)]
    async fn user_entity_resolver<'a>(
        &self,
        #[graphql(key, desc = "UUID of user to retrieve.")] id: UserId,
    ) -> User {
        User { id }
    }
}
