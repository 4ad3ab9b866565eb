use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::repository::CartRepository;

use super::{
    model::{
        cart::{Cart, CartId},
        identifier::parse_identifier,
    },
    mutation_input_structs::{CartInput, UpdateCartInput},
};

/// Describes GraphQL cart mutations.
pub struct Mutation;

#[Object]
impl Mutation {
    /// Adds a cart with a user and a list of cart items.
    async fn create_cart<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "CartInput")] input: CartInput,
    ) -> Result<Cart> {
        let repository = ctx.data::<CartRepository>()?;
        repository.create(&input).await.map_err(|error| error.extend())
    }

    /// Updates user or items of a specific cart referenced with an id.
    ///
    /// Provided items replace all items of the cart.
    async fn update_cart<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "UUID of cart to update.")] id: String,
        #[graphql(desc = "UpdateCartInput")] input: UpdateCartInput,
    ) -> Result<Cart> {
        let repository = ctx.data::<CartRepository>()?;
        let id: CartId = parse_identifier(&id)?;
        repository
            .update(id, &input)
            .await
            .map_err(|error| error.extend())
    }

    /// Deletes cart of id.
    async fn delete_cart<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "UUID of cart to delete.")] id: String,
    ) -> Result<bool> {
        let repository = ctx.data::<CartRepository>()?;
        let id: CartId = parse_identifier(&id)?;
        repository
            .delete(id)
            .await
            .map_err(|error| error.extend())?;
        Ok(true)
    }
}
