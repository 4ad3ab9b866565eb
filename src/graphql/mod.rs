use async_graphql::{extensions::Logger, EmptySubscription, Schema};

use crate::repository::CartRepository;

pub mod model;
pub mod mutation;
pub mod mutation_input_structs;
pub mod query;

use mutation::Mutation;
use query::Query;

/// GraphQL schema of the cart service.
pub type CartSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the federated schema serving `repository`.
pub fn build_schema(repository: CartRepository) -> CartSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .extension(Logger)
        .data(repository)
        .enable_federation()
        .finish()
}
