use async_trait::async_trait;
use futures::TryStreamExt;
use log::info;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};

use crate::{
    error::{CartError, CartResult},
    graphql::model::{cart::Cart, cart::CartId, foreign_types::UserId},
};

use super::store::CartStore;

/// Name of the MongoDB collection containing carts.
pub const CART_COLLECTION: &str = "carts";

/// Cart store backed by a MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoCartStore {
    collection: Collection<Cart>,
}

impl MongoCartStore {
    pub fn new(db_client: &Database) -> Self {
        Self {
            collection: db_client.collection::<Cart>(CART_COLLECTION),
        }
    }

    /// Creates the index on `user` used to look up carts by owner.
    ///
    /// Creating an index which already exists is a no-op in MongoDB.
    pub async fn ensure_indexes(&self) -> CartResult<()> {
        let index = IndexModel::builder()
            .keys(doc! {"user": 1})
            .options(IndexOptions::builder().name("user_1".to_string()).build())
            .build();
        let result = self.collection.create_index(index, None).await?;
        info!(
            "Index `{}` on collection `{}` is present.",
            result.index_name, CART_COLLECTION
        );
        Ok(())
    }
}

#[async_trait]
impl CartStore for MongoCartStore {
    async fn insert(&self, cart: &Cart) -> CartResult<()> {
        self.collection.insert_one(cart, None).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: CartId) -> CartResult<Option<Cart>> {
        let maybe_cart = self.collection.find_one(doc! {"_id": id}, None).await?;
        Ok(maybe_cart)
    }

    async fn find_by_user(&self, user: UserId) -> CartResult<Vec<Cart>> {
        let find_options = FindOptions::builder()
            .sort(doc! {"createdAt": 1, "_id": 1})
            .build();
        let cursor = self
            .collection
            .find(doc! {"user": user}, find_options)
            .await?;
        let carts: Vec<Cart> = cursor.try_collect().await?;
        Ok(carts)
    }

    async fn replace(&self, cart: &Cart) -> CartResult<()> {
        let result = self
            .collection
            .replace_one(doc! {"_id": cart.id}, cart, None)
            .await?;
        match result.matched_count {
            0 => Err(CartError::NotFound { id: cart.id }),
            _ => Ok(()),
        }
    }

    async fn delete(&self, id: CartId) -> CartResult<()> {
        let result = self.collection.delete_one(doc! {"_id": id}, None).await?;
        match result.deleted_count {
            0 => Err(CartError::NotFound { id }),
            _ => Ok(()),
        }
    }
}
