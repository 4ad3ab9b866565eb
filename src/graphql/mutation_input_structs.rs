use async_graphql::InputObject;

use crate::error::ValidationError;
use crate::graphql::model::{
    cart::Cart,
    cart_item::CartItem,
    foreign_types::{ProductId, UserId},
};

/// Describes a cart to create.
///
/// Fields are optional and identifiers are plain Strings, so missing or malformed values surface as
/// `ValidationError`s instead of GraphQL parse errors.
#[derive(InputObject, Debug, Clone, Default, PartialEq)]
pub struct CartInput {
    /// UUID of user owning the cart.
    pub user: Option<String>,
    /// Items in the cart.
    #[graphql(default)]
    pub items: Vec<CartItemInput>,
}

/// Describes a cart item to add to a cart.
#[derive(InputObject, Debug, Clone, Default, PartialEq)]
pub struct CartItemInput {
    /// UUID of product to add.
    pub product: Option<String>,
    /// Count of the product, at least 1.
    pub quantity: Option<i32>,
}

/// Field changes of a cart, absent fields stay untouched.
#[derive(InputObject, Debug, Clone, Default, PartialEq)]
pub struct UpdateCartInput {
    /// UUID of user owning the cart.
    pub user: Option<String>,
    /// Replacement for all items of the cart.
    pub items: Option<Vec<CartItemInput>>,
}

impl CartItemInput {
    /// Validates the item at `index` of a submitted item list.
    pub fn validate(&self, index: usize) -> Result<CartItem, ValidationError> {
        let product: ProductId = self
            .product
            .as_deref()
            .ok_or(ValidationError::MissingProduct { index })?
            .parse()?;
        let quantity = self
            .quantity
            .ok_or(ValidationError::MissingQuantity { index })?;
        if quantity < 1 {
            return Err(ValidationError::QuantityBelowMinimum { index, quantity });
        }
        Ok(CartItem { product, quantity })
    }
}

/// Validates all items, reporting the first violation.
///
/// Items are kept in the submitted order, items referencing the same product are not merged.
pub fn validate_cart_items(items: &[CartItemInput]) -> Result<Vec<CartItem>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.validate(index))
        .collect()
}

impl CartInput {
    /// Validates the input and returns the owning user and the validated items.
    pub fn validate(&self) -> Result<(UserId, Vec<CartItem>), ValidationError> {
        let user: UserId = self
            .user
            .as_deref()
            .ok_or(ValidationError::MissingUser)?
            .parse()?;
        let items = validate_cart_items(&self.items)?;
        Ok((user, items))
    }
}

impl UpdateCartInput {
    /// Applies the field changes to `cart`.
    ///
    /// Validation happens before any field is changed, so `cart` is untouched on error.
    pub fn apply_to(&self, cart: &mut Cart) -> Result<(), ValidationError> {
        let user = self
            .user
            .as_deref()
            .map(str::parse::<UserId>)
            .transpose()?;
        let items = self
            .items
            .as_deref()
            .map(validate_cart_items)
            .transpose()?;
        if let Some(user) = user {
            cart.user = user;
        }
        if let Some(items) = items {
            cart.items = items;
        }
        Ok(())
    }
}
