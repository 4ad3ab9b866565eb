use async_graphql::{Enum, InputObject};

use super::cart::Cart;

/// GraphQL order direction.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum OrderDirection {
    /// Ascending order direction.
    #[default]
    Asc,
    /// Descending order direction.
    Desc,
}

/// Describes the fields that a cart can be ordered by.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum CartOrderField {
    /// Orders by "id".
    Id,
    /// Orders by "created_at".
    #[default]
    CreatedAt,
    /// Orders by "updated_at".
    UpdatedAt,
}

/// Specifies the order of carts.
#[derive(InputObject, Default, Debug)]
pub struct CartOrderInput {
    /// Order direction of carts.
    pub direction: Option<OrderDirection>,
    /// Field that carts should be ordered by.
    pub field: Option<CartOrderField>,
}

impl CartOrderInput {
    /// Sorts carts in place according to this order.
    ///
    /// Ties are broken by id, so the resulting order is total.
    pub fn sort(&self, carts: &mut [Cart]) {
        let field = self.field.unwrap_or_default();
        let direction = self.direction.unwrap_or_default();
        carts.sort_by(|first_cart, second_cart| {
            let ordering = match field {
                CartOrderField::Id => first_cart.id.cmp(&second_cart.id),
                CartOrderField::CreatedAt => first_cart
                    .created_at
                    .cmp(&second_cart.created_at)
                    .then_with(|| first_cart.id.cmp(&second_cart.id)),
                CartOrderField::UpdatedAt => first_cart
                    .updated_at
                    .cmp(&second_cart.updated_at)
                    .then_with(|| first_cart.id.cmp(&second_cart.id)),
            };
            match direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            }
        });
    }
}
