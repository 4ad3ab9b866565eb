use async_graphql::SimpleObject;

use super::super::cart::Cart;

/// A connection of carts.
#[derive(SimpleObject, Debug)]
#[graphql(shareable)]
pub struct CartConnection {
    /// The resulting entities.
    pub nodes: Vec<Cart>,
    /// Whether this connection has a next page.
    pub has_next_page: bool,
    /// The total amount of items in this connection.
    pub total_count: u64,
}

impl CartConnection {
    /// Cuts the page described by `first` and `skip` out of already ordered carts.
    pub fn paginate(carts: Vec<Cart>, first: Option<usize>, skip: Option<usize>) -> Self {
        let total_count = carts.len();
        let definitely_skip = skip.unwrap_or(0);
        let definitely_first = first.unwrap_or(usize::MAX);
        let nodes: Vec<Cart> = carts
            .into_iter()
            .skip(definitely_skip)
            .take(definitely_first)
            .collect();
        let has_next_page = total_count > nodes.len().saturating_add(definitely_skip);
        Self {
            nodes,
            has_next_page,
            total_count: total_count as u64,
        }
    }
}
