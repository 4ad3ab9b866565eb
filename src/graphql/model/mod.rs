pub mod cart;
pub mod cart_item;
pub mod connection;
pub mod foreign_types;
pub mod identifier;
pub mod order_datatypes;
