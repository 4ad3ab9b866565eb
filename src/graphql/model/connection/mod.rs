pub mod cart_connection;
