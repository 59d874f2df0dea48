pub mod connection;

pub use connection::{RequestConnection, open_connection};
