pub mod connection;
pub mod entities;
pub mod transactions;

pub use sea_orm;
