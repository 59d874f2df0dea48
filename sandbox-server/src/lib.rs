pub mod app_state;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod settings;
pub mod utils;
