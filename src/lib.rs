pub mod api;
pub mod clients;
pub mod config;
pub mod errors;
pub mod filter;
pub mod models;
pub mod runtime;
pub mod utils;
