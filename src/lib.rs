pub mod assistant;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod templates_structs;
pub mod web;
