pub mod api;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod flow;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sessions;
pub mod templates;
pub mod terminal;
pub mod utils;
