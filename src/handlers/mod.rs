pub mod helpers;
pub mod middleware;
pub mod search;
pub mod dashboard;
pub mod chat;
pub mod not_found;
