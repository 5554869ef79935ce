pub mod api;
pub mod chat;
pub mod config;
pub mod docs;
pub mod error;
pub mod extraction;
pub mod model;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;
pub mod store;
