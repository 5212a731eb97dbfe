//! Two small CRUD services over in-memory stores: items and notes.
//!
//! Each binary builds one router from [`app`] around its own [`store::Store`].

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod validate;
