//! HTTP surface: request/response types, router setup, and handlers.
pub mod handlers;
pub mod routes;
pub mod types;
