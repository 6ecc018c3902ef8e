//! Kennel site API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, media
//! handling) so integration tests and the binary entrypoint share them.

pub mod attachments;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
