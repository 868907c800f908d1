//! Limpeza web application library.
//!
//! Exposes config, state, error handling, routes and views so integration
//! tests and the binary entrypoint share the same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resource;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
