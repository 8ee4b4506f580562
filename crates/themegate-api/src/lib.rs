#![warn(missing_docs)]

//! Themegate HTTP API
//!
//! Serves the theme switch endpoint: validates the requested theme against
//! the configured allow-list, records it for the current request, persists it
//! in a cookie and redirects the client back where it came from.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use server::ApiServer;
pub use state::AppState;
