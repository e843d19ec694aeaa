//! # Scribe API Server
//!
//! actix-web application serving the blog's posts and users over JSON.
//! The binary in `main.rs` wires configuration and telemetry around it.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod repr;
pub mod state;
pub mod telemetry;

pub use state::AppState;
