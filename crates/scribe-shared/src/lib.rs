//! # Scribe Shared
//!
//! Wire types shared by the server and its clients: request payloads,
//! public views and error bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
