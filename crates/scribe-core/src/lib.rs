//! # Scribe Core
//!
//! The domain layer of the Scribe blogging API.
//! This crate contains the blog entities, their input types and the ports
//! that storage and credential adapters implement. No infrastructure lives here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
