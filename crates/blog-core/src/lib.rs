//! # Blog Core
//!
//! The domain layer of the blog post API.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::DomainError;
pub use store::PostStore;
