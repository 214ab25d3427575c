//! # Blog API Server
//!
//! HTTP layer over the post store: routes, error mapping, configuration
//! and telemetry. The binary in `main.rs` wires these together.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
