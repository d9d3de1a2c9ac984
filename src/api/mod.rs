//! HTTP API layer.
//!
//! Routing, request/response types, error mapping, and server
//! lifecycle for the booking backend.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::serve;
pub use types::ApiContext;
