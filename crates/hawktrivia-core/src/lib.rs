//! Shared service plumbing for Hawktrivia: health endpoints, request-id
//! middleware, tracing setup, serde helpers, and the single-slot TTL cache.

pub mod cache;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
