//! service-core: Shared HTTP infrastructure for the POI AI backend.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

