pub mod cors;
pub mod metrics;
pub mod panic;
pub mod tracing;
