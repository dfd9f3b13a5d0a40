//! HTTP handlers for poi-ai-service.

pub mod chat;
pub mod describe;
pub mod health;
pub mod metrics;
pub mod recommend;

pub use chat::chat;
pub use describe::describe_poi;
pub use health::{health_check, not_found, service_info};
pub use recommend::recommend_poi;
