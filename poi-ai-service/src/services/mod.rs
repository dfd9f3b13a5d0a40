pub mod assistant;
pub mod fallback;
pub mod generator;
pub mod metrics;
pub mod providers;
pub mod tunnel;

pub use assistant::{Assistant, ChatReply, ConversationTurn, PoiDescription};
pub use generator::{GenerationError, GenerationLimits, TextGenerator};
