//! Static category knowledge: the similarity graph, popularity scores and
//! localized display names. All tables are immutable once built.

pub mod display;
pub mod graph;

pub use display::display_name;
pub use graph::{CategoryGraph, DEFAULT_POPULARITY};
