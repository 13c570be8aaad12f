pub mod classifier;
pub mod extract;
pub mod models;
pub mod payload;

pub use classifier::{classify, classify_traced, Rule, RULES};
pub use models::*;
pub use payload::{is_reserved, topic, Payload, INDEXED_ARRAY_KEYS, RESERVED_KEYS};
