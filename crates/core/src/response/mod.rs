pub mod name;
pub mod pipeline;
pub mod types;

pub use name::{pascal_case, FALLBACK_COMPONENT_NAME};
pub use pipeline::{parse_response, Draft, PIPELINE};
pub use types::GenerationResult;
