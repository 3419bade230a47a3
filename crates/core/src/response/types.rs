use serde::{Deserialize, Serialize};

/// Parsed model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Non-empty PascalCase identifier.
    pub component_name: String,
    /// Non-empty component source.
    pub component_code: String,
    /// Reply exactly as the model returned it.
    pub raw_response: String,
}
