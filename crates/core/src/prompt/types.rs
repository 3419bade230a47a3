use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// PNG-encoded reference image attached to a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub png: Vec<u8>,
}

/// A request for component generation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language description of the component.
    pub description: String,
    /// Optional screenshot or mockup the model should follow.
    pub reference_image: Option<ReferenceImage>,
    /// Emit a `<Name>.stories.tsx` file.
    pub want_storybook: bool,
    /// Emit a `<Name>.mock.ts` file.
    pub want_mock_data: bool,
    /// Explicit output folder. Probed conventional folders are used when absent.
    pub output_path: Option<PathBuf>,
}

/// Chat message with multimodal content support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// Content part - text or image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrlData },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrlData {
    pub url: String,
}

/// Chat completion request (OpenAI-compatible)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Chat completion response, reduced to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub content: Option<String>,
}
