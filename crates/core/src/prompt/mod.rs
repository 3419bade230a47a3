pub mod build;
pub mod reply;
pub mod types;

pub use build::{build_format_request, build_generation_request, png_data_url};
pub use reply::extract_reply;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, GenerationRequest, ImageUrlData,
    ReferenceImage,
};
