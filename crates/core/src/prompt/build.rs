use base64::Engine;

use super::types::{ChatMessage, ChatRequest, ContentPart, ImageUrlData, ReferenceImage};

pub const MODEL: &str = "gpt-4o";
pub const MAX_TOKENS: u32 = 4096;
pub const GENERATION_TEMPERATURE: f32 = 0.7;
pub const FORMAT_TEMPERATURE: f32 = 0.3;

pub const GENERATION_INSTRUCTION: &str = "\
You are a senior React and TypeScript engineer. You receive a description of a UI
component and, sometimes, a reference image of the desired result.

Reply in exactly this shape:

COMPONENT_NAME: <PascalCaseName>

```tsx
/**
 * USAGE:
 * import <PascalCaseName> from './<PascalCaseName>';
 *
 * <<PascalCaseName> title=\"...\" />
 */
import React from 'react';

export interface <PascalCaseName>Props {
  // one prop per line, optional props marked with ?
}

// the complete component implementation
```

Rules:
- The first line is always COMPONENT_NAME followed by the PascalCase component name.
- Put everything in a single ```tsx fenced block.
- Export the props interface as <PascalCaseName>Props.
- Return a complete, runnable function component, never only a type declaration.
- End the block with `export default <PascalCaseName>;`.
- Use plain CSS class names or inline styles, no external UI libraries.
- When a reference image is attached, match its layout, hierarchy and colors.";

pub const FORMAT_INSTRUCTION: &str = "\
You rewrite rough descriptions of UI components into a concise component brief.

Rules:
- Keep the user's intent; never invent features they did not ask for.
- Cover, in short bullet points: purpose, layout, content, props, interactions, styling.
- Start with one sentence that reads \"Create a <Name> component ...\".
- Reply with the brief only. No preamble, no code, no markdown fences.";

/// Build the chat request for a component generation.
///
/// The user message always starts with the description; a reference image is
/// attached after it as a base64 PNG data URL.
pub fn build_generation_request(
    description: &str,
    reference_image: Option<&ReferenceImage>,
) -> ChatRequest {
    let mut content = vec![ContentPart::Text {
        text: description.trim().to_string(),
    }];

    if let Some(image) = reference_image {
        content.push(ContentPart::ImageUrl {
            image_url: ImageUrlData {
                url: png_data_url(&image.png),
            },
        });
    }

    ChatRequest {
        model: MODEL.to_string(),
        messages: vec![system_message(GENERATION_INSTRUCTION), user_message(content)],
        max_tokens: MAX_TOKENS,
        temperature: GENERATION_TEMPERATURE,
    }
}

/// Build the chat request that turns a rough description into a component brief.
pub fn build_format_request(text: &str) -> ChatRequest {
    ChatRequest {
        model: MODEL.to_string(),
        messages: vec![
            system_message(FORMAT_INSTRUCTION),
            user_message(vec![ContentPart::Text {
                text: text.trim().to_string(),
            }]),
        ],
        max_tokens: MAX_TOKENS,
        temperature: FORMAT_TEMPERATURE,
    }
}

pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

fn system_message(instruction: &str) -> ChatMessage {
    ChatMessage {
        role: "system".to_string(),
        content: vec![ContentPart::Text {
            text: instruction.to_string(),
        }],
    }
}

fn user_message(content: Vec<ContentPart>) -> ChatMessage {
    ChatMessage {
        role: "user".to_string(),
        content,
    }
}
