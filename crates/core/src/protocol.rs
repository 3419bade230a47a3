//! Messages exchanged between a front-end panel and the host, one JSON
//! object per line.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::response::GenerationResult;

/// Panel to host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PanelRequest {
    #[serde(rename_all = "camelCase")]
    GenerateComponent {
        text: String,
        /// `data:` URL or bare base64.
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        storybook: bool,
        #[serde(default)]
        mock_data: bool,
        #[serde(default)]
        output_path: Option<String>,
    },
    BrowseFolder,
    FormatDescription {
        text: String,
    },
}

/// Host to panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PanelResponse {
    #[serde(rename_all = "camelCase")]
    Result {
        full_response: String,
        component_name: String,
        component_code: String,
    },
    Error {
        message: String,
    },
    FolderSelected {
        path: String,
    },
    DescriptionFormatted {
        text: String,
    },
    FilesCreated {
        directory: String,
        files: Vec<String>,
    },
}

impl From<&GenerationResult> for PanelResponse {
    fn from(result: &GenerationResult) -> Self {
        PanelResponse::Result {
            full_response: result.raw_response.clone(),
            component_name: result.component_name.clone(),
            component_code: result.component_code.clone(),
        }
    }
}

impl PanelResponse {
    pub fn error(message: impl Into<String>) -> Self {
        PanelResponse::Error {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid panel message: {0}")]
    InvalidMessage(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),
}

pub fn parse_request(line: &str) -> Result<PanelRequest, ProtocolError> {
    serde_json::from_str(line).map_err(|e| ProtocolError::InvalidMessage(e.to_string()))
}

/// Decode an image sent as `data:<mime>;base64,<payload>` or bare base64.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, ProtocolError> {
    let payload = payload.trim();
    let encoded = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest
                .split_once(',')
                .ok_or_else(|| ProtocolError::InvalidImage("data URL without ','".to_string()))?;
            if !meta.ends_with(";base64") {
                return Err(ProtocolError::InvalidImage(
                    "only base64 data URLs are supported".to_string(),
                ));
            }
            data
        }
        None => payload,
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ProtocolError::InvalidImage(e.to_string()))?;

    if bytes.is_empty() {
        return Err(ProtocolError::InvalidImage("empty image".to_string()));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_generate_component() {
        let request = parse_request(
            r#"{"type":"generate-component","text":"A hero","image":"data:image/png;base64,AQID","storybook":true,"mockData":true,"outputPath":"src/ui"}"#,
        )
        .unwrap();

        assert_eq!(
            request,
            PanelRequest::GenerateComponent {
                text: "A hero".to_string(),
                image: Some("data:image/png;base64,AQID".to_string()),
                storybook: true,
                mock_data: true,
                output_path: Some("src/ui".to_string()),
            }
        );
    }

    #[test]
    fn test_generate_component_flags_default_to_off() {
        let request = parse_request(r#"{"type":"generate-component","text":"A hero"}"#).unwrap();

        assert_eq!(
            request,
            PanelRequest::GenerateComponent {
                text: "A hero".to_string(),
                image: None,
                storybook: false,
                mock_data: false,
                output_path: None,
            }
        );
    }

    #[test]
    fn test_parse_other_requests() {
        assert_eq!(
            parse_request(r#"{"type":"browse-folder"}"#).unwrap(),
            PanelRequest::BrowseFolder
        );
        assert_eq!(
            parse_request(r#"{"type":"format-description","text":"card"}"#).unwrap(),
            PanelRequest::FormatDescription {
                text: "card".to_string()
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_request(r#"{"type":"launch-rockets"}"#),
            Err(ProtocolError::InvalidMessage(_))
        ));
        assert!(matches!(
            parse_request("not json"),
            Err(ProtocolError::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_response_shapes() {
        let result = GenerationResult {
            component_name: "Card".to_string(),
            component_code: "code".to_string(),
            raw_response: "raw".to_string(),
        };

        assert_eq!(
            serde_json::to_value(PanelResponse::from(&result)).unwrap(),
            json!({"type":"result","fullResponse":"raw","componentName":"Card","componentCode":"code"})
        );
        assert_eq!(
            serde_json::to_value(PanelResponse::error("boom")).unwrap(),
            json!({"type":"error","message":"boom"})
        );
        assert_eq!(
            serde_json::to_value(PanelResponse::FolderSelected {
                path: "/ws/components".to_string()
            })
            .unwrap(),
            json!({"type":"folder-selected","path":"/ws/components"})
        );
        assert_eq!(
            serde_json::to_value(PanelResponse::DescriptionFormatted {
                text: "brief".to_string()
            })
            .unwrap(),
            json!({"type":"description-formatted","text":"brief"})
        );
    }

    #[test]
    fn test_decode_image_payload() {
        assert_eq!(
            decode_image_payload("data:image/png;base64,AQID").unwrap(),
            vec![1, 2, 3]
        );
        assert_eq!(decode_image_payload("AQID").unwrap(), vec![1, 2, 3]);
        assert!(decode_image_payload("data:image/png,raw").is_err());
        assert!(decode_image_payload("data:image/png;base64").is_err());
        assert!(decode_image_payload("!!!").is_err());
        assert!(decode_image_payload("").is_err());
    }
}
