use crate::prelude::*;
use uigen_core::prompt::{extract_reply, ChatRequest, ChatResponse};

/// Default OpenAI-compatible API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Authenticated client for the chat completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    api_base: String,
}

impl ChatClient {
    pub fn new(api_base: &str, api_key: &str) -> Result<Self> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|e| eyre!("Invalid header value: {}", e))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    /// Send one chat request and return the first reply.
    ///
    /// Transport failures, non-2xx statuses and empty replies all surface as
    /// [`Error::Upstream`].
    pub async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = self.completions_url();
        log::debug!("POST {} (model {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("[{}]: {}", status, body)).into());
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse response: {}", e)))?;

        extract_reply(&body)
            .map(str::to_string)
            .ok_or_else(|| Error::Upstream("Response contained no content".into()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url() {
        let client = ChatClient::new("http://localhost:8080/v1/", "sk-test").unwrap();
        assert_eq!(
            client.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );

        let client = ChatClient::new(DEFAULT_API_BASE, "sk-test").unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert!(ChatClient::new(DEFAULT_API_BASE, "bad\nkey").is_err());
    }
}
