#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing API key: set OPENAI_API_KEY or run `uigen config set-key <KEY>`")]
    MissingCredential,

    #[error("Chat completion failed: {0}")]
    Upstream(String),

    #[error("No workspace open: {0}")]
    NoWorkspace(String),

    #[error("Settings error: {0}")]
    Settings(String),
}
