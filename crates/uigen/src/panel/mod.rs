//! JSON-lines bridge driven by a front-end panel.

mod stdio;

use crate::generate::{request_generation, write_component};
use crate::llm::ChatClient;
use crate::placement::ensure_workspace;
use crate::prelude::*;
use crate::prompter::NonInteractive;
use crate::reference::load_reference_image;
use crate::settings::{resolve_api_key, SettingsStore};
use crate::staging::ImageStaging;
use std::path::PathBuf;
use uigen_core::placement::suggest_output_dir;
use uigen_core::prompt::{GenerationRequest, ReferenceImage};
use uigen_core::protocol::{decode_image_payload, parse_request, PanelRequest, PanelResponse};

/// State shared by every message of one panel connection.
pub struct Session {
    global: crate::Global,
    store: SettingsStore,
    staging: ImageStaging,
}

impl Session {
    pub fn new(global: crate::Global) -> Result<Self> {
        let store = SettingsStore::new(global.config_dir.as_deref())?;
        let staging = ImageStaging::new()?;

        Ok(Self {
            global,
            store,
            staging,
        })
    }

    pub fn close(self) {
        self.staging.close();
    }

    /// stdin carries the protocol, so nothing here may prompt.
    fn client(&self) -> Result<ChatClient> {
        let api_key = resolve_api_key(self.global.api_key.as_deref(), &self.store, &NonInteractive)?;
        ChatClient::new(&self.global.api_base, &api_key)
    }

    fn reference_image(&self, payload: &str) -> Result<ReferenceImage> {
        let bytes = decode_image_payload(payload)?;
        let staged = self.staging.stage(&bytes)?;
        load_reference_image(&staged)
    }
}

pub async fn run(global: crate::Global) -> Result<()> {
    let session = Session::new(global)?;
    let outcome = stdio::run_stdio(&session).await;
    session.close();
    outcome
}

/// Answer one panel message. A generation may produce two events: the
/// `result`, then either `files-created` or an `error` from the write.
pub async fn handle_message(line: &str, session: &Session) -> Vec<PanelResponse> {
    let request = match parse_request(line) {
        Ok(request) => request,
        Err(e) => return vec![PanelResponse::error(e.to_string())],
    };

    match request {
        PanelRequest::GenerateComponent {
            text,
            image,
            storybook,
            mock_data,
            output_path,
        } => {
            let request = GenerationRequest {
                description: text,
                reference_image: None,
                want_storybook: storybook,
                want_mock_data: mock_data,
                output_path: output_path.map(PathBuf::from),
            };
            generate(request, image.as_deref(), session).await
        }
        PanelRequest::BrowseFolder => vec![browse_folder(session)],
        PanelRequest::FormatDescription { text } => vec![format_description(&text, session).await],
    }
}

async fn generate(
    mut request: GenerationRequest,
    image: Option<&str>,
    session: &Session,
) -> Vec<PanelResponse> {
    let (client, workspace) = match prepare(&mut request, image, session) {
        Ok(prepared) => prepared,
        Err(e) => return vec![PanelResponse::error(format!("{e:#}"))],
    };

    let result = match request_generation(&client, &request).await {
        Ok(result) => result,
        Err(e) => return vec![PanelResponse::error(format!("{e:#}"))],
    };

    let mut responses = vec![PanelResponse::from(&result)];
    match write_component(&result, &request, &workspace, &NonInteractive) {
        Ok(written) => responses.push(PanelResponse::FilesCreated {
            directory: written.directory.display().to_string(),
            files: written
                .files
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        }),
        Err(e) => responses.push(PanelResponse::error(format!("{e:#}"))),
    }

    responses
}

/// Everything that can fail before the model is called.
fn prepare(
    request: &mut GenerationRequest,
    image: Option<&str>,
    session: &Session,
) -> Result<(ChatClient, PathBuf)> {
    let workspace = ensure_workspace(&session.global.workspace)?;
    let client = session.client()?;
    request.reference_image = image
        .map(|payload| session.reference_image(payload))
        .transpose()?;

    Ok((client, workspace))
}

fn browse_folder(session: &Session) -> PanelResponse {
    match ensure_workspace(&session.global.workspace) {
        Ok(root) => PanelResponse::FolderSelected {
            path: suggest_output_dir(&root, |path| path.is_dir())
                .display()
                .to_string(),
        },
        Err(e) => PanelResponse::error(format!("{e:#}")),
    }
}

async fn format_description(text: &str, session: &Session) -> PanelResponse {
    let formatted = match session.client() {
        Ok(client) => crate::format::format_description(&client, text).await,
        Err(e) => Err(e),
    };

    match formatted {
        Ok(text) => PanelResponse::DescriptionFormatted { text },
        Err(e) => PanelResponse::error(format!("{e:#}")),
    }
}
