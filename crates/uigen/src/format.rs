use crate::llm::ChatClient;
use crate::prelude::{eprintln, println, *};
use crate::prompter::TerminalPrompter;
use crate::settings::{resolve_api_key, SettingsStore};
use uigen_core::prompt::build_format_request;

#[derive(Debug, clap::Args)]
pub struct FormatOptions {
    /// Rough description to rewrite
    #[arg(required = true)]
    description: Vec<String>,
}

/// Rewrite a rough description into a structured component brief.
pub async fn format_description(client: &ChatClient, text: &str) -> Result<String> {
    client.complete(&build_format_request(text)).await
}

pub async fn run(options: FormatOptions, global: crate::Global) -> Result<()> {
    let store = SettingsStore::new(global.config_dir.as_deref())?;
    let api_key = resolve_api_key(global.api_key.as_deref(), &store, &TerminalPrompter)?;
    let client = ChatClient::new(&global.api_base, &api_key)?;

    let text = options.description.join(" ");
    if global.verbose {
        eprintln!("Formatting: {text}");
        eprintln!();
    }

    println!("{}", format_description(&client, &text).await?);

    Ok(())
}
