use crate::llm::ChatClient;
use crate::placement::{ensure_workspace, resolve_output_dir, write_component_files, WrittenComponent};
use crate::prelude::{eprintln, println, *};
use crate::prompter::{Prompter, TerminalPrompter};
use crate::settings::{resolve_api_key, SettingsStore};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uigen_core::placement::plan_files;
use uigen_core::prompt::{build_generation_request, GenerationRequest};
use uigen_core::response::{parse_response, GenerationResult};
use uigen_core::scaffold::{generate_scaffold, ScaffoldOptions};

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// What the component should look like and do
    #[arg(required = true)]
    description: Vec<String>,

    /// Screenshot or mockup to follow (PNG, JPEG)
    #[arg(long)]
    image: Option<PathBuf>,

    /// Also write a Storybook story
    #[arg(long)]
    storybook: bool,

    /// Also write a mock-data module
    #[arg(long)]
    mock_data: bool,

    /// Output folder, relative to the workspace root
    #[arg(short, long, env = "UIGEN_OUTPUT")]
    output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    component_name: &'a str,
    directory: &'a Path,
    files: &'a [PathBuf],
}

/// Ask the model for a component and parse the reply.
pub async fn request_generation(
    client: &ChatClient,
    request: &GenerationRequest,
) -> Result<GenerationResult> {
    let chat = build_generation_request(&request.description, request.reference_image.as_ref());
    let reply = client.complete(&chat).await?;

    Ok(parse_response(&reply, &request.description))
}

/// Scaffold and write a parsed component into the workspace.
pub fn write_component(
    result: &GenerationResult,
    request: &GenerationRequest,
    workspace: &Path,
    prompter: &dyn Prompter,
) -> Result<WrittenComponent> {
    let scaffold = generate_scaffold(
        &result.component_name,
        &result.component_code,
        ScaffoldOptions {
            storybook: request.want_storybook,
            mock_data: request.want_mock_data,
        },
    );
    let files = plan_files(result, &scaffold);

    let output_dir = resolve_output_dir(request.output_path.as_deref(), workspace, prompter)?;
    write_component_files(&output_dir, &result.component_name, &files)
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let workspace = ensure_workspace(&global.workspace)?;
    let store = SettingsStore::new(global.config_dir.as_deref())?;
    let api_key = resolve_api_key(global.api_key.as_deref(), &store, &TerminalPrompter)?;

    let reference_image = options
        .image
        .as_deref()
        .map(crate::reference::load_reference_image)
        .transpose()?;

    let request = GenerationRequest {
        description: options.description.join(" "),
        reference_image,
        want_storybook: options.storybook,
        want_mock_data: options.mock_data,
        output_path: options.output,
    };

    if global.verbose {
        eprintln!("Workspace: {}", workspace.display());
        eprintln!("API base: {}", global.api_base);
        eprintln!("Description: {}", request.description);
        eprintln!(
            "Reference image: {}",
            if request.reference_image.is_some() { "yes" } else { "no" }
        );
        eprintln!();
    }

    let client = ChatClient::new(&global.api_base, &api_key)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message("Generating component...");

    let result = request_generation(&client, &request).await;
    spinner.finish_and_clear();
    let result = result?;

    let written = match write_component(&result, &request, &workspace, &TerminalPrompter) {
        Ok(written) => written,
        Err(e) => {
            // Keep the generated code reachable when it could not be saved.
            println!("{}", result.component_code);
            return Err(e);
        }
    };

    if options.json {
        let output = GenerateOutput {
            component_name: &result.component_name,
            directory: &written.directory,
            files: &written.files,
        };
        let json_output = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!(
        "\nCreated {} in {}:\n",
        result.component_name.bold().green(),
        written.directory.display().to_string().bright_white()
    );

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["File".bold().cyan(), "Bytes".bold().cyan()]);
    for path in &written.files {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or_default();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        table.add_row(prettytable::row![name.bright_yellow(), size]);
    }
    table.printstd();

    Ok(())
}
