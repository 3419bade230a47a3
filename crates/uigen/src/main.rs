use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod format;
mod generate;
mod llm;
mod panel;
mod placement;
mod prelude;
mod prompter;
mod reference;
mod settings;
mod staging;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate React components from a natural-language description"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// OpenAI API key. Falls back to the settings file, then to a prompt.
    #[clap(long, env = "OPENAI_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Chat completions API base URL
    #[clap(long, env = "OPENAI_BASE_URL", global = true, default_value = llm::DEFAULT_API_BASE)]
    api_base: String,

    /// Workspace root used to place generated components
    #[clap(long, env = "UIGEN_WORKSPACE", global = true, default_value = ".")]
    workspace: PathBuf,

    /// Directory holding settings.toml (defaults to the user config directory)
    #[clap(long, env = "UIGEN_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "UIGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate a component and write it into the workspace
    Generate(crate::generate::GenerateOptions),

    /// Rewrite a rough description into a component brief
    Format(crate::format::FormatOptions),

    /// Serve a front-end panel over JSON lines on stdin/stdout
    Panel,

    /// Inspect or update the settings file
    #[clap(subcommand)]
    Config(crate::config::Commands),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::Format(options) => crate::format::run(options, app.global).await,
        SubCommands::Panel => crate::panel::run(app.global).await,
        SubCommands::Config(command) => crate::config::run(command, app.global),
    }
}
