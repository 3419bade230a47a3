use crate::prelude::{println, *};
use crate::settings::SettingsStore;
use colored::Colorize;

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the settings file location
    #[clap(name = "path")]
    Path,

    /// Store an API key in the settings file
    #[clap(name = "set-key")]
    SetKey {
        /// OpenAI API key
        key: String,
    },
}

pub fn run(command: Commands, global: crate::Global) -> Result<()> {
    let store = SettingsStore::new(global.config_dir.as_deref())?;

    match command {
        Commands::Path => {
            println!("{}", store.path().display());
        }
        Commands::SetKey { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err(eyre!("API key must not be empty"));
            }

            let mut settings = store.load()?;
            settings.api_key = Some(key.to_string());
            store.save(&settings)?;

            println!(
                "{} {}",
                "Saved API key to".green(),
                store.path().display()
            );
        }
    }

    Ok(())
}
