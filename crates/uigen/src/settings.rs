use crate::prelude::*;
use crate::prompter::Prompter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.toml";

/// Persisted user settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Reads and writes `settings.toml`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store inside `dir`, or inside `<config dir>/uigen` when `dir` is `None`.
    pub fn new(dir: Option<&Path>) -> Result<Self> {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs_next::config_dir()
                .ok_or_else(|| Error::Settings("Unable to determine config directory".into()))?
                .join("uigen"),
        };

        Ok(Self {
            path: dir.join(SETTINGS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as empty settings.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::Settings(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            Error::Settings(format!("Failed to parse {}: {}", self.path.display(), e)).into()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Settings(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let contents = toml::to_string_pretty(settings)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        fs::write(&self.path, contents).map_err(|e| {
            Error::Settings(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        log::debug!("Saved settings to {}", self.path.display());

        Ok(())
    }
}

/// Find the API key: explicit value, then settings file, then the prompter.
///
/// A prompted key is written back to the settings file. Cancelling the
/// prompt fails the current request with [`Error::MissingCredential`].
pub fn resolve_api_key(
    explicit: Option<&str>,
    store: &SettingsStore,
    prompter: &dyn Prompter,
) -> Result<String> {
    if let Some(key) = explicit.map(str::trim).filter(|key| !key.is_empty()) {
        return Ok(key.to_string());
    }

    let mut settings = store.load()?;
    if let Some(key) = settings.api_key.as_deref().filter(|key| !key.is_empty()) {
        return Ok(key.to_string());
    }

    let key = prompter
        .ask_api_key()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(Error::MissingCredential)?;

    settings.api_key = Some(key.clone());
    store.save(&settings)?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::testing::Scripted;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(Some(dir.path())).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        let store = SettingsStore::new(Some(&nested)).unwrap();

        let settings = Settings {
            api_key: Some("sk-test".to_string()),
        };
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), settings);
        assert_eq!(
            fs::read_to_string(nested.join(SETTINGS_FILE)).unwrap(),
            "api_key = \"sk-test\"\n"
        );
    }

    #[test]
    fn test_explicit_key_wins() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save(&Settings {
                api_key: Some("stored".to_string()),
            })
            .unwrap();

        let key = resolve_api_key(Some("explicit"), &store, &Scripted::cancel()).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn test_stored_key_used_without_prompting() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .save(&Settings {
                api_key: Some("stored".to_string()),
            })
            .unwrap();

        let prompter = Scripted::cancel();
        assert_eq!(resolve_api_key(None, &store, &prompter).unwrap(), "stored");
        assert_eq!(prompter.asked_for_key(), 0);
    }

    #[test]
    fn test_prompted_key_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let prompter = Scripted::with_key(" sk-prompted \n");
        assert_eq!(resolve_api_key(None, &store, &prompter).unwrap(), "sk-prompted");
        assert_eq!(store.load().unwrap().api_key.as_deref(), Some("sk-prompted"));
    }

    #[test]
    fn test_cancelled_prompt_is_missing_credential() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let err = resolve_api_key(Some("  "), &store, &Scripted::cancel()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingCredential)
        ));
        assert!(!store.path().exists());
    }
}
