//! Interactive questions the shell may need answered.

use dialoguer::{Input, Password};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// `None` from either method means the user cancelled.
pub trait Prompter {
    fn ask_api_key(&self) -> Option<String>;

    /// Ask where to put components when no conventional folder exists.
    fn ask_output_folder(&self, root: &Path) -> Option<PathBuf>;
}

/// Asks on the terminal. Never asks when stdin is not a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask_api_key(&self) -> Option<String> {
        if !std::io::stdin().is_terminal() {
            return None;
        }

        let answer = Password::new()
            .with_prompt("OpenAI API key (leave empty to cancel)")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| log::debug!("API key prompt failed: {}", e))
            .ok()?;

        non_empty(&answer).map(str::to_string)
    }

    fn ask_output_folder(&self, root: &Path) -> Option<PathBuf> {
        if !std::io::stdin().is_terminal() {
            return None;
        }

        let answer: String = Input::new()
            .with_prompt(format!(
                "No components folder found under {}. Folder to use (leave empty for the default)",
                root.display()
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| log::debug!("Folder prompt failed: {}", e))
            .ok()?;

        folder_answer(root, &answer)
    }
}

fn non_empty(answer: &str) -> Option<&str> {
    let answer = answer.trim();
    (!answer.is_empty()).then_some(answer)
}

/// Relative answers are taken from the workspace root.
fn folder_answer(root: &Path, answer: &str) -> Option<PathBuf> {
    non_empty(answer).map(|folder| root.join(folder))
}

/// Never asks. Used when stdin carries the panel protocol.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn ask_api_key(&self) -> Option<String> {
        None
    }

    fn ask_output_folder(&self, _root: &Path) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_answers_cancel() {
        assert_eq!(non_empty("  sk-test \n"), Some("sk-test"));
        assert_eq!(non_empty(" \t"), None);
        assert_eq!(folder_answer(Path::new("/ws"), ""), None);
    }

    #[test]
    fn test_folder_answer_joins_root() {
        assert_eq!(
            folder_answer(Path::new("/ws"), " src/ui \n"),
            Some(PathBuf::from("/ws/src/ui"))
        );
        assert_eq!(
            folder_answer(Path::new("/ws"), "/abs/out"),
            Some(PathBuf::from("/abs/out"))
        );
    }
}
