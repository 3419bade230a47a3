//! Output directory choice and the list of files written for a component.
//!
//! Probing goes through a caller-supplied `is_dir` so the decision stays
//! testable without touching a real filesystem.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::response::GenerationResult;
use crate::scaffold::{
    component_file_name, mock_file_name, story_file_name, ScaffoldFiles, BARREL_FILE_NAME,
};

/// Probed in this order, relative to the workspace root.
pub const CONVENTIONAL_DIRS: [&str; 3] = ["src/components", "src/app/components", "components"];

/// Created at the workspace root when nothing else applies.
pub const DEFAULT_DIR: &str = "components";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Folder the user asked for. May not exist yet.
    Explicit(PathBuf),
    /// First conventional folder that exists.
    Conventional(PathBuf),
    /// Nothing found; the user has to pick, or accept [`default_output_dir`].
    AskUser,
}

pub fn resolve_placement(
    explicit: Option<&Path>,
    root: &Path,
    is_dir: impl Fn(&Path) -> bool,
) -> Placement {
    if let Some(path) = explicit {
        return Placement::Explicit(root.join(path));
    }

    CONVENTIONAL_DIRS
        .iter()
        .map(|dir| root.join(dir))
        .find(|dir| is_dir(dir))
        .map(Placement::Conventional)
        .unwrap_or(Placement::AskUser)
}

pub fn default_output_dir(root: &Path) -> PathBuf {
    root.join(DEFAULT_DIR)
}

/// Folder placement would use without asking: first conventional folder,
/// else the default one.
pub fn suggest_output_dir(root: &Path, is_dir: impl Fn(&Path) -> bool) -> PathBuf {
    match resolve_placement(None, root, is_dir) {
        Placement::Explicit(dir) | Placement::Conventional(dir) => dir,
        Placement::AskUser => default_output_dir(root),
    }
}

/// Component files live in a folder named after the component.
pub fn component_dir(output_dir: &Path, component: &str) -> PathBuf {
    output_dir.join(component)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub file_name: String,
    pub contents: String,
}

/// Files to write, main component first.
pub fn plan_files(result: &GenerationResult, scaffold: &ScaffoldFiles) -> Vec<PlannedFile> {
    let name = &result.component_name;
    let mut files = vec![
        PlannedFile {
            file_name: component_file_name(name),
            contents: with_trailing_newline(&result.component_code),
        },
        PlannedFile {
            file_name: BARREL_FILE_NAME.to_string(),
            contents: scaffold.barrel.clone(),
        },
    ];

    if let Some(story) = &scaffold.story {
        files.push(PlannedFile {
            file_name: story_file_name(name),
            contents: story.clone(),
        });
    }

    if let Some(mock) = &scaffold.mock_data {
        files.push(PlannedFile {
            file_name: mock_file_name(name),
            contents: mock.clone(),
        });
    }

    files
}

fn with_trailing_newline(code: &str) -> String {
    let mut code = code.trim_end().to_string();
    code.push('\n');
    code
}
