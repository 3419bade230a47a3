use crate::prelude::*;
use crate::prompter::Prompter;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uigen_core::placement::{
    component_dir, default_output_dir, resolve_placement, Placement, PlannedFile,
};

/// Fails with [`Error::NoWorkspace`] unless `root` is an existing directory.
pub fn ensure_workspace(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::NoWorkspace(root.display().to_string()).into());
    }

    Ok(root.to_path_buf())
}

/// Pick the output folder and make sure it exists.
///
/// Without an explicit folder or a conventional one, the prompter is asked;
/// a cancelled question falls back to `<root>/components`.
pub fn resolve_output_dir(
    explicit: Option<&Path>,
    root: &Path,
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    let dir = match resolve_placement(explicit, root, |path| path.is_dir()) {
        Placement::Explicit(dir) | Placement::Conventional(dir) => dir,
        Placement::AskUser => prompter
            .ask_output_folder(root)
            .unwrap_or_else(|| default_output_dir(root)),
    };

    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    log::debug!("Writing components under {}", dir.display());

    Ok(dir)
}

/// Where a component ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenComponent {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Write `files` into `<output_dir>/<component>/`, overwriting existing files.
pub fn write_component_files(
    output_dir: &Path,
    component: &str,
    files: &[PlannedFile],
) -> Result<WrittenComponent> {
    let directory = component_dir(output_dir, component);
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = directory.join(&file.file_name);
        fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(WrittenComponent {
        directory,
        files: written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompter::testing::Scripted;
    use crate::prompter::NonInteractive;
    use tempfile::TempDir;

    #[test]
    fn test_missing_workspace() {
        let dir = TempDir::new().unwrap();
        let err = ensure_workspace(&dir.path().join("nope")).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NoWorkspace(_))
        ));
        assert!(ensure_workspace(dir.path()).is_ok());
    }

    #[test]
    fn test_existing_conventional_folder() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();

        let out = resolve_output_dir(None, dir.path(), &NonInteractive).unwrap();
        assert_eq!(out, dir.path().join("src/components"));
    }

    #[test]
    fn test_cancelled_choice_creates_default_folder() {
        let dir = TempDir::new().unwrap();

        let out = resolve_output_dir(None, dir.path(), &NonInteractive).unwrap();
        assert_eq!(out, dir.path().join("components"));
        assert!(out.is_dir());
    }

    #[test]
    fn test_user_chosen_folder() {
        let dir = TempDir::new().unwrap();

        let out = resolve_output_dir(None, dir.path(), &Scripted::with_folder("ui")).unwrap();
        assert_eq!(out, dir.path().join("ui"));
        assert!(out.is_dir());
    }

    #[test]
    fn test_explicit_folder_is_created() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("components")).unwrap();

        let out = resolve_output_dir(
            Some(Path::new("app/widgets")),
            dir.path(),
            &Scripted::with_folder("ignored"),
        )
        .unwrap();
        assert_eq!(out, dir.path().join("app/widgets"));
        assert!(out.is_dir());
    }

    #[test]
    fn test_write_component_files() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            PlannedFile {
                file_name: "Card.tsx".to_string(),
                contents: "export default function Card() {}\n".to_string(),
            },
            PlannedFile {
                file_name: "index.ts".to_string(),
                contents: "export { default } from './Card';\n".to_string(),
            },
        ];

        let written = write_component_files(dir.path(), "Card", &files).unwrap();

        assert_eq!(written.directory, dir.path().join("Card"));
        assert_eq!(
            written.files,
            vec![
                dir.path().join("Card/Card.tsx"),
                dir.path().join("Card/index.ts")
            ]
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("Card/index.ts")).unwrap(),
            "export { default } from './Card';\n"
        );
    }
}
