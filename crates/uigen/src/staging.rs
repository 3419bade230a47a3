use crate::prelude::*;
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Scratch directory for reference images received from the panel.
///
/// Everything staged here is removed when the value is dropped, on every
/// exit path of the owning session.
#[derive(Debug)]
pub struct ImageStaging {
    dir: Option<tempfile::TempDir>,
    next: Cell<usize>,
}

impl ImageStaging {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("uigen-images-")
            .tempdir()
            .context("Failed to create image staging directory")?;

        log::debug!("Staging images in {}", dir.path().display());

        Ok(Self {
            dir: Some(dir),
            next: Cell::new(0),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(|dir| dir.path())
    }

    /// Write `bytes` to a new file in the staging directory.
    pub fn stage(&self, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.path().ok_or_eyre("Image staging directory is closed")?;

        let index = self.next.get();
        self.next.set(index + 1);

        let path = dir.join(format!("reference-{index}"));
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to stage image at {}", path.display()))?;

        Ok(path)
    }

    /// Remove the staging directory now instead of on drop.
    pub fn close(mut self) {
        self.cleanup();
    }

    fn cleanup(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                log::warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for ImageStaging {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_and_cleanup() {
        let staging = ImageStaging::new().unwrap();
        let dir = staging.path().unwrap().to_path_buf();

        let first = staging.stage(&[1, 2, 3]).unwrap();
        let second = staging.stage(&[4]).unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), vec![1, 2, 3]);
        assert!(first.starts_with(&dir));

        drop(staging);
        assert!(!dir.exists());
    }

    #[test]
    fn test_explicit_close() {
        let staging = ImageStaging::new().unwrap();
        let dir = staging.path().unwrap().to_path_buf();
        staging.stage(&[0]).unwrap();

        staging.close();
        assert!(!dir.exists());
    }
}
