//! Reference images: whatever the user supplies is sent upstream as PNG.

use crate::prelude::*;
use std::io::Cursor;
use std::path::Path;
use uigen_core::prompt::ReferenceImage;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn load_reference_image(path: &Path) -> Result<ReferenceImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    to_png(&bytes)
}

/// PNG input passes through untouched; other formats are re-encoded.
pub fn to_png(bytes: &[u8]) -> Result<ReferenceImage> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        return Ok(ReferenceImage {
            png: bytes.to_vec(),
        });
    }

    let decoded = image::load_from_memory(bytes).context("Unsupported reference image")?;

    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("Failed to encode reference image as PNG")?;

    Ok(ReferenceImage { png })
}
