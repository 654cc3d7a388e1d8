use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::error::{CaptionError, Result};

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == extension)
        .unwrap_or(false)
}

/// Check the invocation before any parsing happens
pub fn validate_paths(input: &Path, output: &Path, config: &Config) -> Result<()> {
    if !has_extension(input, &config.input_extension) {
        return Err(CaptionError::InvalidInputExtension(input.to_path_buf()));
    }

    if !has_extension(output, &config.output_extension) {
        return Err(CaptionError::InvalidOutputExtension(output.to_path_buf()));
    }

    if !input.exists() {
        return Err(CaptionError::InputNotFound(input.to_path_buf()));
    }

    // A bare file name lives in the current directory
    let output_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !output_dir.is_dir() {
        return Err(CaptionError::OutputDirNotFound(output_dir.to_path_buf()));
    }

    debug!("✅ Paths validated: {} -> {}", input.display(), output.display());
    Ok(())
}

pub async fn read_transcript(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path).await?;
    debug!("📄 Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

pub async fn write_captions(path: &Path, text: &str) -> Result<()> {
    tokio::fs::write(path, text).await?;
    debug!("💾 Wrote captions to {}", path.display());
    Ok(())
}
