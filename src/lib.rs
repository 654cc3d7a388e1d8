//! Speaker Captions
//!
//! Turns a speaker-labeled transcript (`Name (hh:mm:ss):` turn markers) into an
//! SRT file with one caption per speaker turn.

pub mod captions;
pub mod config;
pub mod error;
pub mod files;
pub mod transcript;

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

// Re-export main types for easy access
pub use crate::captions::{CaptionDocument, Cue};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{CaptionError, Result};
pub use crate::transcript::{SpeakerMarker, Timestamp, TranscriptParser};

/// Outcome of a file conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub lines_read: usize,
    pub cues_written: usize,
    /// End time of the last caption
    pub total_duration: Duration,
    pub output_path: PathBuf,
}

/// Parse transcript text into a caption document
pub fn convert_text(text: &str, config: &Config) -> Result<CaptionDocument> {
    let parser = TranscriptParser::new(config.final_cue_duration())?;
    let document = CaptionDocument::from_cues(parser.parse(text)?);

    for issue in document.validate() {
        warn!("⚠️  {}", issue);
    }

    Ok(document)
}

/// Validate paths, convert `input` and write the captions to `output`.
///
/// Nothing is written unless every cue was computed.
pub async fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<ConversionSummary> {
    config.validate()?;
    files::validate_paths(input, output, config)?;

    let text = files::read_transcript(input).await?;
    let lines_read = text.lines().count();
    info!("🔍 Parsing {} lines from {}", lines_read, input.display());

    let document = convert_text(&text, config)?;
    files::write_captions(output, &document.render()).await?;

    let total_duration = document.total_duration();
    info!(
        "✅ Wrote {} captions ({}s) to {}",
        document.len(),
        total_duration.as_secs(),
        output.display()
    );

    Ok(ConversionSummary {
        lines_read,
        cues_written: document.len(),
        total_duration,
        output_path: output.to_path_buf(),
    })
}
