use std::path::PathBuf;

/// Result type for caption conversion
pub type Result<T> = std::result::Result<T, CaptionError>;

/// Error types for transcript parsing and caption output
#[derive(thiserror::Error, Debug)]
pub enum CaptionError {
    #[error("Usage: speaker-captions <input file> <output file>")]
    MissingArguments,

    #[error("Input file must be a .txt file: {}", .0.display())]
    InvalidInputExtension(PathBuf),

    #[error("Output file must be a .srt file: {}", .0.display())]
    InvalidOutputExtension(PathBuf),

    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error("Malformed speaker line {line}: {reason} ({content:?})")]
    Format {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("No speaker markers found in transcript")]
    NoSpeakerMarkers,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaptionError {
    /// Whether the error was caused by the invocation rather than the transcript
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CaptionError::MissingArguments
                | CaptionError::InvalidInputExtension(_)
                | CaptionError::InvalidOutputExtension(_)
                | CaptionError::InputNotFound(_)
                | CaptionError::OutputDirNotFound(_)
        )
    }

    pub(crate) fn format(line: usize, content: &str, reason: impl Into<String>) -> Self {
        CaptionError::Format {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
