use regex::Regex;
use tracing::debug;

use super::timestamp::Timestamp;
use crate::error::{CaptionError, Result};

/// Every speaker line ends with this sequence
const MARKER_SUFFIX: &str = "):";

/// Anchored at the end of the line; the greedy speaker group splits on the last " ("
const MARKER_PATTERN: &str = r"^(?P<speaker>.+) \((?P<time>[^()]*)\):$";

/// A line of the form `Name (hh:mm:ss):`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerMarker {
    pub speaker: String,
    pub time: Timestamp,
}

/// Recognises speaker lines inside a transcript
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    pattern: Regex,
}

impl MarkerMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(MARKER_PATTERN)?,
        })
    }

    /// Check a single line.
    ///
    /// Lines that do not end in `):` are body text and yield `Ok(None)`.
    /// Lines that do end in `):` must be well-formed markers, anything else
    /// is reported as a format error against `line_number`.
    pub fn detect(&self, line_number: usize, line: &str) -> Result<Option<SpeakerMarker>> {
        if !line.ends_with(MARKER_SUFFIX) {
            return Ok(None);
        }

        if !line.contains('(') {
            return Err(CaptionError::format(line_number, line, "missing '(' before timestamp"));
        }

        let captures = self.pattern.captures(line).ok_or_else(|| {
            CaptionError::format(line_number, line, "expected `Name (hh:mm:ss):`")
        })?;

        // Compared verbatim: "Alice" and "Alice " are different speakers
        let speaker = &captures["speaker"];
        if speaker.trim().is_empty() {
            return Err(CaptionError::format(line_number, line, "missing speaker name"));
        }

        let time = captures["time"]
            .parse::<Timestamp>()
            .map_err(|e| CaptionError::format(line_number, line, e.to_string()))?;

        debug!("🗣️  Speaker line {}: {} at {}", line_number, speaker, time);

        Ok(Some(SpeakerMarker {
            speaker: speaker.to_string(),
            time,
        }))
    }
}
