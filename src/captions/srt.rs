use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::transcript::Timestamp;

/// One speaker caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Sequential number, starting at 1
    pub index: u32,
    /// When the speaker started talking
    pub start: Timestamp,
    /// When the next speaker took over
    pub end: Timestamp,
    /// Speaker name shown as the caption text
    pub speaker: String,
}

impl Cue {
    pub fn new(index: u32, start: Timestamp, end: Timestamp, speaker: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            speaker: speaker.into(),
        }
    }

    /// Length of the cue, `None` when the end is not after the start
    pub fn duration(&self) -> Option<Duration> {
        self.start.until(&self.end)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{} --> {}\n{}", self.index, self.start, self.end, self.speaker)
    }
}

/// Ordered list of cues ready to be written as SRT text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionDocument {
    cues: Vec<Cue>,
}

impl CaptionDocument {
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        Self { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// End of the last cue
    pub fn total_duration(&self) -> Duration {
        self.cues
            .last()
            .map(|cue| Duration::from_secs(cue.end.seconds() as u64))
            .unwrap_or(Duration::from_secs(0))
    }

    /// Render SRT text.
    ///
    /// Each cue contributes its three lines plus a blank separator, and every
    /// line is joined with a single `\n`.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.cues.len() * 4);

        for cue in &self.cues {
            lines.push(cue.to_string());
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Report suspicious cues without rejecting them
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (i, cue) in self.cues.iter().enumerate() {
            let expected = (i + 1) as u32;
            if cue.index != expected {
                issues.push(format!("Cue {}: expected index {}", cue.index, expected));
            }

            if cue.duration().is_none() {
                issues.push(format!(
                    "Cue {}: End time {} is not after start time {}",
                    cue.index, cue.end, cue.start
                ));
            }
        }

        issues
    }
}
