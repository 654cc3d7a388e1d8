use std::time::Duration;
use tracing::{debug, warn};

use super::marker::{MarkerMatcher, SpeakerMarker};
use super::timestamp::Timestamp;
use crate::captions::Cue;
use crate::error::{CaptionError, Result};

/// The speaker currently holding the floor
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenSegment {
    speaker: String,
    start: Timestamp,
}

/// Scan state threaded through the fold, replaced on every line
#[derive(Debug, Default)]
struct ScanState {
    open: Option<OpenSegment>,
    cues: Vec<Cue>,
}

impl ScanState {
    fn next_index(&self) -> u32 {
        self.cues.len() as u32 + 1
    }

    /// Apply one speaker marker; a different speaker closes the open segment
    fn on_marker(self, marker: SpeakerMarker) -> Self {
        let ScanState { open, mut cues } = self;

        match open {
            Some(segment) if segment.speaker == marker.speaker => ScanState {
                open: Some(segment),
                cues,
            },
            previous => {
                if let Some(segment) = previous {
                    let cue = Cue::new(cues.len() as u32 + 1, segment.start, marker.time, segment.speaker);
                    debug!("🎬 Cue {}: {} --> {} {}", cue.index, cue.start, cue.end, cue.speaker);
                    cues.push(cue);
                }

                ScanState {
                    open: Some(OpenSegment {
                        speaker: marker.speaker,
                        start: marker.time,
                    }),
                    cues,
                }
            }
        }
    }

    /// Close the last segment at `start + final_duration`
    fn finish(self, final_duration: Duration) -> Result<Vec<Cue>> {
        let index = self.next_index();
        let ScanState { open, mut cues } = self;
        let segment = open.ok_or(CaptionError::NoSpeakerMarkers)?;

        let (end, wrapped) = segment.start.add_wrapping(final_duration);
        if wrapped {
            warn!(
                "⚠️  Final cue for {} wraps past midnight ({} --> {})",
                segment.speaker, segment.start, end
            );
        }

        let cue = Cue::new(index, segment.start, end, segment.speaker);
        debug!("🎬 Cue {}: {} --> {} {}", cue.index, cue.start, cue.end, cue.speaker);
        cues.push(cue);

        Ok(cues)
    }
}

/// Turns a speaker-labeled transcript into speaker cues
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    matcher: MarkerMatcher,
    final_cue_duration: Duration,
}

impl TranscriptParser {
    pub fn new(final_cue_duration: Duration) -> Result<Self> {
        Ok(Self {
            matcher: MarkerMatcher::new()?,
            final_cue_duration,
        })
    }

    /// Parse a whole transcript buffer; both `\n` and `\r\n` line endings work
    pub fn parse(&self, text: &str) -> Result<Vec<Cue>> {
        self.parse_lines(text.lines())
    }

    /// Single forward pass over `lines`.
    ///
    /// A cue is emitted whenever the speaker changes, and once more for the
    /// segment still open after the last line.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Vec<Cue>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut line_count = 0;

        let state = lines
            .into_iter()
            .enumerate()
            .try_fold(ScanState::default(), |state, (i, line)| {
                line_count = i + 1;
                Ok::<_, CaptionError>(match self.matcher.detect(i + 1, line)? {
                    Some(marker) => state.on_marker(marker),
                    None => state,
                })
            })?;

        let cues = state.finish(self.final_cue_duration)?;
        debug!("📝 Parsed {} lines into {} cues", line_count, cues.len());

        Ok(cues)
    }
}
