pub mod marker;
pub mod parser;
pub mod timestamp;

pub use marker::{MarkerMatcher, SpeakerMarker};
pub use parser::TranscriptParser;
pub use timestamp::{Timestamp, TimestampError};
