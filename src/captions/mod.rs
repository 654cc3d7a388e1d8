pub mod srt;

pub use srt::{CaptionDocument, Cue};
