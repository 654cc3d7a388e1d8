use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Clock position of a speaker turn, written as `hh:mm:ss`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveTime);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimestampError {
    pub input: String,
    pub reason: &'static str,
}

impl Timestamp {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hours, minutes, seconds).map(Self)
    }

    /// Seconds elapsed since `00:00:00`
    pub fn seconds(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Add a duration, wrapping past `23:59:59` back to `00:00:00`.
    ///
    /// The second value reports whether the addition wrapped.
    pub fn add_wrapping(&self, duration: Duration) -> (Self, bool) {
        let delta = chrono::Duration::seconds(duration.as_secs() as i64);
        let (time, wrapped_secs) = self.0.overflowing_add_signed(delta);
        (Self(time), wrapped_secs != 0)
    }

    /// Time between two timestamps, `None` when `later` is not after `self`
    pub fn until(&self, later: &Timestamp) -> Option<Duration> {
        later.seconds()
            .checked_sub(self.seconds())
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs as u64))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| TimestampError {
            input: input.to_string(),
            reason,
        };

        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid("expected hh:mm:ss"));
        }
        if parts.iter().any(|part| part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit())) {
            return Err(invalid("each field must be two digits"));
        }

        let hours: u32 = parts[0].parse().map_err(|_| invalid("bad hours"))?;
        let minutes: u32 = parts[1].parse().map_err(|_| invalid("bad minutes"))?;
        let seconds: u32 = parts[2].parse().map_err(|_| invalid("bad seconds"))?;

        Self::from_hms(hours, minutes, seconds).ok_or_else(|| invalid("out of range for a 24-hour clock"))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}
