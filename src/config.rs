use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CaptionError, Result};

const FINAL_DURATION_ENV: &str = "SPEAKER_CAPTIONS_FINAL_DURATION";
const LOG_LEVEL_ENV: &str = "SPEAKER_CAPTIONS_LOG_LEVEL";

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Runtime settings for a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Required extension of the transcript, without the dot
    pub input_extension: String,

    /// Required extension of the caption file, without the dot
    pub output_extension: String,

    /// How long the last speaker is assumed to talk, in seconds
    pub final_cue_duration_secs: u64,

    /// Log level used when no filter is given on the command line
    pub log_level: String,
}

impl Config {
    /// Defaults overridden by `SPEAKER_CAPTIONS_*` environment variables.
    ///
    /// Unusable values keep their default and are returned as warnings, so
    /// they can be logged once the subscriber is installed.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(value) = lookup(FINAL_DURATION_ENV) {
            match value.trim().parse::<u64>() {
                Ok(secs) => config.final_cue_duration_secs = secs,
                Err(e) => warnings.push(format!(
                    "Ignoring {}={:?}: {}, using {}s",
                    FINAL_DURATION_ENV, value, e, config.final_cue_duration_secs
                )),
            }
        }

        if let Some(log_level) = lookup(LOG_LEVEL_ENV) {
            if log_level.trim().is_empty() {
                warnings.push(format!("Ignoring empty {}", LOG_LEVEL_ENV));
            } else {
                config.log_level = log_level;
            }
        }

        (config, warnings)
    }

    pub fn final_cue_duration(&self) -> Duration {
        Duration::from_secs(self.final_cue_duration_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.final_cue_duration_secs == 0 {
            return Err(CaptionError::Config(
                "final cue duration must be greater than 0".to_string(),
            ));
        }

        if self.final_cue_duration_secs >= SECONDS_PER_DAY {
            return Err(CaptionError::Config(
                "final cue duration must be shorter than a day".to_string(),
            ));
        }

        for extension in [&self.input_extension, &self.output_extension] {
            if extension.is_empty() || extension.starts_with('.') {
                return Err(CaptionError::Config(format!(
                    "extension {:?} must be non-empty and given without a dot",
                    extension
                )));
            }
        }

        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "Speaker Captions Configuration:\n\
            - Input Extension: .{}\n\
            - Output Extension: .{}\n\
            - Final Cue Duration: {}s\n\
            - Log Level: {}",
            self.input_extension, self.output_extension, self.final_cue_duration_secs, self.log_level
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_extension: "txt".to_string(),
            output_extension: "srt".to_string(),
            final_cue_duration_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn with_final_cue_duration(mut self, secs: u64) -> Self {
        self.config.final_cue_duration_secs = secs;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn with_extensions(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.config.input_extension = input.into();
        self.config.output_extension = output.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_extension, "txt");
        assert_eq!(config.output_extension, "srt");
        assert_eq!(config.final_cue_duration(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_final_cue_duration(90)
            .with_log_level("debug")
            .build();

        assert_eq!(config.final_cue_duration_secs, 90);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.input_extension, "txt");
    }

    #[test]
    fn test_config_validation() {
        assert!(ConfigBuilder::new().with_final_cue_duration(0).build().validate().is_err());
        assert!(ConfigBuilder::new()
            .with_final_cue_duration(SECONDS_PER_DAY)
            .build()
            .validate()
            .is_err());
        assert!(ConfigBuilder::new()
            .with_extensions(".txt", "srt")
            .build()
            .validate()
            .is_err());
    }

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let (config, warnings) = Config::from_lookup(lookup_in(&[
            (FINAL_DURATION_ENV, "45"),
            (LOG_LEVEL_ENV, "debug"),
        ]));

        assert!(warnings.is_empty());
        assert_eq!(config.final_cue_duration_secs, 45);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_without_variables_is_default() {
        let (config, warnings) = Config::from_lookup(lookup_in(&[]));
        assert!(warnings.is_empty());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_env_value_falls_back_with_warning() {
        let (config, warnings) = Config::from_lookup(lookup_in(&[
            (FINAL_DURATION_ENV, "abc"),
            (LOG_LEVEL_ENV, " "),
        ]));

        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Ignoring SPEAKER_CAPTIONS_FINAL_DURATION"));
        assert!(warnings[1].contains(LOG_LEVEL_ENV));
    }

    #[test]
    fn test_builder_overrides_env() {
        let (config, _) = Config::from_lookup(lookup_in(&[(FINAL_DURATION_ENV, "45")]));
        let config = ConfigBuilder::from_config(config)
            .with_final_cue_duration(90)
            .build();

        assert_eq!(config.final_cue_duration_secs, 90);
    }

    #[test]
    fn test_summary_mentions_settings() {
        let summary = Config::default().summary();
        assert!(summary.contains(".txt"));
        assert!(summary.contains("60s"));
    }
}
