use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, warn};

use speaker_captions::{convert_file, CaptionError, Config, ConfigBuilder, ConversionSummary};

#[tokio::main]
async fn main() -> ExitCode {
    let matches = Command::new("speaker-captions")
        .version(env!("CARGO_PKG_VERSION"))
        .author("TigreRoll")
        .about("Convert a speaker-labeled transcript into SRT speaker captions")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Transcript to read (.txt)")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Caption file to write (.srt)")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("final-duration")
                .long("final-duration")
                .value_name("SECONDS")
                .help("How long the last speaker is assumed to talk")
                .value_parser(value_parser!(u64))
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
        )
        .get_matches();

    let (env_config, env_warnings) = Config::from_env();

    // Command-line flags win over the environment
    let mut builder = ConfigBuilder::from_config(env_config);
    if let Some(secs) = matches.get_one::<u64>("final-duration") {
        builder = builder.with_final_cue_duration(*secs);
    }
    if matches.get_flag("verbose") {
        builder = builder.with_log_level("debug");
    }
    let config = builder.build();

    // Configure logging based on verbose flag
    if matches.get_flag("verbose") {
        tracing_subscriber::fmt()
            .with_target(true)
            .with_env_filter(config.log_level.as_str())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(config.log_level.as_str())
            .init();
    }

    for warning in &env_warnings {
        warn!("⚠️  {}", warning);
    }

    match run(&matches, &config).await {
        Ok(summary) => {
            debug!(
                "🎉 {} lines -> {} captions in {}",
                summary.lines_read,
                summary.cues_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &ArgMatches, config: &Config) -> Result<ConversionSummary> {
    config.validate().context("Invalid configuration")?;
    debug!("{}", config.summary());

    let (input, output) = match (
        matches.get_one::<PathBuf>("input"),
        matches.get_one::<PathBuf>("output"),
    ) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(CaptionError::MissingArguments.into()),
    };

    let summary = convert_file(input, output, config).await?;
    Ok(summary)
}
