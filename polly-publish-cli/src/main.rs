use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use polly_publish_core::aws::AwsConfig;
use polly_publish_core::config::{DEFAULT_REGION, DEFAULT_TEXT_FILE, DEFAULT_VOICE_ID};
use polly_publish_core::storage::AwsS3;
use polly_publish_core::tts::AwsPolly;
use polly_publish_core::{publish, PublishConfig, PublishError};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polly-publish")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthesize a text file with AWS Polly and upload the MP3 to S3")]
struct Args {
    /// Text file to synthesize
    #[arg(long, env = "TEXT_FILE", default_value = DEFAULT_TEXT_FILE)]
    text_file: PathBuf,

    /// Destination S3 bucket
    #[arg(long, env = "S3_BUCKET")]
    bucket: String,

    /// Destination object key
    #[arg(long, env = "S3_KEY")]
    key: String,

    /// Polly voice id
    #[arg(long, env = "VOICE_ID", default_value = DEFAULT_VOICE_ID)]
    voice_id: String,

    /// AWS region for both Polly and S3
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Named AWS profile to load credentials from
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Polly engine (standard, neural, long-form, generative)
    #[arg(long, env = "POLLY_ENGINE")]
    engine: Option<String>,
}

impl From<Args> for PublishConfig {
    fn from(args: Args) -> Self {
        Self {
            text_file: args.text_file,
            bucket: args.bucket,
            key: args.key,
            voice_id: args.voice_id,
            region: args.region,
            profile: args.profile,
            engine: args.engine,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = setup_tracing() {
        eprintln!("Failed to initialize tracing: {e:?}");
        return ExitCode::FAILURE;
    }

    let config = PublishConfig::from(Args::parse());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to build runtime: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(exit_code = e.exit_code(), "{e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: &PublishConfig) -> Result<(), PublishError> {
    info!(
        "CLI startup: text_file={:?}, bucket={}, key={}, voice_id={}, region={}, profile={:?}, engine={:?}",
        config.text_file,
        config.bucket,
        config.key,
        config.voice_id,
        config.region,
        config.profile,
        config.engine
    );

    let sdk_config = AwsConfig {
        profile: config.profile.clone(),
        region: config.region.clone(),
    }
    .load()
    .await;

    let polly = AwsPolly::new(&sdk_config);
    let s3 = AwsS3::new(&sdk_config);

    let published = publish(config, &polly, &s3).await?;
    println!("Uploaded {}", published.destination);
    Ok(())
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // CI captures stderr; stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("polly-publish").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = parse(&[
            "--bucket",
            "audio-bucket",
            "--key",
            "polly-audio/prod.mp3",
            "--voice-id",
            "Matthew",
            "--region",
            "eu-west-1",
            "--text-file",
            "notes.txt",
            "--engine",
            "neural",
            "--profile",
            "release",
        ])
        .unwrap();

        let config = PublishConfig::from(args);
        assert_eq!(config.bucket, "audio-bucket");
        assert_eq!(config.key, "polly-audio/prod.mp3");
        assert_eq!(config.voice_id, "Matthew");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.text_file, PathBuf::from("notes.txt"));
        assert_eq!(config.engine.as_deref(), Some("neural"));
        assert_eq!(config.profile.as_deref(), Some("release"));
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
