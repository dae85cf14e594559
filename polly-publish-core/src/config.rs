use std::path::PathBuf;

use crate::error::PublishError;
use crate::storage::types::Destination;
use crate::tts::aws_polly::{parse_engine, parse_voice_id};
use crate::tts::types::AudioFormat;

pub const DEFAULT_TEXT_FILE: &str = "speech.txt";
pub const DEFAULT_VOICE_ID: &str = "Joanna";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Everything a single publish run needs. Built once at process start and
/// passed by reference; nothing below the CLI reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    pub text_file: PathBuf,
    pub bucket: String,
    pub key: String,
    pub voice_id: String,
    pub region: String,
    pub profile: Option<String>,
    pub engine: Option<String>,
}

impl PublishConfig {
    /// Config with defaults for everything except the destination.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            text_file: PathBuf::from(DEFAULT_TEXT_FILE),
            bucket: bucket.into(),
            key: key.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            region: DEFAULT_REGION.to_string(),
            profile: None,
            engine: None,
        }
    }

    pub fn validate(&self) -> Result<(), PublishError> {
        if self.bucket.trim().is_empty() {
            return Err(PublishError::Config("bucket must not be empty".into()));
        }
        if self.key.trim().is_empty() {
            return Err(PublishError::Config("key must not be empty".into()));
        }
        if self.region.trim().is_empty() {
            return Err(PublishError::Config("region must not be empty".into()));
        }

        parse_voice_id(&self.voice_id).map_err(|e| PublishError::Config(e.to_string()))?;

        if let Some(engine) = &self.engine {
            parse_engine(engine).map_err(|e| PublishError::Config(e.to_string()))?;
        }

        Ok(())
    }

    pub fn destination(&self) -> Destination {
        Destination {
            bucket: self.bucket.clone(),
            key: self.key.clone(),
            content_type: AudioFormat::Mp3.content_type().to_string(),
        }
    }
}
