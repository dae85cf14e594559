//! AWS Polly text-to-speech implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use aws_sdk_polly::Client;

use super::provider::TextToSpeech;
use super::types::{AudioArtifact, AudioFormat, SynthesisRequest};

/// AWS Polly text-to-speech provider
pub struct AwsPolly {
    client: Client,
}

impl AwsPolly {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

/// Voices the SDK doesn't know yet pass through unchanged; Polly rejects
/// ids that don't exist.
pub fn parse_voice_id(voice_id: &str) -> Result<VoiceId> {
    if voice_id.trim().is_empty() {
        anyhow::bail!("voice id must not be empty");
    }
    Ok(VoiceId::from(voice_id))
}

pub fn parse_engine(engine: &str) -> Result<Engine> {
    if !Engine::values().iter().any(|known| *known == engine) {
        anyhow::bail!(
            "unknown engine: {engine} (expected one of {})",
            Engine::values().join(", ")
        );
    }
    Ok(Engine::from(engine))
}

fn output_format(format: AudioFormat) -> OutputFormat {
    match format {
        AudioFormat::Mp3 => OutputFormat::Mp3,
    }
}

#[async_trait]
impl TextToSpeech for AwsPolly {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact> {
        let voice_id = parse_voice_id(&request.voice_id)?;
        let engine = request.engine.as_deref().map(parse_engine).transpose()?;

        let response = self
            .client
            .synthesize_speech()
            .text(request.text.as_str())
            .voice_id(voice_id)
            .output_format(output_format(request.output_format))
            .set_engine(engine)
            .send()
            .await
            .context("Failed to synthesize speech")?;

        let audio_data = response
            .audio_stream
            .collect()
            .await
            .context("Failed to collect audio stream")?
            .into_bytes()
            .to_vec();

        Ok(AudioArtifact { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_voices() {
        assert_eq!(parse_voice_id("Joanna").unwrap(), VoiceId::Joanna);
        assert_eq!(parse_voice_id("Matthew").unwrap(), VoiceId::Matthew);
    }

    #[test]
    fn test_parse_voice_passes_unlisted_ids_through() {
        let voice = parse_voice_id("Zephyr").unwrap();
        assert_eq!(voice.as_str(), "Zephyr");
        assert!(!VoiceId::values().contains(&"Zephyr"));
    }

    #[test]
    fn test_parse_voice_rejects_blank() {
        assert!(parse_voice_id("").is_err());
        assert!(parse_voice_id("   ").is_err());
    }

    #[test]
    fn test_parse_engine() {
        assert_eq!(parse_engine("standard").unwrap(), Engine::Standard);
        assert_eq!(parse_engine("neural").unwrap(), Engine::Neural);
        assert!(parse_engine("Neural").is_err());
    }
}
