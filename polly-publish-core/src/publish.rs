use tracing::{debug, info};

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::storage::provider::ObjectStore;
use crate::storage::types::Destination;
use crate::text::read_input_text;
use crate::tts::provider::TextToSpeech;
use crate::tts::types::{AudioFormat, SynthesisRequest};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub destination: Destination,
    pub bytes: usize,
}

/// Read the configured text file, synthesize it, and upload the audio.
///
/// Runs strictly in order and stops at the first failure. Nothing remote is
/// touched when the config is invalid or the text is empty. A failed upload
/// does not retry or undo the synthesis.
pub async fn publish(
    config: &PublishConfig,
    tts: &dyn TextToSpeech,
    store: &dyn ObjectStore,
) -> Result<Published, PublishError> {
    config.validate()?;

    let text = read_input_text(&config.text_file).await?;
    let destination = config.destination();

    info!(
        text_file = %config.text_file.display(),
        destination = %destination,
        voice_id = %config.voice_id,
        "Publishing speech"
    );

    let request = SynthesisRequest {
        text,
        output_format: AudioFormat::Mp3,
        voice_id: config.voice_id.clone(),
        engine: config.engine.clone(),
    };

    let artifact = tts
        .synthesize(&request)
        .await
        .map_err(PublishError::Synthesis)?;
    let bytes = artifact.audio_data.len();
    debug!(bytes, "Synthesized audio");

    store
        .put_object(&destination, artifact)
        .await
        .map_err(PublishError::Upload)?;

    info!(destination = %destination, bytes, "Uploaded audio");

    Ok(Published { destination, bytes })
}
