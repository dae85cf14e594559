use crate::text::InputText;

/// Encoded audio returned from synthesis. Moved into the upload, never shared.
#[derive(Debug)]
pub struct AudioArtifact {
    pub audio_data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: InputText,
    pub output_format: AudioFormat,
    pub voice_id: String,
    /// `None` leaves engine selection to the service.
    pub engine: Option<String>,
}
