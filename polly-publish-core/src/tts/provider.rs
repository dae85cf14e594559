use anyhow::Result;
use async_trait::async_trait;

use super::types::{AudioArtifact, SynthesisRequest};

/// Trait for text-to-speech providers
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize the request into a complete encoded audio artifact
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact>;
}
