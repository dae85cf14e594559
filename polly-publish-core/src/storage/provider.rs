use anyhow::Result;
use async_trait::async_trait;

use super::types::Destination;
use crate::tts::types::AudioArtifact;

/// Trait for durable object stores
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write the artifact as a single object at the destination
    async fn put_object(&self, destination: &Destination, artifact: AudioArtifact) -> Result<()>;
}
