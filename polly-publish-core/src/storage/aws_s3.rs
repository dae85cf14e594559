//! AWS S3 object store implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::provider::ObjectStore;
use super::types::Destination;
use crate::tts::types::AudioArtifact;

pub struct AwsS3 {
    client: Client,
}

impl AwsS3 {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl ObjectStore for AwsS3 {
    async fn put_object(&self, destination: &Destination, artifact: AudioArtifact) -> Result<()> {
        self.client
            .put_object()
            .bucket(&destination.bucket)
            .key(&destination.key)
            .content_type(&destination.content_type)
            .body(ByteStream::from(artifact.audio_data))
            .send()
            .await
            .with_context(|| format!("Failed to put object {destination}"))?;

        Ok(())
    }
}
