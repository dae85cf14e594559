//! In-memory speech and storage providers for testing

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::storage::provider::ObjectStore;
use crate::storage::types::Destination;
use crate::tts::provider::TextToSpeech;
use crate::tts::types::{AudioArtifact, SynthesisRequest};

/// Mock behavior shared by the mock providers
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Return successful responses
    #[default]
    Success,
    /// Fail every call with the given message
    Fail(String),
}

/// Deterministic fake audio for a request. Same text and voice give the same
/// bytes.
pub fn mock_audio(request: &SynthesisRequest) -> Vec<u8> {
    format!(
        "ID3:{}:{}:{}",
        request.output_format.as_str(),
        request.voice_id,
        request.text.as_str()
    )
    .into_bytes()
}

#[derive(Clone, Default)]
pub struct MockSpeech {
    behavior: Arc<Mutex<MockBehavior>>,
    captured_requests: Arc<Mutex<Vec<SynthesisRequest>>>,
}

impl MockSpeech {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn get_call_count(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    pub fn get_captured_requests(&self) -> Vec<SynthesisRequest> {
        self.captured_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextToSpeech for MockSpeech {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact> {
        self.captured_requests.lock().unwrap().push(request.clone());

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => Ok(AudioArtifact {
                audio_data: mock_audio(request),
            }),
            MockBehavior::Fail(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub destination: Destination,
    pub body: Vec<u8>,
}

/// Records every put attempt. Only successful puts become readable objects,
/// and a later put to the same key replaces the earlier one.
#[derive(Clone, Default)]
pub struct MockStore {
    behavior: Arc<Mutex<MockBehavior>>,
    put_calls: Arc<Mutex<Vec<StoredObject>>>,
    objects: Arc<Mutex<HashMap<(String, String), Vec<u8>>>>,
}

impl MockStore {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            put_calls: Arc::new(Mutex::new(Vec::new())),
            objects: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn get_call_count(&self) -> usize {
        self.put_calls.lock().unwrap().len()
    }

    pub fn get_put_calls(&self) -> Vec<StoredObject> {
        self.put_calls.lock().unwrap().clone()
    }

    pub fn get_object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn put_object(&self, destination: &Destination, artifact: AudioArtifact) -> Result<()> {
        self.put_calls.lock().unwrap().push(StoredObject {
            destination: destination.clone(),
            body: artifact.audio_data.clone(),
        });

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success => {
                self.objects.lock().unwrap().insert(
                    (destination.bucket.clone(), destination.key.clone()),
                    artifact.audio_data,
                );
                Ok(())
            }
            MockBehavior::Fail(message) => Err(anyhow::anyhow!(message)),
        }
    }
}
