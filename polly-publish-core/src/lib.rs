pub mod aws;
pub mod config;
pub mod error;
pub mod mock;
pub mod publish;
pub mod storage;
pub mod text;
pub mod tts;

pub use config::PublishConfig;
pub use error::PublishError;
pub use publish::{publish, Published};
pub use storage::{Destination, ObjectStore};
pub use tts::{AudioArtifact, SynthesisRequest, TextToSpeech};
