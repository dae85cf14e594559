pub mod aws_polly;
pub mod provider;
pub mod types;

pub use aws_polly::AwsPolly;
pub use provider::TextToSpeech;
pub use types::{AudioArtifact, AudioFormat, SynthesisRequest};
