use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read text file {}: {source}", path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Text file is empty: {}", path.display())]
    EmptyText { path: PathBuf },

    #[error("Speech synthesis failed: {0:#}")]
    Synthesis(anyhow::Error),

    #[error("Upload failed: {0:#}")]
    Upload(anyhow::Error),
}

impl PublishError {
    /// Process exit status for this failure. Empty input is always 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyText { .. } => 1,
            Self::Config(_) => 2,
            Self::ReadText { .. } => 3,
            Self::Synthesis(_) => 4,
            Self::Upload(_) => 5,
        }
    }
}
