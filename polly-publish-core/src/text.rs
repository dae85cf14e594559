use std::path::Path;

use crate::error::PublishError;

/// Trimmed, non-empty text ready for synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    /// Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub async fn read_input_text(path: &Path) -> Result<InputText, PublishError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PublishError::ReadText {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read text file");

    InputText::new(&raw).ok_or_else(|| PublishError::EmptyText {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let text = InputText::new("\n  Hello world.  \t\n").unwrap();
        assert_eq!(text.as_str(), "Hello world.");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let text = InputText::new(" line one\n\nline two ").unwrap();
        assert_eq!(text.as_str(), "line one\n\nline two");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(InputText::new("   \n\t  "), None);
        assert_eq!(InputText::new(""), None);
    }

    #[tokio::test]
    async fn test_read_input_text_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.txt");
        std::fs::write(&path, "Hello world.\n").unwrap();

        let text = read_input_text(&path).await.unwrap();
        assert_eq!(text.as_str(), "Hello world.");
    }

    #[tokio::test]
    async fn test_read_input_text_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.txt");
        std::fs::write(&path, "   \n\t  ").unwrap();

        let err = read_input_text(&path).await.unwrap_err();
        assert!(matches!(err, PublishError::EmptyText { .. }));
    }

    #[tokio::test]
    async fn test_read_input_text_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_input_text(&path).await.unwrap_err();
        match err {
            PublishError::ReadText { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_input_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speech.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_input_text(&path).await.unwrap_err();
        assert!(matches!(err, PublishError::ReadText { .. }));
    }
}
