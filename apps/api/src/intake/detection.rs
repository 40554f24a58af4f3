//! Text detection: turns a stored document into ordered text lines.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::intake::envelope::DocumentRef;

/// Produces the detected text lines of one document, in reading order.
#[async_trait]
pub trait TextDetector: Send + Sync {
    async fn detect_lines(&self, doc: &DocumentRef) -> Result<Vec<String>, AppError>;
}

/// Fetches the object from S3-compatible storage and extracts its text layer.
pub struct PdfTextDetector {
    s3: aws_sdk_s3::Client,
}

impl PdfTextDetector {
    pub fn new(s3: aws_sdk_s3::Client) -> Self {
        Self { s3 }
    }
}

#[async_trait]
impl TextDetector for PdfTextDetector {
    async fn detect_lines(&self, doc: &DocumentRef) -> Result<Vec<String>, AppError> {
        let object = self
            .s3
            .get_object()
            .bucket(&doc.bucket)
            .key(&doc.key)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("get s3://{}/{} failed: {e}", doc.bucket, doc.key)))?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| AppError::S3(format!("reading s3://{}/{} failed: {e}", doc.bucket, doc.key)))?
            .into_bytes();
        debug!("Fetched {} bytes for {}", bytes.len(), doc.key);

        // PDF parsing is CPU-bound.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("text extraction task failed: {e}")))?
            .map_err(|e| AppError::TextDetection(format!("{}: {e}", doc.key)))?;

        let lines = split_lines(&text);
        info!("Detected {} lines in {}", lines.len(), doc.key);
        Ok(lines)
    }
}

/// Non-empty, trimmed lines in their original order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blank_lines_and_keeps_order() {
        let text = "  Name: Jane Doe \n\n\tExperience\r\nCompany: Acme\n   \n";
        assert_eq!(
            split_lines(text),
            vec!["Name: Jane Doe", "Experience", "Company: Acme"]
        );
    }

    #[test]
    fn test_split_lines_keeps_duplicates() {
        assert_eq!(split_lines("SQL\nSQL"), vec!["SQL", "SQL"]);
    }

    #[test]
    fn test_split_lines_empty_text() {
        assert!(split_lines("").is_empty());
    }
}
