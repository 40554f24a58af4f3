//! Intake pipeline: processes a delivered batch of storage events end to end.
//!
//! For each message: decode the envelope, detect text, build the record,
//! persist it and announce it on the change feed. A bad message or a failing
//! collaborator only affects its own document; the batch always completes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::extraction::build_record;
use crate::intake::detection::TextDetector;
use crate::intake::envelope::{DocumentRef, EnvelopeError, QueueBatch};
use crate::store::{RecordStore, StoredItem};

/// Per-batch outcome counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub received: usize,
    pub processed: usize,
    pub malformed: usize,
    pub invalid: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct IntakePipeline {
    detector: Arc<dyn TextDetector>,
    records: Arc<dyn RecordStore>,
    changes: mpsc::Sender<StoredItem>,
}

impl IntakePipeline {
    pub fn new(
        detector: Arc<dyn TextDetector>,
        records: Arc<dyn RecordStore>,
        changes: mpsc::Sender<StoredItem>,
    ) -> Self {
        Self {
            detector,
            records,
            changes,
        }
    }

    /// Processes every message of the batch in delivery order.
    pub async fn process_batch(&self, batch: &QueueBatch) -> BatchSummary {
        let mut summary = BatchSummary {
            received: batch.records.len(),
            ..Default::default()
        };

        for message in &batch.records {
            info!(
                "Processing message {}",
                message.message_id.as_deref().unwrap_or("<no id>")
            );

            let doc = match message.document_ref() {
                Ok(doc) => doc,
                Err(EnvelopeError::Malformed(reason)) => {
                    warn!("Skipping undecodable message body: {reason}");
                    summary.malformed += 1;
                    continue;
                }
                Err(EnvelopeError::Invalid(reason)) => {
                    warn!("Invalid message format: {reason}");
                    summary.invalid += 1;
                    continue;
                }
            };

            match self.process_document(&doc).await {
                Ok(item) => {
                    info!(
                        "Document processed and stored as {} for: {}",
                        item.record_id, doc.key
                    );
                    summary.processed += 1;
                }
                Err(e) => {
                    error!("Error processing document s3://{}/{}: {e}", doc.bucket, doc.key);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Batch done: {} received, {} processed, {} malformed, {} invalid, {} failed",
            summary.received, summary.processed, summary.malformed, summary.invalid, summary.failed
        );
        summary
    }

    /// Runs one document through detection, extraction and persistence.
    pub async fn process_document(&self, doc: &DocumentRef) -> Result<StoredItem, AppError> {
        info!(
            "Processing document from bucket: {}, key: {}",
            doc.bucket, doc.key
        );

        let lines = self.detector.detect_lines(doc).await?;
        let record = build_record(&lines);
        let item = self.records.put(&doc.key, &record).await?;

        // The record is durable at this point; a closed feed only loses the notification.
        if self.changes.send(item.clone()).await.is_err() {
            warn!(
                "Change feed closed, no notification for record {}",
                item.record_id
            );
        }
        Ok(item)
    }
}
