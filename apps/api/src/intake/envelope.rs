//! Queue delivery envelopes carrying object-storage "object created" events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A batch of queue messages as delivered to the intake endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueMessage>,
}

/// One delivered message. Decoding never fails: any JSON value is accepted
/// here and judged per message by `document_ref`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct QueueMessage {
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Should be a string holding a JSON storage event. Not guaranteed to be either.
    pub body: Option<Value>,
}

impl From<Value> for QueueMessage {
    fn from(value: Value) -> Self {
        QueueMessage {
            message_id: value
                .get("messageId")
                .and_then(Value::as_str)
                .map(String::from),
            body: value.get("body").cloned(),
        }
    }
}

/// Location of one uploaded document in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct StorageEvent {
    #[serde(rename = "Records", default)]
    records: Vec<StorageEventRecord>,
}

#[derive(Debug, Deserialize)]
struct StorageEventRecord {
    s3: StorageEntity,
}

#[derive(Debug, Deserialize)]
struct StorageEntity {
    bucket: BucketEntity,
    object: ObjectEntity,
}

#[derive(Debug, Deserialize)]
struct BucketEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ObjectEntity {
    key: String,
}

/// Why a message could not be turned into a `DocumentRef`.
#[derive(Debug, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The body is missing or is not JSON at all.
    Malformed(String),
    /// The body is JSON but lacks the bucket/key structure.
    Invalid(String),
}

impl QueueMessage {
    /// Decodes the first storage event record in the body.
    pub fn document_ref(&self) -> Result<DocumentRef, EnvelopeError> {
        let body = match &self.body {
            Some(Value::String(body)) => body,
            Some(other) => {
                return Err(EnvelopeError::Malformed(format!(
                    "body is not a string: {other}"
                )))
            }
            None => return Err(EnvelopeError::Malformed("message has no body".to_string())),
        };

        let value: Value =
            serde_json::from_str(body).map_err(|e| EnvelopeError::Malformed(e.to_string()))?;

        let event: StorageEvent = serde_json::from_value(value.clone())
            .map_err(|e| EnvelopeError::Invalid(format!("{e}: {value}")))?;

        let first = event
            .records
            .into_iter()
            .next()
            .ok_or_else(|| EnvelopeError::Invalid(format!("no event records: {value}")))?;

        Ok(DocumentRef {
            bucket: first.s3.bucket.name,
            key: first.s3.object.key,
        })
    }
}
