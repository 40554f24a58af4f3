use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvRecordRow {
    pub record_id: Uuid,
    pub document_key: String,
    /// Attribute-map encoding of the extracted record, see `store::attributes`.
    pub extracted_data: Value,
    pub created_at: DateTime<Utc>,
}
