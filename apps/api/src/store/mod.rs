//! Record persistence: stores one extracted record per processed document.

pub mod attributes;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::models::ResumeRecord;
use crate::models::record::CvRecordRow;
use crate::store::attributes::{to_attribute_map, AttributeMap};

/// One durable item: `{record_id, document_key, extracted_data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub record_id: Uuid,
    pub document_key: String,
    pub extracted_data: AttributeMap,
}

impl StoredItem {
    pub fn new(document_key: &str, record: &ResumeRecord) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            document_key: document_key.to_string(),
            extracted_data: to_attribute_map(record),
        }
    }
}

impl TryFrom<CvRecordRow> for StoredItem {
    type Error = AppError;

    fn try_from(row: CvRecordRow) -> Result<Self, Self::Error> {
        Ok(StoredItem {
            record_id: row.record_id,
            document_key: row.document_key,
            extracted_data: serde_json::from_value(row.extracted_data)?,
        })
    }
}

/// Persistence backend for extracted records.
///
/// Carried in `AppState` as `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Assigns a fresh record id and stores the record under `document_key`.
    async fn put(&self, document_key: &str, record: &ResumeRecord)
        -> Result<StoredItem, AppError>;

    async fn get(&self, record_id: Uuid) -> Result<Option<StoredItem>, AppError>;
}

/// PostgreSQL-backed store writing to the `cv_records` table.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn put(
        &self,
        document_key: &str,
        record: &ResumeRecord,
    ) -> Result<StoredItem, AppError> {
        let item = StoredItem::new(document_key, record);
        let data = serde_json::to_value(&item.extracted_data)?;

        sqlx::query(
            "INSERT INTO cv_records (record_id, document_key, extracted_data) VALUES ($1, $2, $3)",
        )
        .bind(item.record_id)
        .bind(&item.document_key)
        .bind(data)
        .execute(&self.pool)
        .await?;

        info!(
            "Stored record {} for document {}",
            item.record_id, item.document_key
        );
        Ok(item)
    }

    async fn get(&self, record_id: Uuid) -> Result<Option<StoredItem>, AppError> {
        let row: Option<CvRecordRow> =
            sqlx::query_as("SELECT * FROM cv_records WHERE record_id = $1")
                .bind(record_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(StoredItem::try_from).transpose()
    }
}
