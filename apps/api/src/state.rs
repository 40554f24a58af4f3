use std::sync::Arc;

use crate::intake::pipeline::IntakePipeline;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: IntakePipeline,
    pub records: Arc<dyn RecordStore>,
}
