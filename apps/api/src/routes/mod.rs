pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intake::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/intake/events",
            post(handlers::handle_intake_events),
        )
        .route("/api/v1/records/:id", get(handlers::handle_get_record))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tokio::sync::mpsc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::intake::pipeline::tests::{event_body, FakeDetector, MemoryStore};
    use crate::intake::pipeline::IntakePipeline;

    fn test_router(detector: FakeDetector, store: Arc<MemoryStore>) -> Router {
        let (tx, _rx) = mpsc::channel(16);
        let state = AppState {
            pipeline: IntakePipeline::new(Arc::new(detector), store.clone(), tx),
            records: store,
        };
        build_router(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router(FakeDetector::default(), Arc::default());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_extract_returns_record() {
        let app = test_router(FakeDetector::default(), Arc::default());
        let request = post_json(
            "/api/v1/extract",
            json!({"lines": ["Name: Jane Doe", "Skills", "Python", "SQL"]}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let record = body_json(response).await;
        assert_eq!(record["Name"], "Jane Doe");
        assert_eq!(record["Skills"], "Python, SQL");
        assert_eq!(record["WorkExperience"], json!([]));
    }

    #[tokio::test]
    async fn test_intake_then_fetch_record() {
        let store = Arc::new(MemoryStore::default());
        let detector = FakeDetector::with("jane.pdf", &["Email: jane@x.com"]);
        let app = test_router(detector, store.clone());

        let batch = json!({"Records": [
            {"messageId": "1", "body": event_body("cv", "jane.pdf")},
            {"messageId": "2", "body": "garbage"}
        ]});
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/intake/events", batch))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let summary = body_json(response).await;
        assert_eq!(summary["processed"], 1);
        assert_eq!(summary["malformed"], 1);

        let record_id = store.items.lock().unwrap()[0].0.record_id;
        let response = app
            .oneshot(
                Request::get(format!("/api/v1/records/{record_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let item = body_json(response).await;
        assert_eq!(item["document_key"], "jane.pdf");
        assert_eq!(item["extracted_data"]["Email"], json!({"S": "jane@x.com"}));
    }

    #[tokio::test]
    async fn test_non_string_body_does_not_sink_batch() {
        let store = Arc::new(MemoryStore::default());
        let detector = FakeDetector::with("ok.pdf", &["Name: Ok"]);
        let app = test_router(detector, store.clone());

        let batch = json!({"Records": [
            {"body": {"Records": []}},
            {"body": event_body("cv", "ok.pdf")}
        ]});
        let response = app
            .oneshot(post_json("/api/v1/intake/events", batch))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let summary = body_json(response).await;
        assert_eq!(summary["received"], 2);
        assert_eq!(summary["processed"], 1);
        assert_eq!(summary["malformed"], 1);

        let items = store.items.lock().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].0.document_key, "ok.pdf");
    }

    #[tokio::test]
    async fn test_non_batch_payload_is_400() {
        let store = Arc::new(MemoryStore::default());
        let app = test_router(FakeDetector::default(), store.clone());

        let response = app
            .oneshot(post_json("/api/v1/intake/events", json!({"Records": 5})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
        assert!(store.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_record_is_404() {
        let app = test_router(FakeDetector::default(), Arc::default());
        let response = app
            .oneshot(
                Request::get(format!("/api/v1/records/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
