//! Collection endpoints

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::routes::AppError;
use crate::state::{Collection, Record, RecordId};

pub fn router() -> Router<Collection> {
    Router::new()
        .route("/events", get(list_records).post(create_record))
        .route("/events/", get(list_records).post(create_record))
        .route(
            "/events/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
}

fn into_record(body: Value) -> Result<Record, AppError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::BadRequest("Request body must be a JSON object".into())),
    }
}

/// GET /events - List all records
async fn list_records(State(collection): State<Collection>) -> Json<Vec<Record>> {
    Json(collection.list().await)
}

/// GET /events/:id - Fetch one record
async fn get_record(
    State(collection): State<Collection>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record>, AppError> {
    collection.get(id).await.map(Json).ok_or(AppError::NotFound(id))
}

/// POST /events - Create a record with a server-assigned id
async fn create_record(
    State(collection): State<Collection>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let record = collection
        .insert(into_record(body)?)
        .await
        .ok_or(AppError::Exhausted)?;
    info!(id = ?record.get("id"), "created record");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /events/:id - Merge the given fields into a record
async fn update_record(
    State(collection): State<Collection>,
    Path(id): Path<RecordId>,
    Json(body): Json<Value>,
) -> Result<Json<Record>, AppError> {
    let fields = into_record(body)?;
    let record = collection.merge(id, fields).await.ok_or(AppError::NotFound(id))?;
    info!(id, "updated record");
    Ok(Json(record))
}

/// DELETE /events/:id - Remove a record
async fn delete_record(
    State(collection): State<Collection>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record>, AppError> {
    collection.remove(id).await.ok_or(AppError::NotFound(id))?;
    info!(id, "deleted record");
    Ok(Json(Record::new()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, Response};
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn app(collection: Collection) -> Router {
        crate::router(collection)
    }

    #[tokio::test]
    async fn post_assigns_next_id_and_ignores_client_id() {
        let collection = Collection::from_records(vec![json!({ "id": 6, "name": "Old" })]).unwrap();
        let app = app(collection);

        let response = send(&app, "POST", "/events/", Some(json!({ "id": 1, "name": "Launch" }))).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["name"], "Launch");
    }

    #[tokio::test]
    async fn list_accepts_both_collection_paths() {
        let app = app(Collection::default());
        send(&app, "POST", "/events", Some(json!({ "name": "A" }))).await;

        for uri in ["/events", "/events/"] {
            let response = send(&app, "GET", uri, None).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body = json_body(response).await;
            assert_eq!(body.as_array().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn get_missing_is_404_with_error_body() {
        let app = app(Collection::default());

        let response = send(&app, "GET", "/events/3", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({ "error": "Record 3 not found" }));
    }

    #[tokio::test]
    async fn put_merges_and_keeps_id() {
        let collection =
            Collection::from_records(vec![json!({ "id": 2, "name": "A", "company": "Acme" })]).unwrap();
        let app = app(collection);

        let response = send(&app, "PUT", "/events/2", Some(json!({ "id": 99, "company": "Mono" }))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "id": 2, "name": "A", "company": "Mono" })
        );
    }

    #[tokio::test]
    async fn put_missing_is_404() {
        let app = app(Collection::default());
        let response = send(&app, "PUT", "/events/5", Some(json!({ "name": "x" }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_object_body_is_rejected() {
        let app = app(Collection::default());
        let response = send(&app, "POST", "/events", Some(json!([1, 2]))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_404() {
        let collection = Collection::from_records(vec![json!({ "id": 1 })]).unwrap();
        let app = app(collection.clone());

        let first = send(&app, "DELETE", "/events/1", None).await;
        assert_eq!(first.status(), StatusCode::OK);
        assert!(collection.get(1).await.is_none());

        let second = send(&app, "DELETE", "/events/1", None).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_after_highest_possible_id_is_rejected() {
        let collection = Collection::from_records(vec![json!({ "id": u64::MAX })]).unwrap();
        let app = app(collection);

        let response = send(&app, "POST", "/events", Some(json!({ "name": "Launch" }))).await;

        assert_eq!(response.status(), StatusCode::INSUFFICIENT_STORAGE);
        assert_eq!(json_body(response).await, json!({ "error": "No record ids left" }));
    }

    #[test]
    fn seed_rejects_duplicate_ids() {
        let result = Collection::from_records(vec![json!({ "id": 1 }), json!({ "id": 1 })]);
        assert!(result.is_err());
    }
}
