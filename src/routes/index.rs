use crate::models::responses::IndexResponse;
use axum::http::Uri;
use axum::response::Json;

pub async fn index(uri: Uri) -> Json<IndexResponse> {
    // The echoed path keeps the query string when one is present.
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(uri.path());

    Json(IndexResponse {
        message: "Hello from PHP API Service 2".to_string(),
        path: path.to_string(),
    })
}
