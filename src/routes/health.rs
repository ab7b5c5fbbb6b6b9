use crate::models::responses::HealthResponse;
use axum::response::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "php-api-service".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serializes_to_fixed_payload() {
        let Json(body) = health_check().await;
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"ok","service":"php-api-service"}"#
        );
    }
}
