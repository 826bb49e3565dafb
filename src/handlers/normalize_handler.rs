use actix_web::{web, HttpResponse};
use log::{info, warn};
use uuid::Uuid;

use crate::models::{ApiError, NormalizeRequest};
use crate::services::NormalizeService;

/// Normalize one form submission
pub async fn normalize_submission(
    normalize_service: web::Data<NormalizeService>,
    payload: web::Json<NormalizeRequest>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    info!("[{}] Normalize request received", request_id);

    if !payload.raw.is_object() {
        warn!("[{}] Rejected payload: raw is not an object", request_id);
        return Err(ApiError::ValidationError("raw must be a JSON object".to_string()));
    }

    let response = normalize_service.normalize(&payload.raw);
    info!("[{}] Returning {} canonical attributes", request_id, response.canonical.len());

    Ok(HttpResponse::Ok().json(response))
}

/// Maps JSON extractor failures onto the API error body.
pub fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    warn!("Rejected normalize payload: {}", err);
    ApiError::from(err).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_config(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(NormalizeService::default()))
            .app_data(web::JsonConfig::default().limit(4096).error_handler(json_error_handler));
        crate::routes::configure(cfg);
    }

    #[actix_web::test]
    async fn test_normalize_returns_sparse_canonical_and_meta() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({"raw": {"data": {
                "submissionId": "sub-9",
                "fields": [
                    {"key": "question_jyovg9", "type": "INPUT_EMAIL", "value": "  FOO@BAR.com "},
                    {"key": "question_487zEo", "type": "INPUT_PHONE_NUMBER", "value": "0612345678"},
                    {"key": "question_WNR1ZQ", "type": "INPUT_NUMBER", "value": "n/a"}
                ]
            }}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["canonical"], json!({"phone": "+33612345678", "email": "foo@bar.com"}));
        assert_eq!(body["meta"]["submissionId"], json!("sub-9"));
        assert_eq!(body["meta"]["responseId"], Value::Null);
        assert_eq!(body["meta"].as_object().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn test_missing_fields_is_not_an_error() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({"raw": {}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["canonical"], json!({}));
    }

    #[actix_web::test]
    async fn test_non_object_raw_is_rejected() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({"raw": ["not", "an", "object"]}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[actix_web::test]
    async fn test_missing_raw_is_rejected() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({"bundle": {}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[actix_web::test]
    async fn test_oversized_payload_is_rejected() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::post()
            .uri("/normalize")
            .set_json(json!({"raw": {"data": {"formName": "x".repeat(8192)}}}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().configure(app_config)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "OK");
    }
}
