//! Stateless HTTP request builder and response parser for the Houzat API.
//!
//! # Design
//! `HouzatClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Status classification lives here: every non-2xx response becomes an
//! `ApiError::Http` whose message is taken from the backend's error envelope
//! (`message`, then `error`, then a generic fallback), or synthesized from
//! the status line when the body is not JSON.

use std::fmt::Display;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::DesignerQuery;
use crate::wire::{DesignerDetailResponse, DesignerListingResponse, ProjectDetailResponse};

/// Message used when an error body parses as JSON but carries neither a
/// `message` nor an `error` field.
const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Stateless client for the Houzat API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct HouzatClient {
    base_url: String,
}

impl HouzatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_designers(&self, query: &DesignerQuery) -> HttpRequest {
        let query_string = query.to_query_string();
        let path = if query_string.is_empty() {
            format!("{}/designers/", self.base_url)
        } else {
            format!("{}/designers/?{query_string}", self.base_url)
        };
        self.get(path)
    }

    pub fn build_designer_detail(&self, id: impl Display) -> HttpRequest {
        self.get(format!("{}/designers/{id}/", self.base_url))
    }

    pub fn build_project_detail(&self, id: impl Display) -> HttpRequest {
        self.get(format!("{}/projects/{id}/", self.base_url))
    }

    pub fn parse_designers(
        &self,
        response: HttpResponse,
    ) -> Result<DesignerListingResponse, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_designer_detail(
        &self,
        response: HttpResponse,
    ) -> Result<DesignerDetailResponse, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_project_detail(
        &self,
        response: HttpResponse,
    ) -> Result<ProjectDetailResponse, ApiError> {
        parse_envelope(response)
    }

    /// All Houzat operations are JSON-accepting GETs. Default headers are
    /// installed here; callers override via `HttpRequest::with_header`.
    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: None,
        }
    }
}

/// Classify the status, then decode the success body as the expected
/// envelope. A 2xx body that does not match the envelope shape is a
/// `Decode` error, reported with status 0 like any other non-HTTP failure.
fn parse_envelope<T: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }

    let (message, payload) = match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(body) => (envelope_message(&body), body),
        Err(_) => {
            // Not JSON at all; synthesize an envelope from the status line.
            let message = status_line_message(response);
            let payload = serde_json::json!({
                "success": false,
                "error": "Unknown error",
                "message": message,
            });
            (message, payload)
        }
    };

    Err(ApiError::Http {
        message,
        status: response.status,
        payload,
    })
}

/// Preferred error text: `message`, then `error`, then the generic
/// fallback. Empty strings fall through like absent fields.
fn envelope_message(body: &serde_json::Value) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_string()
}

fn status_line_message(response: &HttpResponse) -> String {
    if response.status_text.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        format!("HTTP {}: {}", response.status, response.status_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HouzatClient {
        HouzatClient::new("http://localhost:8000/api")
    }

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn new_trims_trailing_slash_from_base_url() {
        let c = HouzatClient::new("http://localhost:8000/api/");
        assert_eq!(c.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn build_designers_without_params_has_no_query_string() {
        let req = client().build_designers(&DesignerQuery::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/designers/");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_designers_appends_only_supplied_params() {
        let query = DesignerQuery {
            search: Some("Delhi".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let req = client().build_designers(&query);
        assert_eq!(
            req.path,
            "http://localhost:8000/api/designers/?search=Delhi&page=2"
        );
    }

    #[test]
    fn build_requests_carry_json_content_type() {
        let req = client().build_designers(&DesignerQuery::default());
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_detail_paths_interpolate_numeric_and_string_ids() {
        let req = client().build_designer_detail(7);
        assert_eq!(req.path, "http://localhost:8000/api/designers/7/");

        let req = client().build_project_detail("p-55");
        assert_eq!(req.path, "http://localhost:8000/api/projects/p-55/");
    }

    #[test]
    fn non_2xx_with_envelope_uses_envelope_message() {
        let err = client()
            .parse_designer_detail(response(
                404,
                "Not Found",
                r#"{"success":false,"error":"not_found","message":"Designer not found"}"#,
            ))
            .unwrap_err();
        assert_eq!(err.to_string(), "Designer not found");
        assert_eq!(err.status(), 404);
        assert_eq!(err.payload().unwrap()["error"], "not_found");
    }

    #[test]
    fn envelope_message_falls_back_to_error_field() {
        let err = client()
            .parse_designer_detail(response(400, "Bad Request", r#"{"error":"bad input"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn json_body_without_message_or_error_gets_generic_text() {
        let err = client()
            .parse_designer_detail(response(400, "Bad Request", r#"{"detail":"nope"}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "An error occurred");
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn non_json_error_body_synthesizes_status_line_message() {
        let err = client()
            .parse_designers(response(500, "Internal Server Error", "<html>boom</html>"))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(err.status(), 500);
        assert_eq!(err.payload().unwrap()["message"], "HTTP 500: Internal Server Error");
    }

    #[test]
    fn missing_status_text_synthesizes_bare_status_code() {
        // Executors may not know the reason phrase; the synthesized
        // message then drops the colon rather than trailing it.
        let err = client()
            .parse_designers(response(503, "", "upstream timeout"))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503");
        assert_eq!(err.status(), 503);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error_with_status_zero() {
        let err = client()
            .parse_designers(response(200, "OK", "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), 0);
    }

    #[test]
    fn parse_designers_success() {
        let body = r#"{
            "success": true,
            "data": [{
                "id": 1,
                "business_name": "Studio Verde",
                "category": "Interior Designers",
                "address": "Delhi",
                "phone_number": null,
                "website": null,
                "typical_job_cost": null,
                "project_count": 2,
                "featured_image": null,
                "intro": null,
                "created_at": "2024-01-01T00:00:00Z"
            }],
            "pagination": {
                "total": 1, "page": 1, "page_size": 20, "total_pages": 1,
                "has_next": false, "has_previous": false, "count": 1
            }
        }"#;
        let parsed = client().parse_designers(response(200, "OK", body)).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].business_name, "Studio Verde");
        assert_eq!(parsed.pagination.total, 1);
    }
}
