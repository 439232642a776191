//! Request routing dispatch
//!
//! The single entry point for HTTP request processing. Routes are a fixed
//! method+path table; everything unmatched falls through to a uniform JSON
//! 404. Handlers return typed results and this module is the one place that
//! turns a `HandlerError` into an HTTP response.
//!
//! Generic over the body type so tests can drive it with `Full<Bytes>`
//! while the server passes `hyper::body::Incoming`.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api;
use crate::config::AppState;
use crate::error::HandlerError;
use crate::handler::pages;

/// Main entry point for HTTP request handling.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match dispatch(req, &state).await {
        Ok(resp) => resp,
        Err(err) => {
            if err.status().is_server_error() {
                state.logger.log_error(&format!("{method} {path}: {err}"));
            }
            err.into_response()
        }
    };

    state
        .logger
        .log_request(method.as_str(), &path, response.status().as_u16());
    Ok(response)
}

/// Route table. Unmatched method+path pairs all take the generic 404.
async fn dispatch<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, HandlerError>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    check_body_size(&req, state.config.http.max_body_size)?;

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (&method, path.as_str()) {
        (&Method::GET, "/") => pages::dashboard(state),
        (&Method::GET, "/patients") => pages::patients(state),
        (&Method::GET, "/health") => api::health(state),
        (&Method::GET, "/api/security-status") => api::security_status(state),
        (&Method::POST, "/api/upload") => api::upload(req, state).await,
        (&Method::GET, p) if p.starts_with("/api/patient/") => {
            let id = parse_patient_id(p)
                .ok_or_else(|| HandlerError::NotFound("Patient not found".to_string()))?;
            api::patient_detail(id, state)
        }
        _ => Err(HandlerError::NotFound("Resource not found".to_string())),
    }
}

/// Extract the integer id from `/api/patient/{id}`.
fn parse_patient_id(path: &str) -> Option<u32> {
    path.strip_prefix("/api/patient/")?.parse().ok()
}

/// Reject requests whose declared body exceeds the configured limit.
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Result<(), HandlerError> {
    let Some(content_length) = req.headers().get("content-length") else {
        return Ok(());
    };
    let Ok(size_str) = content_length.to_str() else {
        return Ok(());
    };
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => Err(HandlerError::BadRequest(format!(
            "Request body too large: {size} bytes (max: {max_body_size})"
        ))),
        // An unparsable Content-Length is left for hyper to deal with.
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    async fn send(req: Request<Full<Bytes>>) -> (StatusCode, Bytes) {
        let state = AppState::for_tests();
        let resp = handle_request(req, state).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    fn get(path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    fn multipart_upload(filename: &str) -> Request<Full<Bytes>> {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             %PDF-1.4 demo bytes\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    fn json(body: &Bytes) -> serde_json::Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_patient_detail_echoes_id() {
        let (status, body) = send(get("/api/patient/42")).await;
        assert_eq!(status, StatusCode::OK);
        let doc = json(&body);
        assert_eq!(doc["id"], 42);
        assert_eq!(doc["name"], "Patient 42");
    }

    #[tokio::test]
    async fn test_patient_detail_non_integer_id_is_not_found() {
        let (status, body) = send(get("/api/patient/abc")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json(&body)["error"], "Patient not found");
    }

    #[tokio::test]
    async fn test_upload_without_file_part() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_upload_with_empty_filename() {
        let (status, body) = send(multipart_upload("")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"], "No file selected");
    }

    #[tokio::test]
    async fn test_upload_with_valid_file() {
        let (status, body) = send(multipart_upload("x.pdf")).await;
        assert_eq!(status, StatusCode::OK);
        let doc = json(&body);
        assert_eq!(doc["filename"], "x.pdf");
        assert_eq!(
            doc["storage_url"],
            "https://healthcareblob.blob.core.windows.net/documents/x.pdf"
        );
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let doc = json(&body);
        assert_eq!(doc["status"], "healthy");
        assert_eq!(doc["services"]["azure_key_vault"], "accessible");
    }

    #[tokio::test]
    async fn test_security_status_document() {
        let (status, body) = send(get("/api/security-status")).await;
        assert_eq!(status, StatusCode::OK);
        let doc = json(&body);
        assert_eq!(doc["best_practices"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_dashboard_page_contains_counters() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("1247"));
        assert!(html.contains("Critical Alerts"));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn test_patients_page_lists_five_records() {
        let (status, body) = send(get("/patients")).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body.to_vec()).unwrap();
        for name in [
            "John Smith",
            "Sarah Johnson",
            "Michael Brown",
            "Emily Davis",
            "Robert Wilson",
        ] {
            assert!(html.contains(name), "missing roster entry: {name}");
        }
        assert_eq!(html.matches("<tr><td>").count(), 5);
    }

    #[tokio::test]
    async fn test_unmatched_route_is_uniform_404() {
        let (status, body) = send(get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json(&body)["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_uniform_404() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/health")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json(&body)["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/upload")
            .header("Content-Length", "99999999999")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json(&body)["error"]
            .as_str()
            .unwrap()
            .starts_with("Request body too large"));
    }

    #[test]
    fn test_parse_patient_id() {
        assert_eq!(parse_patient_id("/api/patient/7"), Some(7));
        assert_eq!(parse_patient_id("/api/patient/abc"), None);
        assert_eq!(parse_patient_id("/api/patient/"), None);
        assert_eq!(parse_patient_id("/api/patient/1/extra"), None);
    }
}
