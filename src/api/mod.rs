//! JSON API handlers
//!
//! Each handler returns `Result<Response, HandlerError>`; the router owns the
//! conversion of failures to HTTP. All payloads are demo data.

use chrono::Local;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_TYPE;
use hyper::{Request, Response, StatusCode};

use crate::config::AppState;
use crate::error::HandlerError;
use crate::http::json_response;
use crate::models::{PatientDetail, UploadReceipt};

/// `GET /api/patient/{id}`: synthetic detail record echoing the id.
pub fn patient_detail(id: u32, state: &AppState) -> Result<Response<Full<Bytes>>, HandlerError> {
    let detail = PatientDetail::synthetic(id, Local::now().to_rfc3339());
    state
        .logger
        .log_info(&format!("Retrieved patient {id} data from secure storage"));
    Ok(json_response(StatusCode::OK, &detail))
}

/// `POST /api/upload`: accept a multipart document and hand it to the
/// blob store. Only the first `file` field matters; its bytes are discarded.
pub async fn upload<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, HandlerError>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    let boundary = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok());

    // A request without a multipart body cannot carry a file part.
    let Some(boundary) = boundary else {
        return Err(HandlerError::BadRequest("No file provided".to_string()));
    };

    let body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| HandlerError::Internal(format!("Upload failed: {e}")))?
        .to_bytes();

    let stream = futures_util::stream::once(async move {
        Ok::<Bytes, std::convert::Infallible>(body)
    });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(ToString::to_string);
        let Some(filename) = filename.filter(|f| !f.is_empty()) else {
            return Err(HandlerError::BadRequest("No file selected".to_string()));
        };

        // Read and discard; the mock store keeps nothing.
        field
            .bytes()
            .await
            .map_err(|e| HandlerError::BadRequest(format!("Malformed multipart body: {e}")))?;

        let stored = state
            .blobs
            .store_document(&filename)
            .map_err(|e| HandlerError::Internal(format!("Upload failed: {e}")))?;

        let receipt = UploadReceipt {
            message: "File uploaded successfully to Azure Blob Storage",
            filename,
            storage_url: stored.url,
            encryption_status: "File encrypted at rest",
            access_control: "Role-based access applied",
        };
        return Ok(json_response(StatusCode::OK, &receipt));
    }

    Err(HandlerError::BadRequest("No file provided".to_string()))
}

/// `GET /health`: liveness document for the hosting platform. Every
/// sub-status is hard-coded; there is no live signal behind it.
pub fn health(state: &AppState) -> Result<Response<Full<Bytes>>, HandlerError> {
    state
        .logger
        .log_info("Health check: Verifying Azure service connections");

    // A probe lookup against the injected secret store. The demo binding
    // cannot fail; a real client failing here surfaces the unhealthy shape.
    state
        .secrets
        .get_secret("healthcheck-probe")
        .map_err(|e| HandlerError::Unhealthy(e.to_string()))?;

    let status = serde_json::json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
        "services": {
            "azure_sql_managed_instance": "connected",
            "azure_key_vault": "accessible",
            "azure_blob_storage": "available",
            "app_service": "running"
        },
        "security": {
            "encryption_at_rest": "enabled",
            "encryption_in_transit": "enabled",
            "key_vault_integration": "active",
            "managed_identity": "configured"
        }
    });
    Ok(json_response(StatusCode::OK, &status))
}

/// `GET /api/security-status`: static compliance claims.
pub fn security_status(_state: &AppState) -> Result<Response<Full<Bytes>>, HandlerError> {
    let info = serde_json::json!({
        "azure_services": {
            "key_vault": "All secrets and encryption keys stored in Azure Key Vault",
            "managed_identity": "App Service uses Managed Identity for secure access",
            "sql_managed_instance": "Database connections secured with Azure AD authentication",
            "blob_storage": "Documents encrypted at rest with customer-managed keys"
        },
        "compliance": {
            "hipaa": "HIPAA compliance through Azure security features",
            "encryption": "End-to-end encryption implemented",
            "access_control": "Role-based access control (RBAC) configured",
            "audit_logging": "All access logged to Azure Monitor"
        },
        "best_practices": [
            "Secrets never stored in code",
            "Database credentials managed by Key Vault",
            "Network security groups configured",
            "HTTPS enforced with SSL/TLS",
            "Regular security scanning enabled"
        ]
    });
    Ok(json_response(StatusCode::OK, &info))
}
