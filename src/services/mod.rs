//! Backing-service capabilities
//!
//! The portal's cloud dependencies are expressed as traits so that the real
//! system would inject concrete clients; the demo binds them to mock
//! implementations that log what production wiring would do and return
//! synthetic values. Handlers depend on the traits only.

pub mod mock;

use thiserror::Error;

/// Failure raised by a backing service. The demo implementations never
/// produce one, but the seam keeps the real error path typed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("secret store error: {0}")]
    SecretStore(String),
    #[error("blob store error: {0}")]
    BlobStore(String),
}

/// Receipt for a stored document.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub url: String,
}

/// Named-secret lookup, e.g. a key vault.
pub trait SecretProvider: Send + Sync {
    fn get_secret(&self, name: &str) -> Result<String, ServiceError>;
}

/// Document storage, e.g. a blob container.
pub trait BlobStore: Send + Sync {
    fn store_document(&self, filename: &str) -> Result<StoredDocument, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::SecretStore("timeout".to_string());
        assert_eq!(err.to_string(), "secret store error: timeout");
        let err = ServiceError::BlobStore("quota".to_string());
        assert_eq!(err.to_string(), "blob store error: quota");
    }
}
