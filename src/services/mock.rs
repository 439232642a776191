//! Mock service bindings for local development
//!
//! Each call logs the operation production wiring would perform and returns
//! a synthetic value. No network traffic, no stored bytes.

use std::sync::Arc;

use super::{BlobStore, SecretProvider, ServiceError, StoredDocument};
use crate::logger::Logger;

const BLOB_CONTAINER_URL: &str = "https://healthcareblob.blob.core.windows.net/documents";

/// Stand-in for a key vault client.
pub struct MockKeyVault {
    logger: Arc<Logger>,
}

impl MockKeyVault {
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl SecretProvider for MockKeyVault {
    fn get_secret(&self, name: &str) -> Result<String, ServiceError> {
        self.logger
            .log_mock(&format!("Would retrieve secret {name} from Azure Key Vault"));
        Ok(format!("mock-{name}-value"))
    }
}

/// Stand-in for a blob storage client. Discards the bytes and fabricates a
/// container URL for the receipt.
pub struct MockBlobStore {
    logger: Arc<Logger>,
}

impl MockBlobStore {
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl BlobStore for MockBlobStore {
    fn store_document(&self, filename: &str) -> Result<StoredDocument, ServiceError> {
        self.logger
            .log_mock(&format!("Uploading {filename} to Azure Blob Storage"));
        self.logger
            .log_mock("File would be encrypted and stored with proper access controls");
        Ok(StoredDocument {
            url: format!("{BLOB_CONTAINER_URL}/{filename}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_vault_returns_synthetic_secret() {
        let vault = MockKeyVault::new(Arc::new(Logger::disabled()));
        let value = vault.get_secret("db-password").unwrap();
        assert_eq!(value, "mock-db-password-value");
    }

    #[test]
    fn test_blob_store_builds_container_url() {
        let store = MockBlobStore::new(Arc::new(Logger::disabled()));
        let doc = store.store_document("scan.pdf").unwrap();
        assert_eq!(
            doc.url,
            "https://healthcareblob.blob.core.windows.net/documents/scan.pdf"
        );
    }
}
