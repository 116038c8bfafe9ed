use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::db::credential_store::{CredentialStore, JsonFileStore};
use crate::types::error::AppError;

/// Shared handle over the credential store. Every mutation of the collection
/// runs under `write_lock`, so concurrent registrations cannot drop each
/// other's records.
pub struct UserService {
    pub(crate) store: Arc<dyn CredentialStore>,
    pub(crate) write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, AppError> {
        info!("Opening credential store at {}", path.display());
        let store = JsonFileStore::open(path)?;
        Ok(Self::new(Arc::new(store)))
    }
}
