use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::info;

use crate::types::{error::AppError, user::User};

/// Whole-collection persistence for registered users.
///
/// Implementations never read or write a single record; callers that mutate
/// the collection are expected to serialize their load-modify-save cycles.
pub trait CredentialStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<User>, AppError>;
    fn save_all(&self, users: &[User]) -> Result<(), AppError>;
}

/// Users kept as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Seeds an empty collection when the file does not exist yet, otherwise
    /// checks that the existing file parses.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = Self::new(path);
        if store.path.exists() {
            let users = store.load_all()?;
            info!("Loaded {} users from {}", users.len(), store.path.display());
        } else {
            store.save_all(&[])?;
            info!("Created empty credential file at {}", store.path.display());
        }
        Ok(store)
    }

    fn unavailable(&self, what: &str, e: impl std::fmt::Display) -> AppError {
        AppError::StoreUnavailable(format!("{what} {}: {e}", self.path.display()))
    }
}

impl CredentialStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<User>, AppError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.unavailable("read", e))?;
        serde_json::from_str(&raw).map_err(|e| self.unavailable("parse", e))
    }

    // Written beside the target and renamed over it, so readers see either
    // the old or the new collection.
    fn save_all(&self, users: &[User]) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.unavailable("write", e))?;
        serde_json::to_writer_pretty(&mut tmp, users).map_err(|e| self.unavailable("write", e))?;
        tmp.write_all(b"\n").map_err(|e| self.unavailable("write", e))?;
        tmp.as_file().sync_all().map_err(|e| self.unavailable("write", e))?;
        tmp.persist(&self.path).map_err(|e| self.unavailable("replace", e.error))?;
        Ok(())
    }
}

/// In-process store, mainly for tests.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users: Mutex::new(users) }
    }
}

impl CredentialStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().clone())
    }

    fn save_all(&self, users: &[User]) -> Result<(), AppError> {
        *self.users.lock() = users.to_vec();
        Ok(())
    }
}
