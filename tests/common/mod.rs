use auth_server::db::credential_store::{CredentialStore, JsonFileStore};
use auth_server::db::user_service::UserService;
use auth_server::types::{error::AppError, user::User};
use auth_server::utils::{jwt::TokenIssuer, password::{HashParams, Hasher}};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub const TEST_SECRET: &str = "test-secret";

pub struct TestContext {
    pub db: Arc<UserService>,
    pub store: Arc<dyn CredentialStore>,
    pub hasher: Arc<Hasher>,
    pub tokens: Arc<TokenIssuer>,
    pub users_file: PathBuf,
    pub _dir: TempDir,
}

impl TestContext {
    pub fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let users_file = dir.path().join("users.json");
        let store: Arc<dyn CredentialStore> =
            Arc::new(JsonFileStore::open(&users_file).expect("Failed to open credential store"));

        Self::with_store(store, users_file, dir)
    }

    #[allow(dead_code)]
    pub fn with_failing_store() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let users_file = dir.path().join("users.json");
        Self::with_store(Arc::new(FailingStore), users_file, dir)
    }

    fn with_store(store: Arc<dyn CredentialStore>, users_file: PathBuf, dir: TempDir) -> TestContext {
        TestContext {
            db: Arc::new(UserService::new(Arc::clone(&store))),
            store,
            hasher: Arc::new(Hasher::new(cheap_hash_params()).expect("Failed to build hasher")),
            tokens: Arc::new(TokenIssuer::new(TEST_SECRET).expect("Failed to build token issuer")),
            users_file,
            _dir: dir,
        }
    }
}

// Argon2 at full cost makes every flow test slow.
pub fn cheap_hash_params() -> HashParams {
    HashParams { memory_kib: 1024, iterations: 1, parallelism: 1 }
}

/// A store whose backing file is gone for good.
pub struct FailingStore;

impl CredentialStore for FailingStore {
    fn load_all(&self) -> Result<Vec<User>, AppError> {
        Err(AppError::StoreUnavailable("users.json: No such file or directory".into()))
    }

    fn save_all(&self, _users: &[User]) -> Result<(), AppError> {
        Err(AppError::StoreUnavailable("users.json: Read-only file system".into()))
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use auth_server::types::user::{RUserLogin, RUserRegister};

    pub fn sample_user() -> RUserRegister {
        RUserRegister {
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            email: email.to_string(),
            ..sample_user()
        }
    }

    pub fn login(email: &str, password: &str) -> RUserLogin {
        RUserLogin {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}
