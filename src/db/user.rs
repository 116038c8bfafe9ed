use crate::db::user_service::UserService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, User},
};
use tracing::info;

impl UserService {
    pub fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.get_user_by_email(email)?.is_some())
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .find(|user| user.email == email))
    }

    pub fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store.load_all()
    }

    /// Signup: append a user unless the email is already taken.
    pub fn create_user(&self, payload: DBUserCreate) -> Result<(), AppError> {
        let _guard = self.write_lock.lock();

        let mut users = self.store.load_all()?;
        if users.iter().any(|user| user.email == payload.email) {
            return Err(AppError::DuplicateUser);
        }

        let email = payload.email.clone();
        users.push(User {
            username: payload.username,
            email: payload.email,
            password_hash: payload.password_hash,
        });
        self.store.save_all(&users)?;
        info!("Registered user {email} ({} total)", users.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::credential_store::{CredentialStore, JsonFileStore, MemoryStore};
    use std::sync::Arc;
    use std::thread;

    fn payload(email: &str) -> DBUserCreate {
        DBUserCreate {
            username: "a".into(),
            email: email.into(),
            password_hash: "$argon2id$stub".into(),
        }
    }

    #[test]
    fn creates_and_finds_user() {
        let svc = UserService::new(Arc::new(MemoryStore::default()));
        svc.create_user(payload("a@x.com")).unwrap();

        let user = svc.get_user_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(user.username, "a");
        assert!(svc.user_exists_by_email("a@x.com").unwrap());
        assert!(!svc.user_exists_by_email("b@x.com").unwrap());
    }

    #[test]
    fn duplicate_email_is_rejected_regardless_of_other_fields() {
        let svc = UserService::new(Arc::new(MemoryStore::default()));
        svc.create_user(payload("a@x.com")).unwrap();

        let again = DBUserCreate {
            username: "someone else".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$other".into(),
        };
        assert!(matches!(svc.create_user(again), Err(AppError::DuplicateUser)));
        assert_eq!(svc.list_users().unwrap().len(), 1);
    }

    #[test]
    fn email_match_is_exact() {
        let svc = UserService::new(Arc::new(MemoryStore::default()));
        svc.create_user(payload("a@x.com")).unwrap();
        svc.create_user(payload("A@x.com")).unwrap();
        assert_eq!(svc.list_users().unwrap().len(), 2);
    }

    #[test]
    fn concurrent_registrations_are_all_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<dyn CredentialStore> = Arc::new(JsonFileStore::open(dir.path().join("users.json")).unwrap());
        let svc = Arc::new(UserService::new(store.clone()));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || svc.create_user(payload(&format!("user{i}@x.com"))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(store.load_all().unwrap().len(), 16);
    }

    #[test]
    fn concurrent_duplicates_admit_exactly_one() {
        let svc = Arc::new(UserService::new(Arc::new(MemoryStore::default())));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || svc.create_user(payload("same@x.com")))
            })
            .collect();

        let ok = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(ok, 1);
        assert_eq!(svc.list_users().unwrap().len(), 1);
    }
}
