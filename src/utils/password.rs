use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::types::error::AppError;

/// Argon2id cost knobs. Defaults are the argon2 crate's recommended values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashParams {
    pub fn validate(&self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
    }
}

/// Salted password hashing. Holds a throwaway hash so lookups for unknown
/// users cost the same as a real verification.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl Hasher {
    pub fn new(params: HashParams) -> Result<Self, AppError> {
        let params = params
            .validate()
            .map_err(|e| AppError::Internal(format!("argon2 params: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let filler = SaltString::generate(&mut OsRng);
        let dummy_hash = argon2
            .hash_password(filler.as_str().as_bytes(), &SaltString::generate(&mut OsRng))
            .map_err(|e| AppError::Internal(format!("hash failed: {e}")))?
            .to_string();

        Ok(Self { argon2, dummy_hash })
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("hash failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Unparsable stored hashes never match.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };
        self.argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    }

    /// Burns one verification against the throwaway hash.
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, &self.dummy_hash);
    }
}

#[cfg(test)]
pub(crate) fn cheap_params() -> HashParams {
    HashParams { memory_kib: 1024, iterations: 1, parallelism: 1 }
}
