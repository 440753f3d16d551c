//! Password hashing in the Werkzeug PBKDF2 format.
//!
//! Hashes look like `pbkdf2:sha256:260000$<salt>$<hex digest>`, where the
//! salt is a 16 character alphanumeric string used as raw bytes. This is the
//! format `werkzeug.security.generate_password_hash` produces, so existing
//! user databases keep working.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::{Rng, distr::Alphanumeric};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const METHOD_PREFIX: &str = "pbkdf2:sha256";
const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;

/// Hashes and verifies passwords.
///
/// The iteration count only affects new hashes; verification reads the
/// count stored in each hash.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect();

        let mut key = [0u8; KEY_LENGTH];
        derive(password, salt.as_bytes(), self.iterations, &mut key)?;

        Ok(format!(
            "{METHOD_PREFIX}:{}${salt}${}",
            self.iterations,
            hex::encode(key)
        ))
    }

    /// Returns `Ok(false)` for a wrong password and `Err` for a stored hash
    /// that cannot be parsed.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let malformed = || AppError::Internal("Malformed password hash".to_string());

        let mut parts = stored_hash.splitn(3, '$');
        let (Some(method), Some(salt), Some(digest)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let iterations = method
            .strip_prefix(METHOD_PREFIX)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|rounds| rounds.parse::<u32>().ok())
            .ok_or_else(malformed)?;
        let expected = hex::decode(digest).map_err(|_| malformed())?;
        if expected.is_empty() {
            return Err(malformed());
        }

        let mut computed = vec![0u8; expected.len()];
        derive(password, salt.as_bytes(), iterations, &mut computed)?;

        Ok(constant_time_eq(&computed, &expected))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(260_000)
    }
}

fn derive(password: &str, salt: &[u8], iterations: u32, out: &mut [u8]) -> Result<(), AppError> {
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, iterations, out)
        .map_err(|e| AppError::Internal(format!("PBKDF2 failed: {e}")))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
