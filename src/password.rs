use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::ApiError;

/// hash_password
///
/// Hashes a password using Argon2id with a random salt, producing a PHC string
/// for storage. Plaintext passwords exist only on this call path and are never
/// logged.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    Ok(password_hash.to_string())
}

/// verify_password
///
/// Verifies a password against a stored PHC hash. A mismatch and an unreadable
/// stored hash both surface as `Unauthorized` so a caller cannot distinguish
/// them; the corrupt-hash case is additionally logged because it means the
/// stored credential needs operator attention.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), ApiError> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| {
        tracing::error!("Stored password hash is unreadable: {e}");
        ApiError::Unauthorized
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Unauthorized)
}
