use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hash a plaintext password with bcrypt at the fixed work factor (cost 12).
///
/// Length validation happens upstream in the DTOs; the hasher accepts any
/// input.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Compare a plaintext candidate against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))
}
