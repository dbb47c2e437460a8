//! Password hashing.

use crate::error::AppError;

// bcrypt only reads the first 72 bytes of its input; truncate explicitly so
// hash and verify always agree.
const MAX_PASSWORD_BYTES: usize = 72;

fn normalize_password(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(normalize_password(password), bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))
}

pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(normalize_password(password), hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The lowest cost bcrypt accepts keeps the tests fast; the production
    // path uses DEFAULT_COST.
    fn quick_hash(password: &str) -> String {
        bcrypt::hash(normalize_password(password), 4).unwrap()
    }

    #[test]
    fn test_verify_accepts_matching_password() {
        let hashed = quick_hash("hunter2");
        assert!(verify_password("hunter2", &hashed));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = quick_hash("hunter2");
        assert!(!verify_password("hunter3", &hashed));
        assert!(!verify_password("", &hashed));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_long_passwords_compare_on_first_72_bytes() {
        let base = "x".repeat(MAX_PASSWORD_BYTES);
        let longer = format!("{base}different-tail");

        let hashed = quick_hash(&base);
        assert!(verify_password(&longer, &hashed));
    }
}
