use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use std::sync::OnceLock;
use tracing::warn;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("not-a-real-password").unwrap_or_default())
}

/// Checks `password` against the stored hash of a user that may not exist.
///
/// An unknown user still pays for one argon2 verification, so the time
/// taken does not reveal whether the email is registered.
pub fn credentials_match(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(hash) => verify_password(password, hash).unwrap_or_else(|e| {
            warn!(error = %e, "stored password hash is unreadable");
            false
        }),
        None => {
            let _ = verify_password(password, dummy_hash());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifies() {
        let a = hash_password("securepassword").unwrap();
        let b = hash_password("securepassword").unwrap();
        assert_ne!(a, b);
        assert_ne!(a, "securepassword");
        assert!(a.starts_with("$argon2"));
        assert!(verify_password("securepassword", &a).unwrap());
        assert!(!verify_password("wrongpassword", &a).unwrap());
    }

    #[test]
    fn unknown_user_never_matches() {
        assert!(!credentials_match("not-a-real-password", None));
        assert!(!credentials_match("anything", None));
    }

    #[test]
    fn garbage_hash_is_a_mismatch() {
        assert!(!credentials_match("securepassword", Some("plaintext")));
    }

    #[test]
    fn known_user_matches_on_correct_password() {
        let hash = hash_password("securepassword").unwrap();
        assert!(credentials_match("securepassword", Some(&hash)));
        assert!(!credentials_match("securepassword1", Some(&hash)));
    }
}
