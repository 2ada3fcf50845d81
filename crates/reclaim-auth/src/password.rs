use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

/// Hash a password with Argon2id and a fresh random salt. The returned PHC
/// string embeds the algorithm parameters, the salt, and the derived key, so
/// verification needs nothing but the digest itself.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {}", e))?
        .to_string();
    Ok(digest)
}

/// Check a password against a stored digest. Comparison of the derived key is
/// constant-time inside the argon2 crate. A wrong password is `Ok(false)`;
/// only a malformed digest is an error.
pub fn verify_password(password: &str, digest: &str) -> Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(|e| anyhow!("malformed password digest: {}", e))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("password verification failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &digest).unwrap());
    }

    #[test]
    fn wrong_password_is_false_not_error() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(!verify_password("hunter3!", &digest).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Fresh salt per digest.
        let a = hash_password("hunter2!").unwrap();
        let b = hash_password("hunter2!").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("hunter2!", &a).unwrap());
        assert!(verify_password("hunter2!", &b).unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify_password("hunter2!", "not-a-phc-string").is_err());
    }
}
