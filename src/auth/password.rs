use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use regex::Regex;
use tracing::error;

/// Complexity rules checked in order; the first failing rule wins.
pub fn validate_complexity(password: &str) -> Result<(), &'static str> {
    lazy_static! {
        static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").unwrap();
        static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").unwrap();
        static ref SYMBOL_RE: Regex =
            Regex::new(r##"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"##).unwrap();
    }

    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !DIGIT_RE.is_match(password) {
        return Err("Password must contain at least one digit");
    }
    if !UPPER_RE.is_match(password) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !SYMBOL_RE.is_match(password) {
        return Err("Password must contain at least one special character");
    }
    Ok(())
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
