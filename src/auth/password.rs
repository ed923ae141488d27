//! Salted password hashes stored in the credentials map.
//!
//! Format: `sha256$<salt>$<hex digest of salt + password>`

use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";

pub fn hash_password(plain: &str) -> String {
    let salt = uuid::Uuid::new_v4().simple().to_string();
    format!("{SCHEME}${salt}${}", digest(&salt, plain))
}

pub fn verify_password(plain: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(SCHEME), Some(salt), Some(hex)) => digest(salt, plain) == hex,
        _ => false,
    }
}

pub(crate) fn digest(salt: &str, plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(plain.as_bytes());
    format!("{:x}", hasher.finalize())
}
