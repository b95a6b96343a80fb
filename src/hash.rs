//! One-way digest helpers.
//!
//! Lowercase-hex renderings of an MD5 digest and a keyed HMAC-SHA-512.
//! MD5 is fine for cache keys and change detection; anything
//! security-sensitive should go through [`sha512_hash`].

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Lowercase-hex MD5 digest of `input` (32 characters).
#[must_use]
pub fn md5_hash(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Lowercase-hex HMAC-SHA-512 of `input` keyed by `salt` (128 characters).
///
/// # Panics
///
/// Never in practice: HMAC accepts keys of any length.
#[must_use]
pub fn sha512_hash(input: &str, salt: &str) -> String {
    let mut mac =
        HmacSha512::new_from_slice(salt.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(input.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
