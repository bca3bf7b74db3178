//! Seal computation shared by outbound requests and inbound responses.
//!
//! The seal is `hex(SHA-256(k1=v1|k2=v2|...|kn=vn<secret>))`: pairs are
//! joined with `|` in insertion order and the secret is appended right after
//! the last pair. Reordering the pairs changes the seal.

use super::parameters::{PAIR_SEPARATOR, ParameterSet};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// The secret shared with the gateway. Never printed.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Computes the lowercase hex seal of `parameters` under `secret`.
pub fn compose_seal(parameters: &ParameterSet, secret: &SecretKey) -> String {
    let mut hasher = Sha256::new();
    let last = parameters.len().saturating_sub(1);
    for (i, (key, value)) in parameters.iter().enumerate() {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
        if i != last {
            let mut sep = [0u8; 4];
            hasher.update(PAIR_SEPARATOR.encode_utf8(&mut sep).as_bytes());
        }
    }
    hasher.update(secret.expose().as_bytes());
    hex::encode(hasher.finalize())
}

/// Recomputes the seal and compares it to `asserted` in constant time.
pub fn verify_seal(parameters: &ParameterSet, secret: &SecretKey, asserted: &str) -> bool {
    let expected = compose_seal(parameters, secret);
    if expected.len() != asserted.len() {
        return false;
    }
    expected.as_bytes().ct_eq(asserted.as_bytes()).into()
}
