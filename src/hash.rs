//! Hash primitives used for identifier derivation
//!
//! Pure functions, no state. Block hashes and transaction ids use
//! [`double_sha256`]; address hashes embedded in scripts use [`hash160`].

use crate::types::{Hash160, Hash256};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of the given data.
pub fn sha256(data: &[u8]) -> Hash256 {
    let digest = Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    hash
}

/// SHA-256 applied twice. Used for block headers and transaction ids.
pub fn double_sha256(data: &[u8]) -> Hash256 {
    sha256(&sha256(data))
}

/// RIPEMD-160 of the given data.
pub fn ripemd160(data: &[u8]) -> Hash160 {
    let digest = Ripemd160::digest(data);
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&digest);
    hash
}

/// RIPEMD-160 of the SHA-256 of the given data. The standard address-hash
/// primitive.
pub fn hash160(data: &[u8]) -> Hash160 {
    ripemd160(&sha256(data))
}
