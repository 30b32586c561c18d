//! Standard output-script template recognition
//!
//! Stateless predicate/extractor pairs over a script's raw bytes. Every
//! check rejects on exact byte length first, then matches the opcode
//! pattern. Extractors return [`DecodeError::InvalidScript`] when invoked
//! on a script their predicate rejects.

use crate::error::{DecodeError, Result};
use crate::hash::hash160;
use crate::types::Hash160;

const OP_0: u8 = 0x00;
const OP_DUP: u8 = 0x76;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_HASH160: u8 = 0xa9;
const OP_CHECKSIG: u8 = 0xac;

/// Standard script template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    P2Pk,
    P2Pkh,
    P2Sh,
    P2Wpkh,
    P2Wsh,
    Unknown,
}

/// Classify a locking script against the standard templates.
pub fn classify(script: &[u8]) -> ScriptType {
    if is_p2pkh(script) {
        ScriptType::P2Pkh
    } else if is_p2sh(script) {
        ScriptType::P2Sh
    } else if is_witness_program(script) {
        match script.len() {
            22 => ScriptType::P2Wpkh,
            _ => ScriptType::P2Wsh,
        }
    } else if is_p2pk(script) {
        ScriptType::P2Pk
    } else {
        ScriptType::Unknown
    }
}

/// True for `push(33|65) pubkey OP_CHECKSIG` at exactly 35 or 67 bytes.
pub fn is_p2pk(script: &[u8]) -> bool {
    match script.len() {
        35 => script[0] == 33 && script[34] == OP_CHECKSIG,
        67 => script[0] == 65 && script[66] == OP_CHECKSIG,
        _ => false,
    }
}

/// HASH160 of the public key embedded in a pay-to-pubkey script.
pub fn p2pk_pubkey_hash(script: &[u8]) -> Result<Hash160> {
    if !is_p2pk(script) {
        return Err(DecodeError::InvalidScript(
            "not a pay-to-pubkey script".to_string(),
        ));
    }
    let push_length = script[0] as usize;
    Ok(hash160(&script[1..1 + push_length]))
}

/// True for `OP_DUP OP_HASH160 push(20) hash OP_EQUALVERIFY OP_CHECKSIG`
/// at exactly 25 bytes.
pub fn is_p2pkh(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == 20
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
}

/// The 20-byte public-key hash embedded in a pay-to-pubkey-hash script.
pub fn p2pkh_hash(script: &[u8]) -> Result<Hash160> {
    if !is_p2pkh(script) {
        return Err(DecodeError::InvalidScript(
            "not a pay-to-pubkey-hash script".to_string(),
        ));
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&script[3..23]);
    Ok(hash)
}

/// True for `OP_HASH160 push(20) hash OP_EQUAL` at exactly 23 bytes.
pub fn is_p2sh(script: &[u8]) -> bool {
    script.len() == 23 && script[0] == OP_HASH160 && script[1] == 20 && script[22] == OP_EQUAL
}

/// The 20-byte script hash embedded in a pay-to-script-hash script.
pub fn p2sh_hash(script: &[u8]) -> Result<Hash160> {
    if !is_p2sh(script) {
        return Err(DecodeError::InvalidScript(
            "not a pay-to-script-hash script".to_string(),
        ));
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&script[2..22]);
    Ok(hash)
}

/// True for a version-0 witness program: `OP_0 push(20|32) program`,
/// 22 bytes for a key hash, 34 bytes for a script hash.
pub fn is_witness_program(script: &[u8]) -> bool {
    match script.len() {
        22 => script[0] == OP_0 && script[1] == 20,
        34 => script[0] == OP_0 && script[1] == 32,
        _ => false,
    }
}

/// The witness version byte of a witness-program script.
pub fn witness_version(script: &[u8]) -> Result<u8> {
    if !is_witness_program(script) {
        return Err(DecodeError::InvalidScript(
            "not a witness program".to_string(),
        ));
    }
    Ok(script[0])
}

/// The 20- or 32-byte program embedded in a witness-program script.
pub fn witness_program(script: &[u8]) -> Result<Vec<u8>> {
    if !is_witness_program(script) {
        return Err(DecodeError::InvalidScript(
            "not a witness program".to_string(),
        ));
    }
    let push_length = script[1] as usize;
    Ok(script[2..2 + push_length].to_vec())
}
