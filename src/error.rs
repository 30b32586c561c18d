//! Error types for chain data decoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("buffer underrun: {needed} bytes requested at offset {offset}, {available} remaining")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("invalid script: {0}")]
    InvalidScript(String),

    #[error("malformed coinbase: {0}")]
    MalformedCoinbase(String),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
