//! Block decoding: header, transaction list, embedded coinbase height

use crate::constants::{BLOCK_HEADER_SIZE, HEIGHT_IN_COINBASE_VERSION, MAX_HEIGHT_BYTES};
use crate::error::{DecodeError, Result};
use crate::hash::double_sha256;
use crate::reader::ByteReader;
use crate::transaction::read_transaction;
use crate::types::{Block, Transaction};

/// Decode a block from a hex string, such as the output of `getblock`.
pub fn block_from_hex(hexstring: &str) -> Result<Block> {
    let bytes = hex::decode(hexstring)?;
    block_from_bytes(&bytes)
}

/// Decode a block from a raw byte buffer, such as a slice of a blockchain
/// file.
pub fn block_from_bytes(bytes: &[u8]) -> Result<Block> {
    let mut reader = ByteReader::new(bytes);

    // The header commits to every transaction through the merkle root, so
    // hashing its fixed 80 bytes yields the block hash. Peek rather than
    // read; the field reads below still need to consume it.
    let header = reader.peek_bytes(BLOCK_HEADER_SIZE)?;
    let hash = double_sha256(header);

    let version = reader.read_u32()?;
    let mut prev_block_hash = [0u8; 32];
    prev_block_hash.copy_from_slice(reader.read_bytes(32)?);
    let mut merkle_root = [0u8; 32];
    merkle_root.copy_from_slice(reader.read_bytes(32)?);
    let time = reader.read_u32()?;
    let bits = reader.read_u32()?;
    let nonce = reader.read_u32()?; // terminates the 80-byte header

    let tx_count = reader.read_compact_size()?;
    let mut transactions = Vec::new();
    for _ in 0..tx_count {
        transactions.push(read_transaction(&mut reader)?);
    }

    // The coinbase script only commits the block height from version 2 on;
    // earlier blocks have no height on the wire at all
    let height = if version >= HEIGHT_IN_COINBASE_VERSION {
        coinbase_height(&transactions)?
    } else {
        0
    };

    Ok(Block {
        version,
        prev_block_hash,
        merkle_root,
        hash,
        time,
        bits,
        nonce,
        tx_count,
        transactions,
        height,
    })
}

/// Extract the height committed in the coinbase input script: one length
/// byte, then that many bytes interpreted as a little-endian integer.
fn coinbase_height(transactions: &[Transaction]) -> Result<u64> {
    let script = transactions
        .first()
        .and_then(|tx| tx.inputs.first())
        .map(|input| input.script.as_slice())
        .ok_or_else(|| {
            DecodeError::MalformedCoinbase("block has no coinbase input".to_string())
        })?;

    let mut reader = ByteReader::new(script);
    let length = reader
        .read_byte()
        .map_err(|_| DecodeError::MalformedCoinbase("coinbase script is empty".to_string()))?
        as usize;
    if length > MAX_HEIGHT_BYTES {
        return Err(DecodeError::MalformedCoinbase(format!(
            "height length {} exceeds {} bytes",
            length, MAX_HEIGHT_BYTES
        )));
    }
    let height_bytes = reader.read_bytes(length).map_err(|_| {
        DecodeError::MalformedCoinbase(format!(
            "height length {} overruns {}-byte coinbase script",
            length,
            script.len()
        ))
    })?;

    let mut buf = [0u8; 8];
    buf[..height_bytes.len()].copy_from_slice(height_bytes);
    Ok(u64::from_le_bytes(buf))
}
