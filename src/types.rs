//! Decoded chain data types and their textual renderings

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit digest (block hashes, transaction hashes, merkle roots)
pub type Hash256 = [u8; 32];

/// Hash type: 160-bit digest (address hashes extracted from scripts)
pub type Hash160 = [u8; 20];

/// Script type backed by a byte array
pub type Script = Vec<u8>;

/// Witness stack for a single input: one byte string per stack item
pub type WitnessScript = Vec<Vec<u8>>;

/// A single transaction input.
///
/// Coinbase inputs carry an all-zero `prev_hash` and a `prev_index` of
/// 0xFFFFFFFF; their `script` holds miner-defined data instead of an
/// unlocking script. `witness` is `Some` only when the owning transaction
/// uses the segwit encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prev_hash: Hash256,
    pub prev_index: u32,
    pub script: Script,
    pub sequence: u32,
    pub witness: Option<WitnessScript>,
}

/// A single transaction output: value in smallest units plus locking script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: u64,
    pub script: Script,
}

/// A complete decoded transaction.
///
/// `txid` is the canonical identifier and should be used for lookups;
/// `hash` is the digest of the encoding as received, which differs from
/// `txid` only for segwit transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
    /// Exact number of bytes this transaction occupied in the source buffer
    pub size: usize,
    /// Double-SHA256 of the transaction bytes as they appear in the source,
    /// witness data included
    pub hash: Hash256,
    /// Double-SHA256 of the legacy-equivalent serialization. Equal to `hash`
    /// for non-segwit transactions.
    pub txid: Hash256,
}

/// A decoded block: the 80-byte header fields, its transactions, and the
/// height recovered from the coinbase script for header version >= 2
/// (0 otherwise; check `version` before trusting a height of 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub version: u32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    /// Double-SHA256 of the 80-byte header
    pub hash: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Transaction count as declared by the compact-size field
    pub tx_count: u64,
    pub transactions: Vec<Transaction>,
    pub height: u64,
}

impl Block {
    /// The coinbase input's script, when the block carries one.
    pub fn coinbase_script(&self) -> Option<&Script> {
        self.transactions
            .first()
            .and_then(|tx| tx.inputs.first())
            .map(|input| &input.script)
    }
}

/// Render a 256-bit hash in its conventional byte-reversed hex form.
///
/// # Examples
///
/// ```
/// use blockparse::types::hash256_hex;
///
/// let mut hash = [0u8; 32];
/// hash[0] = 0xab;
/// assert!(hash256_hex(&hash).ends_with("ab"));
/// ```
pub fn hash256_hex(hash: &Hash256) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Render script bytes as direct (non-reversed) hex.
pub fn script_hex(script: &[u8]) -> String {
    hex::encode(script)
}

/// Render a witness stack as a bracketed, space-joined list of item hex.
pub fn witness_hex(witness: &WitnessScript) -> String {
    let items: Vec<String> = witness.iter().map(hex::encode).collect();
    format!("[{}]", items.join(" "))
}
