//! # blockparse
//!
//! Decoder for raw Bitcoin-family chain data: blocks, transactions, and
//! standard output scripts.
//!
//! The crate turns raw binary encodings (or their hex renderings) into
//! structured, queryable records and derives the identifiers downstream
//! tooling needs: the block hash, the transaction hash of the bytes as
//! received, and the canonical transaction id that segwit encodings
//! obscure. It performs no consensus validation, no networking, and no
//! persistence; it only reads.
//!
//! ## Architecture
//!
//! Decoding is layered over a small set of leaves:
//! - [`reader`] - bounds-checked cursor over an immutable byte buffer,
//!   including the compact-size integer codec
//! - [`hash`] - SHA-256 / RIPEMD-160 derivation primitives
//! - [`transaction`] - transaction decoding, segwit marker/flag handling,
//!   legacy txid reconstruction
//! - [`block`] - 80-byte header, transaction list, embedded coinbase height
//! - [`script`] - standard output-script template recognition, usable on
//!   any decoded script independently of the decoders
//!
//! Every decode either returns a fully populated structure or a
//! [`DecodeError`] naming the primitive read that failed; there are no
//! partial results.
//!
//! ## Usage
//!
//! ```
//! use blockparse::block::block_from_hex;
//! use blockparse::transaction::is_coinbase;
//! use blockparse::types::hash256_hex;
//!
//! // Bitcoin block at height 200
//! let raw = concat!(
//!     "01000000eb68047fb29d78480b567ef6b76be556a2ec975656424508cc1c69b7000000",
//!     "00bad58718fc3c6f5474918f06c44400c70b4c86d55a3f3ca3493b1d40c2061f2ba00f",
//!     "6b49ffff001d064b3a6d0101000000010000000000000000000000000000000000000",
//!     "000000000000000000000000000ffffffff0704ffff001d0138ffffffff0100f2052a",
//!     "010000004341045e071dedd1ed03721c6e9bba28fc276795421a378637fb41090192b",
//!     "b9f208630dcbac5862a3baeb9df3ca6e4e256b7fd2404824c20198ca1b004ee219786",
//!     "6433ac00000000",
//! );
//!
//! let block = block_from_hex(raw)?;
//! assert_eq!(
//!     hash256_hex(&block.hash),
//!     "000000008f1a7008320c16b8402b7f11e82951f44ca2663caf6860ab2eeef320"
//! );
//! assert_eq!(block.version, 1);
//! assert_eq!(block.tx_count, 1);
//! assert!(is_coinbase(&block.transactions[0]));
//! # Ok::<(), blockparse::DecodeError>(())
//! ```

pub mod block;
pub mod constants;
pub mod error;
pub mod hash;
pub mod reader;
pub mod script;
pub mod transaction;
pub mod types;

// Re-export commonly used items
pub use block::{block_from_bytes, block_from_hex};
pub use constants::*;
pub use error::{DecodeError, Result};
pub use transaction::{is_coinbase, transaction_from_bytes, transaction_from_hex};
pub use types::*;
