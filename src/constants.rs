//! Structural constants of the Bitcoin-family wire format

/// Size of the fixed block header in bytes
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Marker byte following the version field of a segwit-encoded transaction
pub const SEGWIT_MARKER: u8 = 0x00;

/// Flag byte following the segwit marker
pub const SEGWIT_FLAG: u8 = 0x01;

/// Previous-output index carried by coinbase inputs
pub const COINBASE_INDEX: u32 = 0xffff_ffff;

/// Previous-output hash carried by coinbase inputs
pub const COINBASE_PREV_HASH: [u8; 32] = [0u8; 32];

/// First header version that encodes the block height in the coinbase script
pub const HEIGHT_IN_COINBASE_VERSION: u32 = 2;

/// Maximum byte length of the height integer embedded in a coinbase script
pub const MAX_HEIGHT_BYTES: usize = 8;
