//! Transaction decoding, segwit handling, and txid derivation

use crate::constants::{COINBASE_INDEX, COINBASE_PREV_HASH, SEGWIT_FLAG, SEGWIT_MARKER};
use crate::error::Result;
use crate::hash::double_sha256;
use crate::reader::ByteReader;
use crate::types::{Transaction, TxInput, TxOutput, WitnessScript};

/// Decode a transaction from a hex string, such as the output of
/// `getrawtransaction`.
pub fn transaction_from_hex(hexstring: &str) -> Result<Transaction> {
    let bytes = hex::decode(hexstring)?;
    transaction_from_bytes(&bytes)
}

/// Decode a transaction from a standalone byte buffer.
pub fn transaction_from_bytes(bytes: &[u8]) -> Result<Transaction> {
    let mut reader = ByteReader::new(bytes);
    read_transaction(&mut reader)
}

/// Decode a transaction starting at the reader's current position. This is
/// the form used while walking a block's transaction list; the reader is
/// left positioned immediately after the transaction.
pub fn read_transaction(reader: &mut ByteReader) -> Result<Transaction> {
    let start = reader.position();
    let version = reader.read_u32()?;

    // A segwit transaction carries the 0x00 0x01 marker/flag pair right
    // after the version. The byte there is otherwise the input count, which
    // is never 0x00 followed by 0x01 in a legacy encoding, so peeking
    // disambiguates without consuming anything on the legacy path.
    let is_segwit = matches!(reader.peek_bytes(2), Ok(&[SEGWIT_MARKER, SEGWIT_FLAG]));
    if is_segwit {
        reader.read_bytes(2)?;
    }

    let input_count = reader.read_compact_size()?;
    let mut inputs = Vec::new();
    for _ in 0..input_count {
        inputs.push(read_tx_input(reader)?);
    }

    let output_count = reader.read_compact_size()?;
    let mut outputs = Vec::new();
    for _ in 0..output_count {
        outputs.push(read_tx_output(reader)?);
    }
    let output_end = reader.position();

    // One witness stack per input, in input order, sitting between the
    // outputs and the locktime
    if is_segwit {
        for input in inputs.iter_mut() {
            input.witness = Some(read_witness_stack(reader)?);
        }
    }

    let lock_time_pos = reader.position();
    let lock_time = reader.read_u32()?;

    let size = lock_time_pos - start + 4;
    let hash = double_sha256(reader.peek_bytes_at(start, size)?);

    // The canonical txid predates segwit, so for a segwit transaction it is
    // derived from the legacy-equivalent serialization: version, then the
    // input/output region with marker/flag and witness stacks cut out, then
    // the locktime. Legacy software computes exactly this, and spent-output
    // lookups key on it.
    let txid = if is_segwit {
        let mut legacy = Vec::with_capacity(size - 2);
        legacy.extend_from_slice(reader.peek_bytes_at(start, 4)?);
        legacy.extend_from_slice(reader.peek_bytes_at(start + 6, output_end - (start + 6))?);
        legacy.extend_from_slice(reader.peek_bytes_at(lock_time_pos, 4)?);
        double_sha256(&legacy)
    } else {
        hash
    };

    Ok(Transaction {
        version,
        inputs,
        outputs,
        lock_time,
        size,
        hash,
        txid,
    })
}

/// Check whether a transaction is a coinbase: exactly one input referencing
/// the null previous output.
pub fn is_coinbase(tx: &Transaction) -> bool {
    tx.inputs.len() == 1
        && tx.inputs[0].prev_hash == COINBASE_PREV_HASH
        && tx.inputs[0].prev_index == COINBASE_INDEX
}

fn read_tx_input(reader: &mut ByteReader) -> Result<TxInput> {
    let mut prev_hash = [0u8; 32];
    prev_hash.copy_from_slice(reader.read_bytes(32)?); // prev txid
    let prev_index = reader.read_u32()?; // vout index in the previous tx
    let script_length = reader.read_compact_size()? as usize;
    let script = reader.read_bytes(script_length)?.to_vec();
    let sequence = reader.read_u32()?;

    Ok(TxInput {
        prev_hash,
        prev_index,
        script,
        sequence,
        witness: None,
    })
}

fn read_tx_output(reader: &mut ByteReader) -> Result<TxOutput> {
    let value = reader.read_u64()?;
    let script_length = reader.read_compact_size()? as usize;
    let script = reader.read_bytes(script_length)?.to_vec();

    Ok(TxOutput { value, script })
}

fn read_witness_stack(reader: &mut ByteReader) -> Result<WitnessScript> {
    let item_count = reader.read_compact_size()?;
    let mut stack = Vec::new();
    for _ in 0..item_count {
        let item_length = reader.read_compact_size()? as usize;
        stack.push(reader.read_bytes(item_length)?.to_vec());
    }
    Ok(stack)
}
