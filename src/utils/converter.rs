//! Byte-to-word conversion utilities.
//!
//! Converts between byte buffers and 3-Way keys and blocks. A 12-byte
//! group maps to three `u32` words, word `i` taken from bytes `4i..4i + 4`
//! in big-endian order.

use crate::error::ThreeWayError;
use crate::Block;

/// Size in bytes of a 3-Way block and of a 3-Way key.
pub const BLOCK_BYTES: usize = 12;

/// Loads three big-endian words from the first 12 bytes of `input`.
///
/// Callers guarantee `input.len() >= BLOCK_BYTES`.
#[inline]
pub(crate) fn load_block(input: &[u8]) -> Block {
    std::array::from_fn(|i| {
        u32::from_be_bytes([
            input[4 * i],
            input[4 * i + 1],
            input[4 * i + 2],
            input[4 * i + 3],
        ])
    })
}

/// Stores three words as big-endian bytes into the first 12 bytes of `output`.
///
/// Callers guarantee `output.len() >= BLOCK_BYTES`.
#[inline]
pub(crate) fn store_block(block: &Block, output: &mut [u8]) {
    for (chunk, word) in output.chunks_exact_mut(4).zip(block.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Converts a 12-byte key into the three key words.
///
/// # Errors
/// Returns [`ThreeWayError::InvalidKeyLength`] if `input.len() != 12`.
///
/// # Examples
///
/// ```
/// use threeway::utils::converter::key_from_bytes;
///
/// let key = key_from_bytes(&[0, 0, 0, 6, 0, 0, 0, 5, 0, 0, 0, 4]).unwrap();
/// assert_eq!(key, [6, 5, 4]);
/// ```
pub fn key_from_bytes(input: &[u8]) -> Result<Block, ThreeWayError> {
    if input.len() != BLOCK_BYTES {
        log::debug!("rejected 3-Way key of {} bytes", input.len());
        return Err(ThreeWayError::InvalidKeyLength);
    }
    Ok(load_block(input))
}

/// Converts a byte slice into a `Vec` of blocks.
///
/// # Errors
/// Returns [`ThreeWayError::InvalidByteArrayLength`] if `input.len() % 12 != 0`.
pub fn bytes_to_blocks(input: &[u8]) -> Result<Vec<Block>, ThreeWayError> {
    if !input.len().is_multiple_of(BLOCK_BYTES) {
        log::debug!("rejected byte array of {} bytes", input.len());
        return Err(ThreeWayError::InvalidByteArrayLength);
    }
    Ok(input.chunks_exact(BLOCK_BYTES).map(load_block).collect())
}

/// Converts a slice of blocks into a `Vec<u8>` of `blocks.len() * 12` bytes.
pub fn blocks_to_bytes(input: &[Block]) -> Vec<u8> {
    let mut output = vec![0u8; input.len() * BLOCK_BYTES];
    for (chunk, block) in output.chunks_exact_mut(BLOCK_BYTES).zip(input.iter()) {
        store_block(block, chunk);
    }
    output
}
