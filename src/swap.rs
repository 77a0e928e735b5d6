//! Byte-order normalization for the OTFDEC bus convention.
//!
//! The peripheral reads external flash through a 128-bit bus and presents
//! each 16-byte beat to its AES engine in reversed byte order. Everything
//! that crosses the engine boundary - key, counter, keystream, and (in the
//! whole-buffer pipeline) the data itself - must be reordered the same way
//! on the host side.
//!
//! The reversal operates on whole 16-byte chunks only. A short trailing
//! chunk is right-zero-padded before reversal, so the output length is
//! always the input length rounded up to a multiple of 16. On inputs that
//! are already 16-aligned the operation is an involution:
//! `reverse_chunks(reverse_chunks(x)) == x`.

use crate::BLOCK_SIZE;

/// Reverse byte order within each 16-byte chunk of `data`.
///
/// The final chunk is zero-padded to 16 bytes before reversal, so the
/// result is always 16-aligned. An empty input yields an empty output.
pub fn reverse_chunks(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len().next_multiple_of(BLOCK_SIZE));
    for chunk in data.chunks(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        block.reverse();
        out.extend_from_slice(&block);
    }
    out
}

/// Reverse a single 16-byte block.
#[inline]
pub fn reverse_block(mut block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    block.reverse();
    block
}
