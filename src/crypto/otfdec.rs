//! OTFDEC keystream generation and image encryption.
//!
//! ## Counter layout
//!
//! The peripheral builds one 128-bit counter per 16-byte flash block from
//! its region registers and the block's bus address:
//!
//! ```text
//! word 0: nonce[0]                        (OTFDEC_RxNONCER0)
//! word 1: nonce[1]                        (OTFDEC_RxNONCER1)
//! word 2: version << 16                   (OTFDEC_RxCR VERSION field)
//! word 3: (address & 0xFFFFFFF0) | index  (region index in the low nibble)
//! ```
//!
//! Words are packed little-endian and the 16-byte result is byte-swapped to
//! engine order ([`crate::swap`]). Block `i` of an image based at `A0` uses
//! address `A0 + 16 * i`.
//!
//! ## Strategies
//!
//! Two models of the same hardware exist in deployed tooling and are kept
//! as separate, independently tested strategies (see [`Keystream`]):
//!
//! * **Stream counter** - swap the whole image, run AES-128-CTR over it with
//!   a caller-supplied initial counter (big-endian increments, no address
//!   derivation), swap the result. Output keeps the 16-aligned padded
//!   length.
//! * **Block derived** - derive the counter per block from the flash
//!   address, AES-ECB-encrypt it, swap only the keystream block, XOR with
//!   the raw plaintext block, truncate to the original length. The
//!   plaintext is deliberately *not* swapped in this strategy; the two
//!   strategies are not interchangeable and must not be unified without
//!   hardware verification.
//!
//! Both are pure functions of their inputs: re-running with identical
//! configuration yields byte-identical ciphertext.

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit, KeyIvInit, StreamCipher};

use crate::swap::{reverse_block, reverse_chunks};
use crate::{BLOCK_SIZE, keys};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Configuration of one OTFDEC key/address region.
///
/// Mirrors the per-region register set; all values are supplied at
/// construction time so the transform stays pure and testable.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Key-register words (OTFDEC_RxKEYR0..3).
    pub key: [u32; 4],
    /// Nonce-register words, constant across an image.
    pub nonce: [u32; 2],
    /// Firmware version, placed in the upper half of counter word 2.
    pub version: u16,
    /// Hardware region index (1..=4), ORed into the low nibble of the
    /// address word.
    pub index: u8,
    /// Flash bus address of the first image block; must be 16-byte aligned.
    pub base_address: u32,
}

impl Region {
    /// The 16-byte AES key in engine byte order.
    pub fn key_bytes(&self) -> [u8; BLOCK_SIZE] {
        keys::key_from_words(self.key)
    }

    /// Build the engine-order counter for the block at `address`.
    pub fn counter(&self, address: u32) -> [u8; BLOCK_SIZE] {
        let words = [
            self.nonce[0],
            self.nonce[1],
            u32::from(self.version) << 16,
            (address & 0xFFFF_FFF0) | u32::from(self.index),
        ];
        let mut packed = [0u8; BLOCK_SIZE];
        for (i, w) in words.iter().enumerate() {
            packed[i * 4..(i + 1) * 4].copy_from_slice(&w.to_le_bytes());
        }
        reverse_block(packed)
    }
}

/// Keystream strategy selector.
#[derive(Debug, Clone, Copy)]
pub enum Keystream {
    /// Whole-buffer AES-128-CTR with a caller-supplied initial counter.
    StreamCounter {
        /// 16-byte initial counter value, already in engine order.
        iv: [u8; BLOCK_SIZE],
    },
    /// Per-block single-block encryption of the address-derived counter.
    BlockDerived,
}

/// Encrypt a firmware image for in-place execution under OTFDEC.
///
/// The output length contract depends on the strategy: `StreamCounter`
/// emits the full 16-aligned padded length, `BlockDerived` truncates back
/// to `plaintext.len()`.
pub fn encrypt_image(region: &Region, keystream: &Keystream, plaintext: &[u8]) -> Vec<u8> {
    match keystream {
        Keystream::StreamCounter { iv } => encrypt_stream(&region.key_bytes(), iv, plaintext),
        Keystream::BlockDerived => encrypt_blocks(region, plaintext),
    }
}

/// Stream-counter strategy over an explicit key and initial counter.
///
/// Swaps the plaintext into engine order, applies AES-128-CTR (the counter
/// increments as one big-endian 128-bit integer), and swaps the ciphertext
/// back. Output length is `plaintext.len()` rounded up to 16; empty in,
/// empty out.
pub fn encrypt_stream(
    key: &[u8; BLOCK_SIZE],
    iv: &[u8; BLOCK_SIZE],
    plaintext: &[u8],
) -> Vec<u8> {
    let mut buf = reverse_chunks(plaintext);
    // reverse_chunks always pads to a whole number of blocks; anything else
    // here is an implementation bug, not an input condition.
    assert!(buf.len() % BLOCK_SIZE == 0, "CTR input not block-aligned");
    let mut cipher = Aes128Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    reverse_chunks(&buf)
}

/// Block-derived strategy over a [`Region`].
///
/// Each 16-byte block at `base_address + 16 * i` gets its own single-block
/// encrypted counter; only the keystream is byte-swapped, the plaintext is
/// combined raw. The output is truncated to the original plaintext length,
/// so a trailing partial block round-trips exactly.
pub fn encrypt_blocks(region: &Region, plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes128::new(&region.key_bytes().into());
    let mut out = Vec::with_capacity(plaintext.len().next_multiple_of(BLOCK_SIZE));
    for (i, chunk) in plaintext.chunks(BLOCK_SIZE).enumerate() {
        let address = region.base_address.wrapping_add((i * BLOCK_SIZE) as u32);
        let mut block = GenericArray::from(region.counter(address));
        cipher.encrypt_block(&mut block);
        let ks = reverse_block(block.into());

        let mut plain = [0u8; BLOCK_SIZE];
        plain[..chunk.len()].copy_from_slice(chunk);
        out.extend_from_slice(&combine(&plain, &ks));
    }
    out.truncate(plaintext.len());
    out
}

/// Single keystream block for `counter` under `key`: AES-ECB encrypt, then
/// swap to bus order. This is exactly the per-block value XORed into the
/// data by [`encrypt_blocks`].
pub fn keystream_block(key: &[u8; BLOCK_SIZE], counter: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let cipher = Aes128::new(key.into());
    let mut block = GenericArray::from(*counter);
    cipher.encrypt_block(&mut block);
    reverse_block(block.into())
}

/// Byte-wise XOR of one plaintext block with one keystream block.
#[inline]
fn combine(plain: &[u8; BLOCK_SIZE], ks: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    std::array::from_fn(|i| plain[i] ^ ks[i])
}
