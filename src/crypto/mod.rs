//! Cryptographic emulation of the OTFDEC peripheral.
//!
//! All functions accept already-shaped key material; word packing and hex
//! decoding live in [`crate::keys`]. The AES-128 primitives come from the
//! RustCrypto `aes` and `ctr` crates; what this module adds is the
//! hardware's counter derivation and the byte-order swap wrapped around
//! every engine operation.
//!
//! ## Submodules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`otfdec`] | Region configuration, per-address counter derivation, the two keystream strategies, XOR combine |
//!
//! ## Pipeline (brief)
//!
//! ```text
//! key words ──► keys::key_from_words ─┐
//!                                     ▼
//! plaintext ──► swap ──► AES-128-CTR ──► swap ──► ciphertext   (stream counter)
//!
//! key words ──► keys::key_from_words ─┐
//!                                     ▼
//! block address ──► counter ──► AES-128-ECB ──► swap ──► XOR plaintext block
//!                                                              (block derived)
//! ```

pub mod otfdec;
