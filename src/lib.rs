//! **otfkit** - pre-encrypt firmware images for the STM32H7 OTFDEC peripheral.
//!
//! OTFDEC decrypts external flash transparently, per memory access, while the
//! CPU executes in place. A build pipeline must therefore encrypt the image
//! so that the peripheral's AES-CTR engine reconstructs the original
//! instructions at runtime. The counter is derived from the flash address of
//! each 16-byte block, and the hardware applies a byte-order swap around
//! every AES operation - both must be reproduced bit-exactly or the device
//! silently executes garbage.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`swap`]   | 16-byte chunk byte-order normalization (the hardware bus convention) |
//! | [`keys`]   | Key/IV material - word packing and strict hex decoding |
//! | [`crypto`] | Counter derivation, AES-128 keystream strategies, XOR combine |
//! | [`image`]  | Image loading with header stripping, image writing |
//!
//! # Example
//! ```no_run
//! use otfkit::crypto::otfdec::{Keystream, Region, encrypt_image};
//! use otfkit::image;
//!
//! let region = Region {
//!     key: [0xA9876543, 0x210FEDCB, 0xA9876543, 0x210FEDCB],
//!     nonce: [0x11111111, 0x55555555],
//!     version: 0xA5A5,
//!     index: 1,
//!     base_address: 0x9000_0000,
//! };
//! let plain = image::load_image("zephyr.bin", 1024)?;
//! let cipher = encrypt_image(&region, &Keystream::BlockDerived, &plain);
//! image::write_image("zephyr_enc.bin", &cipher)?;
//! # Ok::<(), otfkit::Error>(())
//! ```

pub mod crypto;
pub mod error;
pub mod image;
pub mod keys;
pub mod swap;

pub use error::{Error, Result};

/// AES block size; the only granularity at which OTFDEC operates.
pub const BLOCK_SIZE: usize = 16;
