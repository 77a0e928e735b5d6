//! Firmware image loading and writing.
//!
//! Build systems (Zephyr + MCUboot in the reference project) prepend a
//! padding/header region to the binary that must not be encrypted; the
//! loader strips it before the image reaches the crypto layer. All
//! functions here are plain pass-through I/O - no parsing, no validation of
//! image contents.

use std::fs;
use std::path::Path;

use crate::Result;

/// Drop the first `skip` bytes of `data`.
///
/// If the input is not longer than `skip`, the whole input is returned
/// unchanged - a short file is treated as already header-free rather than
/// as an error.
pub fn strip_header(data: &[u8], skip: usize) -> &[u8] {
    if data.len() > skip { &data[skip..] } else { data }
}

/// Read the image at `path` and strip a `skip`-byte header.
pub fn load_image<P: AsRef<Path>>(path: P, skip: usize) -> Result<Vec<u8>> {
    let data = fs::read(path)?;
    let stripped = strip_header(&data, skip).to_vec();
    Ok(stripped)
}

/// Write `ciphertext` to `path`, replacing any existing file.
pub fn write_image<P: AsRef<Path>>(path: P, ciphertext: &[u8]) -> Result<()> {
    fs::write(path, ciphertext)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_exactly_skip_bytes() {
        let data: Vec<u8> = (0u8..10).collect();
        assert_eq!(strip_header(&data, 4), &data[4..]);
    }

    #[test]
    fn input_equal_to_skip_is_returned_whole() {
        let data = [7u8; 1024];
        assert_eq!(strip_header(&data, 1024), &data[..]);
    }

    #[test]
    fn input_shorter_than_skip_is_returned_whole() {
        let data = [7u8; 100];
        assert_eq!(strip_header(&data, 1024), &data[..]);
    }

    #[test]
    fn zero_skip_is_identity() {
        let data = [1u8, 2, 3];
        assert_eq!(strip_header(&data, 0), &data[..]);
    }
}
