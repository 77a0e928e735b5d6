//! Library-wide error and result types.

use std::fmt;
use std::io;

/// Result alias used throughout otfkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Every variant is a configuration or I/O problem detected before any
/// ciphertext is produced; the transform itself is a pure function and
/// cannot fail once its inputs have been validated.
#[derive(Debug)]
pub enum Error {
    /// A key or IV hex string had odd length or contained a non-hex digit.
    BadHex,
    /// A key or IV decoded to the wrong number of bytes (value is the
    /// byte count that was supplied).
    BadLength(usize),
    /// An underlying I/O operation failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadHex => write!(f, "invalid hex in key or IV"),
            Error::BadLength(n) => write!(f, "wrong key/IV length: {n} bytes"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::Io(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
