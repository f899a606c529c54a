//! The error type of the driver functions.

use thiserror::Error;


/// Why a top-level parse did not produce a value.  A parser not matching
/// inside a grammar is not an error; only the driver functions report this.
#[derive(Error, Debug)]
pub enum Error {
    /// The parser did not match at the start of the input.
    #[error("Invalid value.")]
    InvalidValue,

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The `Result` of the driver functions.
pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidValue.to_string(), "Invalid value.");
        let e = Error::from(io::Error::new(io::ErrorKind::Other, "gone"));
        assert_eq!(e.to_string(), "I/O error: gone");
        assert!(matches!(e, Error::Io(_)));
    }
}
