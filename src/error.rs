//! rsha1 error types for consistent error handling across modules

use std::fmt;

#[derive(Debug, Clone)]
pub enum Rsha1Error {
    /// Message whose bit length does not fit the 64-bit length field
    InputTooLarge(String),

    /// I/O errors (file read, stdin)
    Io(String),

    /// Validation errors (malformed digest, bad arguments)
    Validation(String),
}

impl fmt::Display for Rsha1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rsha1Error::InputTooLarge(msg) => write!(f, "Input too large: {}", msg),
            Rsha1Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Rsha1Error::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for Rsha1Error {}

impl From<std::io::Error> for Rsha1Error {
    fn from(err: std::io::Error) -> Self {
        Rsha1Error::Io(err.to_string())
    }
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Rsha1Error>;
