//! Error types shared by the codec crates.

use std::io;
use thiserror::Error;

/// The error type for all codec operations.
#[derive(Debug, Error)]
pub enum RelicError {
    /// I/O error from the underlying byte source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Construction-time configuration violation.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the violated constraint.
        message: String,
    },

    /// The byte source ran out in the middle of a bit field.
    #[error("unexpected end of input at bit {bit_position}")]
    UnexpectedEof {
        /// Bit position where input was exhausted.
        bit_position: u64,
    },

    /// A codeword that is neither assigned, reserved, nor the immediate
    /// KwKwK code.
    #[error("invalid codeword {code:#x} at bit {bit_position}")]
    InvalidCode {
        /// The offending codeword value.
        code: u32,
        /// Bit position of the codeword.
        bit_position: u64,
    },

    /// The codeword stream reached a state no conforming encoder produces.
    #[error("corrupt stream at bit {bit_position}: {message}")]
    CorruptStream {
        /// Bit position where the corruption was detected.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, RelicError>;

impl RelicError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error.
    pub fn corrupt(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptStream {
            bit_position,
            message: message.into(),
        }
    }
}
