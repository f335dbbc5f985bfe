//! Error types for HSV buffer adjustment.

use thiserror::Error;

/// Error type for buffer adjustment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HsvError {
    /// Byte length is not a whole number of RGBA pixels.
    #[error("buffer length {len} is not a multiple of 4")]
    InvalidLength { len: usize },

    /// Declared length runs past the end of the buffer.
    #[error("declared length {length} exceeds buffer of {available} bytes")]
    BufferTooShort { length: usize, available: usize },

    /// Host-supplied dimensions do not match the buffer.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for buffer adjustment.
pub type Result<T> = std::result::Result<T, HsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HsvError::InvalidLength { len: 7 }.to_string(),
            "buffer length 7 is not a multiple of 4"
        );
        assert_eq!(
            HsvError::BufferTooShort { length: 16, available: 8 }.to_string(),
            "declared length 16 exceeds buffer of 8 bytes"
        );
        assert_eq!(
            HsvError::InvalidDimensions("expected 16 bytes".into()).to_string(),
            "invalid dimensions: expected 16 bytes"
        );
    }
}
