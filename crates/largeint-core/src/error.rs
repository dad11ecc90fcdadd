//! Error types for parsing and stream input.

/// Error from parsing a decimal digit string.
///
/// Malformed input is rejected before any node is acquired, so a
/// constructed list always satisfies the normalization invariants the
/// comparison shortcut relies on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseLargeIntError {
    /// The input string held no characters at all.
    #[error("empty digit string")]
    Empty,

    /// A character outside `'0'..='9'` was found.
    #[error("invalid digit {ch:?} at byte offset {index}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character within the input.
        index: usize,
    },
}

/// Error from reading a value off a text input stream.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The stream ended before any token was found.
    #[error("end of input before any token")]
    Eof,

    /// The underlying reader failed.
    #[error("failed to read token")]
    Io(#[from] std::io::Error),

    /// A token was read but is not a valid decimal digit string.
    #[error(transparent)]
    Parse(#[from] ParseLargeIntError),
}
