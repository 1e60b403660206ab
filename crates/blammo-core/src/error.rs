use thiserror::Error;

/// Errors raised while encoding or decoding events.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input does not have the shape of a canonical line
    #[error("malformed line: {0}")]
    Malformed(String),

    /// Level code is not one of `d`, `i`, `w`, `e`
    #[error("unknown level code: {0:?}")]
    UnknownLevel(String),

    /// Timestamp is not valid RFC 3339
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// Input is not UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// I/O error while producing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
