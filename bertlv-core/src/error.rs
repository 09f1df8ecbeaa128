use thiserror::Error;

/// Main error type for BER-TLV decoding operations
#[derive(Error, Debug)]
pub enum TlvError {
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid length field: {0}")]
    InvalidLength(String),

    #[error("Value slice error: {0}")]
    ValueSlice(String),
}

/// Result type alias for BER-TLV decoding operations
pub type TlvResult<T> = Result<T, TlvError>;
