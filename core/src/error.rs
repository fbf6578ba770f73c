use thiserror::Error;

/// Per-buffer decode outcomes and construction failures.
///
/// Everything except `InvalidConfig` is a routine, recoverable outcome:
/// the frame is retransmitted continuously, so the caller just drops the
/// buffer and waits for the next one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackmatError {
    #[error("No idle-to-frame transition found in buffer")]
    SyncNotFound,

    #[error("Frame incomplete: {got} of {needed} bit periods captured")]
    IncompleteFrame { got: usize, needed: usize },

    #[error("Invalid status byte: 0x{0:02x}")]
    InvalidStatus(u8),

    #[error("Non-digit byte 0x{byte:02x} at packet position {position}")]
    InvalidDigit { position: usize, byte: u8 },

    #[error("Checksum mismatch: expected {expected}, got {got}")]
    ChecksumMismatch { expected: u8, got: u8 },

    #[error("Malformed frame terminator")]
    BadTerminator,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StackmatError>;
