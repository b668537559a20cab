//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("negative size: {0}")]
    NegativeSize(i32),
    #[error("unsupported version: {0:#010x}")]
    BadVersion(u32),
    #[error("invalid type tag: {0}")]
    InvalidTag(u8),
    #[error("invalid message kind: {0}")]
    InvalidKind(u8),
    #[error("invalid utf-8 in string")]
    InvalidUtf8,
}
