//! Error types for response writing.

use thiserror::Error;

/// Error produced by an [`Encoder`](crate::encoding::Encoder).
pub type EncodeError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while turning a handler value into response bytes.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The response sink rejected the write (usually a client disconnect).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No fast path matched and no encoder is registered for the current
    /// content type.
    #[error("cannot serialize data for writing to client (content type {content_type:?})")]
    NoSerializer { content_type: String },

    /// The registered encoder failed.
    #[error("{content_type} encoder failed: {source}")]
    Encode {
        content_type: String,
        #[source]
        source: EncodeError,
    },
}

pub type Result<T> = std::result::Result<T, WriteError>;
