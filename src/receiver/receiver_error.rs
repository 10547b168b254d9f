use std::io;

use thiserror::Error;

/// Errors produced by a [`TextReceiver`](crate::TextReceiver) operation
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// The sink rejected the report
    #[error("failed to write to receiver output: {0}")]
    Write(#[from] io::Error),
}
