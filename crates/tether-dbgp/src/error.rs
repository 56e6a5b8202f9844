//! DBGp connection error types.

use thiserror::Error;

/// Errors from operations against a DBGp engine connection.
#[derive(Debug, Error)]
pub enum DbgpError {
    /// Socket-level I/O failure.
    #[error("engine connection I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection layer failed to deliver or frame a message.
    #[error("engine transport error: {0}")]
    Transport(String),

    /// The engine sent a payload the connection layer could not interpret.
    #[error("malformed engine response: {0}")]
    Protocol(String),

    /// The connection is gone; no further commands can be sent.
    #[error("engine connection terminated")]
    Terminated,
}
