//! Bridge error types.

use thiserror::Error;

use tether_dbgp::DbgpError;

/// Errors escaping [`DebuggerBridge::handle_command`].
///
/// Unsupported commands and failed preconditions are answered on the
/// front-end transport and are not errors at this level; only failures of
/// the engine connection itself surface here. The caller owns
/// reconnection and session-abort policy.
///
/// [`DebuggerBridge::handle_command`]: crate::bridge::DebuggerBridge::handle_command
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The engine connection failed mid-sequence.
    #[error(transparent)]
    Engine(#[from] DbgpError),
}
