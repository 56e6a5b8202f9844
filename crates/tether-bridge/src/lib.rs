//! tether-bridge — Chrome Debugger-domain dispatch for tether.
//!
//! Receives Debugger-domain method invocations from a debugger front end,
//! drives a DBGp engine connection, and emits the resulting replies and
//! events. Wire transports on both sides live elsewhere; this crate is the
//! protocol state machine between them.

pub mod bridge;
pub mod error;
pub mod frames;
pub mod frontend;
pub mod protocol;

// Re-export key types for convenience.
pub use bridge::DebuggerBridge;
pub use error::BridgeError;
pub use frontend::FrontEnd;
pub use protocol::{CallFrame, Location, PausedParams, RemoteValue, Scope};
