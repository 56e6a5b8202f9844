//! DBGp engine status values.

use std::fmt;

/// Execution status reported by a DBGp engine.
///
/// The wire value is an open string set: engines may report states beyond
/// the ones the protocol names, so unknown values are preserved in
/// [`Status::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The engine accepted the connection but has not run any user code.
    Starting,
    /// User code is executing.
    Running,
    /// Execution is suspended at a breakpoint, step, or interrupt.
    Break,
    /// The engine has begun shutting down; no further user code will run.
    Stopping,
    /// The engine has detached and the process is gone.
    Stopped,
    /// A status outside the protocol's named set.
    Other(String),
}

impl Status {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Starting => "starting",
            Status::Running => "running",
            Status::Break => "break",
            Status::Stopping => "stopping",
            Status::Stopped => "stopped",
            Status::Other(s) => s,
        }
    }

    /// Whether the engine has begun shutting down.
    ///
    /// Unrecognized statuses are never treated as stopping.
    pub fn is_stopping(&self) -> bool {
        matches!(self, Status::Stopping)
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "starting" => Status::Starting,
            "running" => Status::Running,
            "break" => Status::Break,
            "stopping" => Status::Stopping,
            "stopped" => Status::Stopped,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::from(value.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
