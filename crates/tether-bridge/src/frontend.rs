//! The outbound front-end transport seam.

/// Outbound surface toward the debugger front end.
///
/// Delivery is fire-and-forget from the bridge's perspective: transport
/// failures belong to the owning connection handler. An implementation may
/// write to a socket directly or enqueue onto a channel, as long as the
/// per-sequence ordering of calls is preserved.
pub trait FrontEnd {
    /// Reply to a command with a result payload.
    ///
    /// No supported Debugger-domain command currently produces a direct
    /// result; this is reserved for ones that do.
    fn reply_to_command(&self, request_id: i64, result: serde_json::Value);

    /// Reply to a command with a protocol-level error message.
    fn reply_with_error(&self, request_id: i64, message: &str);

    /// Send a Debugger-domain event to the front end.
    fn send_method(&self, method: &str, params: Option<serde_json::Value>);
}
