//! Chrome Debugger-domain protocol types.
//!
//! Structures for the Debugger-domain events the bridge emits, with serde
//! Serialize/Deserialize support. Field names follow the Chrome DevTools
//! Protocol camelCase wire form.

use serde::{Deserialize, Serialize};

/// Event announcing that execution has resumed. Carries no parameters.
pub const EVENT_RESUMED: &str = "Debugger.resumed";

/// Event announcing that execution has paused.
pub const EVENT_PAUSED: &str = "Debugger.paused";

/// A value mirrored from the debuggee.
///
/// Scope contents and `this` objects need a variable-evaluation
/// collaborator to resolve; until one is wired in, frames carry the
/// protocol shape with an inert value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteValue {
    /// Display value.
    pub value: String,
}

impl RemoteValue {
    /// Placeholder for a scope object the bridge cannot resolve.
    pub fn unresolved_scope() -> Self {
        Self {
            value: "<scope unavailable>".to_string(),
        }
    }

    /// Placeholder for a `this` object the bridge cannot resolve.
    pub fn unresolved_this() -> Self {
        Self {
            value: "<this unavailable>".to_string(),
        }
    }
}

/// One entry of a call frame's scope chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    /// Scope kind, e.g. `"local"`.
    #[serde(rename = "type")]
    pub scope_type: String,
    /// The object holding the scope's variables.
    pub object: RemoteValue,
}

impl Scope {
    /// The local-scope placeholder carried on every frame.
    pub fn local_placeholder() -> Self {
        Self {
            scope_type: "local".to_string(),
            object: RemoteValue::unresolved_scope(),
        }
    }
}

/// Source location of a call frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Script identifier; for DBGp engines, the filesystem path.
    pub script_id: String,
    /// 0-based line number.
    pub line_number: i64,
}

/// A Chrome Debugger-domain call frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    /// Dense 0-based identifier, equal to the frame's position in the
    /// emitted `callFrames` array.
    pub call_frame_id: i64,
    /// Name of the function this frame executes in.
    pub function_name: String,
    /// Where execution is suspended in this frame.
    pub location: Location,
    /// Scopes visible from this frame.
    pub scope_chain: Vec<Scope>,
    /// The frame's `this` object.
    #[serde(rename = "this")]
    pub this_object: RemoteValue,
}

/// Parameters of the `Debugger.paused` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PausedParams {
    /// The stopped call stack, innermost frame first.
    pub call_frames: Vec<CallFrame>,
    /// Why execution stopped. Always `"breakpoint"`; DBGp does not
    /// distinguish stop causes at this layer.
    pub reason: String,
    /// Additional stop metadata. Always empty.
    pub data: serde_json::Value,
}

impl PausedParams {
    /// Build the standard breakpoint-stop payload for a translated stack.
    pub fn breakpoint(call_frames: Vec<CallFrame>) -> Self {
        Self {
            call_frames,
            reason: "breakpoint".to_string(),
            data: serde_json::json!({}),
        }
    }
}
