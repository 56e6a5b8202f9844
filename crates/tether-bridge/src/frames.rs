//! DBGp-to-Chrome stack frame translation.

use tether_dbgp::DbgpStackFrame;

use crate::protocol::{CallFrame, Location, RemoteValue, Scope};

/// Translate a whole DBGp stack, preserving order.
///
/// `callFrameId`s are assigned densely from the output position, so the
/// innermost frame is always id 0 regardless of what the engine put in the
/// `level` attribute.
pub fn call_frames(frames: &[DbgpStackFrame]) -> Vec<CallFrame> {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| call_frame_at(index, frame))
        .collect()
}

/// Translate one raw DBGp frame sitting at `index` in its stack.
///
/// DBGp line numbers are 1-based, Chrome's are 0-based; an unparseable
/// line number saturates to 0. The `file://` scheme is stripped from the
/// filename to form the script id.
pub fn call_frame_at(index: usize, frame: &DbgpStackFrame) -> CallFrame {
    CallFrame {
        call_frame_id: index as i64,
        function_name: frame.function.clone(),
        location: Location {
            script_id: strip_file_scheme(&frame.filename).to_string(),
            line_number: frame.lineno.parse::<i64>().map_or(0, |n| (n - 1).max(0)),
        },
        scope_chain: vec![Scope::local_placeholder()],
        this_object: RemoteValue::unresolved_this(),
    }
}

fn strip_file_scheme(filename: &str) -> &str {
    filename.strip_prefix("file://").unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_translate_in_order() {
        let raw = vec![
            DbgpStackFrame::new("foo", "0", "file", "file:///usr/test.php", "5"),
            DbgpStackFrame::new("main", "1", "file", "file:///usr/test.php", "15"),
        ];
        let frames = call_frames(&raw);
        assert_eq!(frames.len(), 2);

        assert_eq!(frames[0].call_frame_id, 0);
        assert_eq!(frames[0].function_name, "foo");
        assert_eq!(frames[0].location.script_id, "/usr/test.php");
        assert_eq!(frames[0].location.line_number, 4);

        assert_eq!(frames[1].call_frame_id, 1);
        assert_eq!(frames[1].function_name, "main");
        assert_eq!(frames[1].location.script_id, "/usr/test.php");
        assert_eq!(frames[1].location.line_number, 14);
    }

    #[test]
    fn frames_empty_stack() {
        assert!(call_frames(&[]).is_empty());
    }

    #[test]
    fn frame_id_comes_from_position_not_level() {
        let raw = vec![
            DbgpStackFrame::new("a", "7", "file", "file:///a.php", "1"),
            DbgpStackFrame::new("b", "9", "file", "file:///b.php", "2"),
        ];
        let frames = call_frames(&raw);
        assert_eq!(frames[0].call_frame_id, 0);
        assert_eq!(frames[1].call_frame_id, 1);
    }

    #[test]
    fn frame_line_number_converts_to_zero_based() {
        let frame = DbgpStackFrame::new("f", "0", "file", "file:///a.php", "1");
        assert_eq!(call_frame_at(0, &frame).location.line_number, 0);
    }

    #[test]
    fn frame_unparseable_line_saturates_to_zero() {
        for lineno in ["", "x", "0"] {
            let frame = DbgpStackFrame::new("f", "0", "file", "file:///a.php", lineno);
            assert_eq!(call_frame_at(0, &frame).location.line_number, 0, "lineno {lineno:?}");
        }
    }

    #[test]
    fn frame_plain_path_kept_verbatim() {
        let frame = DbgpStackFrame::new("f", "0", "file", "/usr/test.php", "5");
        assert_eq!(call_frame_at(0, &frame).location.script_id, "/usr/test.php");
    }

    #[test]
    fn frame_carries_placeholder_scope_and_this() {
        let frame = DbgpStackFrame::new("f", "0", "file", "file:///a.php", "1");
        let translated = call_frame_at(0, &frame);
        assert_eq!(translated.scope_chain.len(), 1);
        assert_eq!(translated.scope_chain[0].scope_type, "local");
        assert!(!translated.this_object.value.is_empty());
    }
}
