//! DBGp continuation commands.

use std::fmt;

/// A DBGp operation that resumes execution in some mode and returns the
/// status the engine settles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationCommand {
    /// Step to the next statement, entering calls.
    StepInto,
    /// Run until the current function returns.
    StepOut,
    /// Step to the next statement, stepping over calls.
    StepOver,
    /// Run until a breakpoint or the end of the script.
    Run,
    /// Stop execution and end the session.
    Stop,
}

impl ContinuationCommand {
    /// The wire name of this command.
    pub fn as_str(self) -> &'static str {
        match self {
            ContinuationCommand::StepInto => "step_into",
            ContinuationCommand::StepOut => "step_out",
            ContinuationCommand::StepOver => "step_over",
            ContinuationCommand::Run => "run",
            ContinuationCommand::Stop => "stop",
        }
    }
}

impl fmt::Display for ContinuationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_wire_names() {
        assert_eq!(ContinuationCommand::StepInto.as_str(), "step_into");
        assert_eq!(ContinuationCommand::StepOut.as_str(), "step_out");
        assert_eq!(ContinuationCommand::StepOver.as_str(), "step_over");
        assert_eq!(ContinuationCommand::Run.as_str(), "run");
        assert_eq!(ContinuationCommand::Stop.as_str(), "stop");
    }

    #[test]
    fn command_display_matches_wire_name() {
        assert_eq!(ContinuationCommand::Run.to_string(), "run");
        assert_eq!(format!("{}", ContinuationCommand::StepInto), "step_into");
    }

    #[test]
    fn command_is_copy() {
        let cmd = ContinuationCommand::Stop;
        let copied = cmd;
        assert_eq!(cmd, copied);
    }
}
