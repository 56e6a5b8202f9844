//! Command dispatch between the Chrome Debugger domain and a DBGp engine.

use std::sync::Mutex;

use tracing::{debug, warn};

use tether_dbgp::{ContinuationCommand, DbgpConnection, DbgpStackFrame, Status};

use crate::error::BridgeError;
use crate::frames;
use crate::frontend::FrontEnd;
use crate::protocol::{PausedParams, EVENT_PAUSED, EVENT_RESUMED};

/// Listener invoked when the remote process's termination is observed.
type SessionEndListener = Box<dyn FnOnce() + Send>;

/// Session-end listener bookkeeping.
struct SessionEnd {
    listeners: Vec<SessionEndListener>,
    signaled: bool,
}

/// Bridges Chrome Debugger-domain commands onto a DBGp engine connection.
///
/// One instance serves one logical debug session. Commands arrive through
/// [`handle_command`](Self::handle_command); replies and events leave
/// through the [`FrontEnd`] transport. The engine-connection awaits are the
/// only suspension points and no lock is held across them, so a caller may
/// dispatch a command while a previous sequence is still in flight;
/// ordering between such sequences is the caller's to serialize.
pub struct DebuggerBridge<C, F> {
    connection: C,
    front_end: F,
    session_end: Mutex<SessionEnd>,
}

impl<C, F> DebuggerBridge<C, F>
where
    C: DbgpConnection,
    F: FrontEnd,
{
    /// Create a bridge over an engine connection and a front-end transport.
    pub fn new(connection: C, front_end: F) -> Self {
        Self {
            connection,
            front_end,
            session_end: Mutex::new(SessionEnd {
                listeners: Vec::new(),
                signaled: false,
            }),
        }
    }

    /// The engine connection this bridge drives.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// The front-end transport this bridge emits on.
    pub fn front_end(&self) -> &F {
        &self.front_end
    }

    /// Register a listener for remote-process termination.
    ///
    /// Listeners fire exactly once; termination is observed at most once
    /// per bridge instance. Register before issuing any command that can
    /// terminate the session; a listener registered after termination has
    /// been signaled is dropped, never invoked late.
    pub fn on_session_end(&self, listener: impl FnOnce() + Send + 'static) {
        let mut session_end = self.session_end.lock().expect("session-end lock poisoned");
        if session_end.signaled {
            return;
        }
        session_end.listeners.push(Box::new(listener));
    }

    /// Dispatch one Debugger-domain command.
    ///
    /// Resolves when the sequence the command triggers has completed.
    /// Unsupported commands and failed preconditions are answered with an
    /// error reply and still resolve `Ok`; engine-connection failures
    /// propagate to the caller.
    pub async fn handle_command(
        &self,
        request_id: i64,
        method: &str,
        _params: Option<serde_json::Value>,
    ) -> Result<(), BridgeError> {
        debug!("dispatching debugger command {} (request {})", method, request_id);
        match method {
            "enable" => self.enable().await,
            "pause" => self.pause(request_id).await,
            "resume" => self.continuation(ContinuationCommand::Run).await,
            "stepInto" => self.continuation(ContinuationCommand::StepInto).await,
            "stepOut" => self.continuation(ContinuationCommand::StepOut).await,
            "stepOver" => self.continuation(ContinuationCommand::StepOver).await,
            "setPauseOnExceptions" | "setAsyncCallStackDepth" | "skipStackFrames" => {
                warn!("debugger command not implemented: {}", method);
                self.front_end
                    .reply_with_error(request_id, &format!("{method} is not implemented"));
                Ok(())
            }
            unknown => {
                warn!("unknown debugger command: {}", unknown);
                self.front_end
                    .reply_with_error(request_id, &format!("unknown debugger command: {unknown}"));
                Ok(())
            }
        }
    }

    /// `Debugger.enable`: warm the engine up if it has not run yet, then
    /// report the current stop point.
    async fn enable(&self) -> Result<(), BridgeError> {
        let status = self.connection.get_status().await?;
        debug!("engine status on enable: {}", status);
        if status == Status::Starting {
            // A freshly attached engine sits before the first statement;
            // step onto it so there is a frame to report.
            self.continuation(ContinuationCommand::StepInto).await
        } else {
            self.send_paused().await
        }
    }

    /// `Debugger.pause`: ask the engine to interrupt running code.
    async fn pause(&self, request_id: i64) -> Result<(), BridgeError> {
        let interrupted = self.connection.send_break_command().await?;
        if !interrupted {
            warn!("engine rejected break request (request {})", request_id);
            self.front_end
                .reply_with_error(request_id, "engine rejected the break request");
        }
        // An accepted break is reported asynchronously, by the pause
        // sequence of whichever command observes the stop.
        Ok(())
    }

    /// Shared continuation sequence for `resume`, the step family, and the
    /// `enable` warm-up.
    async fn continuation(&self, command: ContinuationCommand) -> Result<(), BridgeError> {
        // The client learns that execution is proceeding before the engine
        // answers.
        self.front_end.send_method(EVENT_RESUMED, None);
        let status = self.connection.send_continuation_command(command).await?;
        debug!("continuation {} settled with status {}", command, status);
        if status.is_stopping() {
            return self.finish_session().await;
        }
        self.send_paused().await
    }

    /// Drive a stopping engine to full termination.
    ///
    /// `stopping` is an intermediate shutdown status, not a breakpoint
    /// stop: the client is told execution resumed through it, the engine
    /// is stopped for good, and session-end listeners fire. The final
    /// paused event carries no frames: the process is gone, so the stack
    /// is not fetched.
    async fn finish_session(&self) -> Result<(), BridgeError> {
        self.front_end.send_method(EVENT_RESUMED, None);
        self.connection
            .send_continuation_command(ContinuationCommand::Stop)
            .await?;
        self.notify_session_end();
        self.emit_paused(&[]);
        Ok(())
    }

    /// Pause sequence: fetch the engine's stack and report it.
    async fn send_paused(&self) -> Result<(), BridgeError> {
        let stack = self.connection.get_stack_frames().await?;
        self.emit_paused(&stack);
        Ok(())
    }

    /// Emit `Debugger.paused` for the given raw stack.
    fn emit_paused(&self, stack: &[DbgpStackFrame]) {
        let params = PausedParams::breakpoint(frames::call_frames(stack));
        let params = serde_json::to_value(params).unwrap_or_default();
        self.front_end.send_method(EVENT_PAUSED, Some(params));
    }

    /// Invoke every registered session-end listener exactly once.
    fn notify_session_end(&self) {
        let listeners = {
            let mut session_end = self.session_end.lock().expect("session-end lock poisoned");
            session_end.signaled = true;
            std::mem::take(&mut session_end.listeners)
        };
        debug!("session ended, notifying {} listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }
}
