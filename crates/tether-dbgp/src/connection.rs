//! The engine-connection seam.

use async_trait::async_trait;

use crate::command::ContinuationCommand;
use crate::error::DbgpError;
use crate::frame::DbgpStackFrame;
use crate::status::Status;

/// Async surface of a live DBGp engine connection.
///
/// Implementations own the socket, wire framing, and transaction
/// bookkeeping; callers see request/response pairs. Any operation may fail
/// with [`DbgpError`], and failures are the caller's to handle; nothing at
/// this seam retries or reconnects. A hung engine hangs the corresponding
/// call, since timeouts are likewise a connection-layer concern.
#[async_trait]
pub trait DbgpConnection {
    /// Current engine execution status.
    async fn get_status(&self) -> Result<Status, DbgpError>;

    /// The current stack, innermost frame first.
    ///
    /// May be empty when the engine has nothing on the stack, e.g. after
    /// termination.
    async fn get_stack_frames(&self) -> Result<Vec<DbgpStackFrame>, DbgpError>;

    /// Resume execution in the given mode and return the status the engine
    /// settles in.
    async fn send_continuation_command(
        &self,
        command: ContinuationCommand,
    ) -> Result<Status, DbgpError>;

    /// Ask the engine to interrupt running code.
    ///
    /// Returns whether the engine accepted the break request.
    async fn send_break_command(&self) -> Result<bool, DbgpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A canned connection proving the trait is implementable over plain
    /// state and usable through a generic bound.
    struct CannedConnection {
        status: Status,
    }

    #[async_trait]
    impl DbgpConnection for CannedConnection {
        async fn get_status(&self) -> Result<Status, DbgpError> {
            Ok(self.status.clone())
        }

        async fn get_stack_frames(&self) -> Result<Vec<DbgpStackFrame>, DbgpError> {
            Ok(vec![DbgpStackFrame::new(
                "main",
                "0",
                "file",
                "file:///usr/test.php",
                "3",
            )])
        }

        async fn send_continuation_command(
            &self,
            _command: ContinuationCommand,
        ) -> Result<Status, DbgpError> {
            Ok(Status::Break)
        }

        async fn send_break_command(&self) -> Result<bool, DbgpError> {
            Err(DbgpError::Terminated)
        }
    }

    async fn status_of<C: DbgpConnection>(connection: &C) -> Status {
        connection.get_status().await.unwrap()
    }

    #[tokio::test]
    async fn connection_usable_through_generic_bound() {
        let connection = CannedConnection {
            status: Status::Break,
        };
        assert_eq!(status_of(&connection).await, Status::Break);

        let frames = connection.get_stack_frames().await.unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].function, "main");
    }

    #[tokio::test]
    async fn connection_usable_as_trait_object() {
        let connection: Box<dyn DbgpConnection + Send + Sync> = Box::new(CannedConnection {
            status: Status::Running,
        });
        let status = connection
            .send_continuation_command(ContinuationCommand::Run)
            .await
            .unwrap();
        assert_eq!(status, Status::Break);
    }

    #[tokio::test]
    async fn connection_errors_surface_to_caller() {
        let connection = CannedConnection {
            status: Status::Running,
        };
        let err = connection.send_break_command().await.unwrap_err();
        assert!(matches!(err, DbgpError::Terminated));
    }
}
